//! The opaque MAC security label type.
//!
//! A label identifies a MAC subject or object. Labels are minted by the
//! operating system's MAC facility and are entirely opaque to the bus:
//! equality is byte-exact and no normalization is ever applied.
//!
//! # Examples
//!
//! ```
//! use macgate_core::label::SecurityLabel;
//!
//! let subject = SecurityLabel::new("System");
//! let object = SecurityLabel::new("User::App");
//!
//! // Labels are compared byte-for-byte
//! assert_ne!(subject, object);
//! assert_ne!(SecurityLabel::new("System"), SecurityLabel::new("system"));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque, immutable MAC security label.
///
/// A `SecurityLabel` is owned by whoever requested it; the resolver mints
/// a fresh one on every query, and dropping the value releases it. There
/// is no shared or cached label state anywhere in this layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecurityLabel(String);

impl SecurityLabel {
    /// Create a label from its textual form.
    ///
    /// The text is stored exactly as given. Case, whitespace, and any
    /// structure the MAC facility may encode in the label are preserved
    /// and never interpreted here.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// View the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the label, yielding its textual form.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SecurityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SecurityLabel {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl From<&str> for SecurityLabel {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl AsRef<str> for SecurityLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
