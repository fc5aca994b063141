//! Policy rule model.
//!
//! Rules are parsed from bus configuration long before this crate sees
//! them. Here they are shared, read-only objects: result sets reference
//! rules through `Arc`, never by copy.

use macgate_core::AccessRights;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a bus policy rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    /// Governs owning a bus name.
    Own,

    /// Governs sending a message to a bus name.
    Send,

    /// Governs receiving a message from a bus name.
    Receive,

    /// Matched against the connecting user at connection time. Not
    /// label-checked.
    User,

    /// Matched against the connecting group at connection time. Not
    /// label-checked.
    Group,
}

impl RuleKind {
    /// The rights a subject must hold on a rule's object label for a
    /// rule of this kind to apply to it.
    ///
    /// Own demands full control, Send demands write, Receive demands
    /// read. Kinds that are not access-controlled by label return
    /// `None` and are skipped by the decision engine.
    pub fn requested_rights(&self) -> Option<AccessRights> {
        match self {
            Self::Own => Some(AccessRights::full_control()),
            Self::Send => Some(AccessRights::WRITE),
            Self::Receive => Some(AccessRights::READ),
            Self::User | Self::Group => None,
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Own => write!(f, "own"),
            Self::Send => write!(f, "send"),
            Self::Receive => write!(f, "receive"),
            Self::User => write!(f, "user"),
            Self::Group => write!(f, "group"),
        }
    }
}

/// Whether a rule grants or refuses the operation it describes once it
/// applies to a connection. Enforcement happens in the bus, after this
/// crate has decided which rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleEffect {
    /// The rule grants the operation.
    Allow,

    /// The rule refuses the operation.
    Deny,
}

impl fmt::Display for RuleEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allow => write!(f, "allow"),
            Self::Deny => write!(f, "deny"),
        }
    }
}

/// One parsed bus policy rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyRule {
    /// The unique ID of this rule, assigned at configuration load.
    pub id: String,

    /// The kind of this rule.
    pub kind: RuleKind,

    /// The effect of this rule.
    pub effect: RuleEffect,

    /// The bus name or destination pattern the rule speaks about, if
    /// the configuration scoped it to one.
    pub target: Option<String>,
}

impl PolicyRule {
    /// Create a new policy rule.
    pub fn new(id: impl Into<String>, kind: RuleKind, effect: RuleEffect) -> Self {
        Self {
            id: id.into(),
            kind,
            effect,
            target: None,
        }
    }

    /// Scope the rule to a bus name or destination pattern.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}

impl fmt::Display for PolicyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} '{}'", self.effect, self.kind, self.id)?;
        if let Some(target) = &self.target {
            write!(f, " -> {}", target)?;
        }
        Ok(())
    }
}
