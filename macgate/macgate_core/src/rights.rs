//! Access rights bit sets.
//!
//! Rights are what the decision engine asks the MAC facility about:
//! "may `subject` exercise these rights on `object`?". The vocabulary
//! matches the facility's socket-credential model: read, write, and
//! execute.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Represents the access rights requested from the MAC facility as a
    /// bit field for efficient checking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct AccessRights: u8 {
        const READ = 0b00000001;
        const WRITE = 0b00000010;
        const EXECUTE = 0b00000100;
    }
}

impl AccessRights {
    /// Full control over an object: read and write.
    pub fn full_control() -> Self {
        Self::READ | Self::WRITE
    }
}

impl fmt::Display for AccessRights {
    /// Renders the compact access string the MAC facility vocabulary
    /// uses, e.g. `rw` for read-write.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.contains(Self::READ) {
            write!(f, "r")?;
        }
        if self.contains(Self::WRITE) {
            write!(f, "w")?;
        }
        if self.contains(Self::EXECUTE) {
            write!(f, "x")?;
        }
        Ok(())
    }
}
