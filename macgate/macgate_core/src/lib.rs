//! # MacGate Core
//!
//! `macgate_core` provides the fundamental building blocks for the MacGate
//! mandatory-access-control layer of the message bus. This includes error
//! types, the security label and access rights types, and the trait seams
//! through which the surrounding bus supplies its transport, MAC facility,
//! and service registry.
//!
//! ## Core Principles
//!
//! 1. **Opaque Labels**: MAC labels are opaque tokens minted by the
//!    operating system's MAC facility. They are compared byte-for-byte and
//!    never normalized or interpreted by this layer.
//!
//! 2. **Explicit Seams**: Everything the policy layer consumes from the
//!    bus — transport endpoints, the MAC facility, the service registry —
//!    arrives through a trait parameter. The policy layer never reaches
//!    into ambient bus state, which keeps every decision independently
//!    testable.
//!
//! 3. **Typed Failures**: Every failure is a value of a subsystem error
//!    type. Nothing in this layer is fatal to the process; "access denied"
//!    is an expected boolean outcome, not an error.
//!
//! ## Crate Structure
//!
//! - **error**: Error types for the MacGate subsystems
//! - **label**: The opaque security label type
//! - **rights**: Access rights bit sets
//! - **traits**: Seams implemented by the surrounding bus

pub mod error;
pub mod label;
pub mod rights;
pub mod traits;

// Re-export key types and traits for convenience
pub use error::{ContextError, Error, LabelError, PolicyError, Result};
pub use label::SecurityLabel;
pub use rights::AccessRights;
pub use traits::{Connection, EndpointHandle, MacFacility, ServiceDirectory};
