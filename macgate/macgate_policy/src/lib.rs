//! # MacGate Policy
//!
//! `macgate_policy` decides which of the bus's configured policy rules
//! apply to a peer connection, based on the MAC label of its transport
//! endpoint.
//!
//! Key concepts:
//!
//! 1. **Label Resolution**: Obtaining the MAC label attached to a
//!    connection's socket credential. A pure query, repeated on every
//!    policy evaluation because labels must never be assumed stable
//!    across, say, a bus-name owner handoff.
//!
//! 2. **Rule Index**: The object-label → rule-list mapping built by the
//!    bus from static configuration. Read-only here; traversal follows
//!    configuration order.
//!
//! 3. **Access Decision**: For each indexed rule, the subject label is
//!    checked against the rule's object label for the rights the rule
//!    kind demands. Rules that pass form the allowed rule set handed
//!    back to the bus for enforcement.
//!
//! The seams this crate consumes — transport endpoints, the MAC
//! facility, the service registry — are defined in [`macgate_core`] and
//! supplied by the surrounding bus.

pub mod context;
pub mod engine;
pub mod index;
pub mod model;
pub mod resolver;

// Re-export key types for convenience
pub use context::connection_context;
pub use engine::{DecisionEngine, EngineConfig};
pub use index::RuleIndex;
pub use model::{AllowedRuleSet, PolicyRule, RuleEffect, RuleKind};
pub use resolver::LabelResolver;
