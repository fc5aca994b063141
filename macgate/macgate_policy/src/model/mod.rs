//! Policy rule model.
//!
//! This module defines the rule types shared with the rest of the
//! policy subsystem and the allowed-rule-set result type.

pub mod rule;
pub mod ruleset;

pub use rule::{PolicyRule, RuleEffect, RuleKind};
pub use ruleset::AllowedRuleSet;
