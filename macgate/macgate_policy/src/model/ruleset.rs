//! The allowed-rule-set result type.

use macgate_core::error::PolicyError;
use std::slice;
use std::sync::Arc;

use super::PolicyRule;

/// The ordered set of rule references that passed the access check for
/// one subject.
///
/// A set is constructed atomically by the decision engine: either the
/// whole index traversal completes and the populated set is returned, or
/// construction fails and every reference acquired during the attempt is
/// dropped before the failure is reported. An empty set is a valid,
/// successful outcome meaning "no rule applies."
///
/// Order follows index traversal order. A rule reachable under two
/// object-label buckets appears once per traversed pair; this type does
/// not deduplicate.
#[derive(Debug, Default)]
pub struct AllowedRuleSet {
    rules: Vec<Arc<PolicyRule>>,
}

impl AllowedRuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule reference, failing on allocation exhaustion rather
    /// than aborting.
    pub(crate) fn try_append(&mut self, rule: Arc<PolicyRule>) -> Result<(), PolicyError> {
        self.rules
            .try_reserve(1)
            .map_err(|e| PolicyError::ResourceExhausted(e.to_string()))?;
        self.rules.push(rule);
        Ok(())
    }

    /// Number of rules in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over the rules in traversal order.
    pub fn iter(&self) -> slice::Iter<'_, Arc<PolicyRule>> {
        self.rules.iter()
    }

    /// View the rules as a slice.
    pub fn rules(&self) -> &[Arc<PolicyRule>] {
        &self.rules
    }
}

impl<'a> IntoIterator for &'a AllowedRuleSet {
    type Item = &'a Arc<PolicyRule>;
    type IntoIter = slice::Iter<'a, Arc<PolicyRule>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl IntoIterator for AllowedRuleSet {
    type Item = Arc<PolicyRule>;
    type IntoIter = std::vec::IntoIter<Arc<PolicyRule>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}
