//! The object-label → rule-list index.
//!
//! The index is built by the policy subsystem when bus configuration is
//! loaded and handed to this crate read-only. Traversal order is
//! contractual: buckets appear in first-insertion order and rules within
//! a bucket in insertion order, so a decision run sees rules exactly as
//! configuration listed them.

use macgate_core::SecurityLabel;
use std::collections::HashMap;
use std::sync::Arc;

use crate::model::PolicyRule;

/// Mapping from object security label to the ordered rules configured
/// under it.
#[derive(Debug, Default)]
pub struct RuleIndex {
    /// Insertion-ordered (label, rules) buckets.
    entries: Vec<(SecurityLabel, Vec<Arc<PolicyRule>>)>,

    /// Label → position in `entries`.
    positions: HashMap<SecurityLabel, usize>,
}

impl RuleIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Append a rule under an object label.
    ///
    /// The first rule inserted for a label creates its bucket at the
    /// end of the traversal order; later rules for the same label append
    /// to that bucket.
    pub fn insert(&mut self, object: SecurityLabel, rule: Arc<PolicyRule>) {
        match self.positions.get(&object) {
            Some(&position) => self.entries[position].1.push(rule),
            None => {
                self.positions.insert(object.clone(), self.entries.len());
                self.entries.push((object, vec![rule]));
            }
        }
    }

    /// The rules configured under `object`, in insertion order.
    pub fn rules_for(&self, object: &SecurityLabel) -> Option<&[Arc<PolicyRule>]> {
        self.positions
            .get(object)
            .map(|&position| self.entries[position].1.as_slice())
    }

    /// Iterate over (object label, rules) buckets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&SecurityLabel, &[Arc<PolicyRule>])> {
        self.entries
            .iter()
            .map(|(label, rules)| (label, rules.as_slice()))
    }

    /// Number of object labels in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no labels.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of rules across all buckets.
    pub fn rule_count(&self) -> usize {
        self.entries.iter().map(|(_, rules)| rules.len()).sum()
    }
}

impl Extend<(SecurityLabel, Arc<PolicyRule>)> for RuleIndex {
    fn extend<I: IntoIterator<Item = (SecurityLabel, Arc<PolicyRule>)>>(&mut self, iter: I) {
        for (object, rule) in iter {
            self.insert(object, rule);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RuleEffect, RuleKind};

    fn rule(id: &str) -> Arc<PolicyRule> {
        Arc::new(PolicyRule::new(id, RuleKind::Send, RuleEffect::Allow))
    }

    #[test]
    fn test_bucket_order_is_first_insertion_order() {
        let mut index = RuleIndex::new();
        index.insert(SecurityLabel::new("L2"), rule("a"));
        index.insert(SecurityLabel::new("L1"), rule("b"));
        index.insert(SecurityLabel::new("L2"), rule("c"));

        let labels: Vec<&str> = index.iter().map(|(label, _)| label.as_str()).collect();
        assert_eq!(labels, vec!["L2", "L1"]);

        let l2_rules: Vec<&str> = index
            .rules_for(&SecurityLabel::new("L2"))
            .unwrap()
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(l2_rules, vec!["a", "c"]);
    }

    #[test]
    fn test_rules_for_missing_label() {
        let index = RuleIndex::new();
        assert!(index.rules_for(&SecurityLabel::new("L1")).is_none());
        assert!(index.is_empty());
    }

    #[test]
    fn test_counts() {
        let mut index = RuleIndex::new();
        index.extend([
            (SecurityLabel::new("L1"), rule("a")),
            (SecurityLabel::new("L1"), rule("b")),
            (SecurityLabel::new("L2"), rule("c")),
        ]);

        assert_eq!(index.len(), 2);
        assert_eq!(index.rule_count(), 3);
    }

    #[test]
    fn test_same_rule_under_two_labels() {
        // Not expected from well-formed configuration, but not excluded:
        // the index stores a reference per insertion.
        let shared = rule("shared");
        let mut index = RuleIndex::new();
        index.insert(SecurityLabel::new("L1"), Arc::clone(&shared));
        index.insert(SecurityLabel::new("L2"), Arc::clone(&shared));

        assert_eq!(Arc::strong_count(&shared), 3);
        assert_eq!(index.rule_count(), 2);
    }
}
