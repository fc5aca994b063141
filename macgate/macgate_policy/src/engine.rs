//! The access decision engine.
//!
//! Given a resolved subject label and the rule index, the engine asks
//! the MAC facility, for every indexed rule, whether the subject holds
//! the rights the rule kind demands on the rule's object label. Rules
//! that pass form the allowed rule set; rules that fail are simply not
//! in it. Denial is a per-rule boolean outcome, never an error — the
//! only failure intrinsic to the engine is resource exhaustion while
//! building the result set.

use macgate_core::error::PolicyError;
use macgate_core::traits::MacFacility;
use macgate_core::SecurityLabel;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, trace};

use crate::index::RuleIndex;
use crate::model::AllowedRuleSet;

/// Configuration for the decision engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Upper bound on the number of rules in one allowed rule set.
    /// `None` leaves the set bounded only by available memory.
    pub max_rules: Option<usize>,
}

/// The access decision engine.
///
/// The engine is stateless between calls and may be shared across
/// concurrently evaluated connections; the rule index it traverses is
/// read-only for the duration of a call.
pub struct DecisionEngine {
    /// The MAC facility answering access checks.
    facility: Arc<dyn MacFacility>,

    /// Engine configuration.
    config: EngineConfig,
}

impl DecisionEngine {
    /// Create an engine with the default configuration.
    pub fn new(facility: Arc<dyn MacFacility>) -> Self {
        Self::with_config(facility, EngineConfig::default())
    }

    /// Create an engine with the given configuration.
    pub fn with_config(facility: Arc<dyn MacFacility>, config: EngineConfig) -> Self {
        Self { facility, config }
    }

    /// Gets a reference to the MAC facility.
    pub fn facility(&self) -> &Arc<dyn MacFacility> {
        &self.facility
    }

    /// Generate the set of rules that apply to `subject`.
    ///
    /// The index is traversed in insertion order — every bucket, every
    /// rule — and each access-controlled rule is checked against the
    /// facility for the rights its kind demands. The subject label must
    /// come from [`LabelResolver::resolve`](crate::resolver::LabelResolver::resolve);
    /// passing `None` because resolution failed upstream is a caller
    /// contract violation and yields
    /// [`PolicyError::MissingSubjectLabel`], never a silently empty set.
    ///
    /// # Arguments
    ///
    /// * `subject` - The resolved label of the connection under
    ///   evaluation.
    /// * `index` - The object-label → rule-list index, read-only for
    ///   the duration of the call.
    ///
    /// # Returns
    ///
    /// * `Ok(AllowedRuleSet)` - One reference per rule that passed, in
    ///   traversal order; empty means "no rule applies" and is a
    ///   success.
    /// * `Err(PolicyError::MissingSubjectLabel)` - Invoked without a
    ///   subject label.
    /// * `Err(PolicyError::ResourceExhausted)` - Result-set
    ///   construction ran out of resources; every reference acquired
    ///   during the call has already been released and later calls are
    ///   unaffected.
    pub fn generate_allowed_rules(
        &self,
        subject: Option<&SecurityLabel>,
        index: &RuleIndex,
    ) -> Result<AllowedRuleSet, PolicyError> {
        let subject = subject.ok_or(PolicyError::MissingSubjectLabel)?;

        let mut allowed = AllowedRuleSet::new();
        for (object, rules) in index.iter() {
            for rule in rules {
                let rights = match rule.kind.requested_rights() {
                    Some(rights) => rights,
                    // Not an access-controlled kind; skip, never err
                    None => continue,
                };

                if !self.facility.access_allowed(subject, object, rights) {
                    continue;
                }

                if let Some(max) = self.config.max_rules {
                    if allowed.len() == max {
                        debug!(max, "allowed rule set reached its configured bound");
                        // Dropping the in-progress set releases every
                        // reference acquired during this call
                        return Err(PolicyError::ResourceExhausted(format!(
                            "allowed rule set bound of {max} rules reached"
                        )));
                    }
                }

                allowed.try_append(Arc::clone(rule))?;
            }
        }

        trace!(%subject, rules = allowed.len(), "generated allowed rule set");
        Ok(allowed)
    }
}
