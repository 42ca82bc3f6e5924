//! Choosing the literal to assume.
//!
//! The literal of the first unit clause of a formula is preferred, as assuming its negation is certain to fail.
//! Without a unit clause, the first literal of a clause chosen by the [decision policy](crate::config::DecisionPolicy) is used.
//! By default this is the last clause of the formula.
//!
//! With the default policy the scan for a unit clause also stops at the first clause with the same literals as the last clause.
//! So, an earlier copy of the last clause is decided on ahead of a later unit clause.
//!
//! In either case the chosen literal is the *primary* assumption, and its negation is the *secondary* assumption.

use crate::{
    config::DecisionPolicy,
    context::Context,
    db::ClauseKey,
    misc::log::targets::{self},
    structures::{atom::Variable, literal::CLiteral},
};

impl<V: Variable> Context<V> {
    /// The primary assumption to make on the given formula, if there is some literal to assume.
    pub fn decide(&self, formula: &[ClauseKey]) -> Option<CLiteral> {
        if self.config.unit_priority {
            let last = match self.config.decision {
                DecisionPolicy::LastClause => formula.last().map(|key| &self.clause_db[*key]),
                DecisionPolicy::FirstClause => None,
            };

            for key in formula {
                let clause = &self.clause_db[*key];
                if let [unit] = clause {
                    log::trace!(target: targets::DECISION, "Unit {unit}");
                    return Some(*unit);
                }
                if last == Some(clause) {
                    log::trace!(target: targets::DECISION, "Last clause, or a copy, at {key:?}");
                    return clause.first().copied();
                }
            }
        }

        let key = match self.config.decision {
            DecisionPolicy::LastClause => formula.last(),
            DecisionPolicy::FirstClause => formula.first(),
        }?;
        let decision = self.clause_db[*key].first().copied();
        log::trace!(target: targets::DECISION, "Chose {decision:?} from {key:?}");
        decision
    }
}
