//! Reduction of a formula on the assumption that some literal is true.
//!
//! For each clause of the formula, in order:
//! - If the clause is the unit clause of the negation of the literal, the assumption conflicts with the formula, and the reduction fails.
//! - If the clause contains the literal, the clause is satisfied and is dropped.
//! - Otherwise, any literal on the atom of the literal is false, and removed from the clause.
//!   If every literal of the clause is removed the reduction fails, as the empty clause cannot be satisfied.
//!
//! The reduced formula does not contain the atom of the literal.
//!
//! Clauses which do not contain the atom of the literal are shared between the formula and its reduction, as the same clause key.
//! Clauses from which some literal was removed are stored as fresh derived clauses, and the keys of these are returned with the reduction so the clauses may be released when the reduction is no longer of use.

use crate::{
    db::{clause::ClauseDB, ClauseKey},
    misc::log::targets::{self},
    structures::{clause::CClause, literal::CLiteral},
    types::err::{self},
};

/// A reduced formula.
pub struct Reduction {
    /// The keys of the clauses of the reduced formula, in order.
    pub formula: Vec<ClauseKey>,

    /// The keys of clauses derived during the reduction.
    pub derived: Vec<ClauseKey>,
}

impl ClauseDB {
    /// Reduces the formula on the assumption that the literal is true.
    ///
    /// On failure any clause derived during the reduction is released.
    pub fn reduce(
        &mut self,
        formula: &[ClauseKey],
        literal: CLiteral,
    ) -> Result<Reduction, err::ReductionError> {
        let mut reduction = Reduction {
            formula: Vec::with_capacity(formula.len()),
            derived: Vec::new(),
        };

        for key in formula {
            let clause = &self[*key];

            if clause.len() == 1 && clause[0] == literal.negate() {
                log::trace!(target: targets::REDUCTION, "{literal} conflicts with {key:?}");
                self.release_all(reduction.derived);
                return Err(err::ReductionError::Conflict);
            }

            if clause.contains(&literal) {
                continue;
            }

            if clause.iter().any(|other| other.atom() == literal.atom()) {
                let shortened = clause
                    .iter()
                    .filter(|other| other.atom() != literal.atom())
                    .copied()
                    .collect::<CClause>();

                if shortened.is_empty() {
                    log::trace!(target: targets::REDUCTION, "{literal} empties {key:?}");
                    self.release_all(reduction.derived);
                    return Err(err::ReductionError::EmptyClause);
                }

                let derived_key = self.store_derived(shortened);
                reduction.derived.push(derived_key);
                reduction.formula.push(derived_key);
            } else {
                reduction.formula.push(*key);
            }
        }

        log::trace!(
            target: targets::REDUCTION,
            "{literal} reduced {} clauses to {}",
            formula.len(),
            reduction.formula.len()
        );
        Ok(reduction)
    }
}
