//! Formulas, aka. a sequence of clauses, interpreted as the conjunction of those clauses.
//!
//! ```rust
//! # use roster_sat::structures::formula::Formula;
//! # use roster_sat::structures::literal::Literal;
//! let mut formula = Formula::new();
//! formula.add_clause(vec![Literal::new("p", true), Literal::new("q", true)]);
//! formula.add_clause(vec![Literal::new("p", false)]);
//!
//! let reduced = formula.assume(&"p", false).unwrap();
//! assert_eq!(reduced.clauses(), &[vec![Literal::new("q", true)]]);
//!
//! assert!(formula.assume(&"p", true).is_err());
//! ```
//!
//! The empty formula is satisfied by every assignment, while a formula containing the empty clause is satisfied by none.

use std::collections::HashSet;

use crate::{
    config::Config,
    context::Context,
    structures::{
        assignment::Assignment,
        atom::Variable,
        clause::{Clause, ExClause},
        literal::Literal,
    },
    types::err::{self},
};

/// A formula in conjunctive normal form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Formula<V: Variable> {
    clauses: Vec<ExClause<V>>,
}

impl<V: Variable> Default for Formula<V> {
    fn default() -> Self {
        Self {
            clauses: Vec::default(),
        }
    }
}

impl<V: Variable> Formula<V> {
    /// The empty formula.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a clause to the formula.
    pub fn add_clause(&mut self, clause: ExClause<V>) {
        self.clauses.push(clause);
    }

    /// The clauses of the formula, in order.
    pub fn clauses(&self) -> &[ExClause<V>] {
        &self.clauses
    }

    /// A count of clauses in the formula.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Whether the formula contains no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Whether some clause of the formula is empty.
    pub fn contains_empty_clause(&self) -> bool {
        self.clauses.iter().any(|clause| clause.is_empty())
    }

    /// The distinct variables of the formula, in order of first appearance.
    pub fn variables(&self) -> Vec<&V> {
        let mut seen = HashSet::new();
        self.clauses
            .iter()
            .flat_map(|clause| clause.variables())
            .filter(|variable| seen.insert(*variable))
            .collect()
    }

    /// Whether every clause of the formula is satisfied by the given assignment.
    pub fn is_satisfied_by(&self, assignment: &Assignment<V>) -> bool {
        self.clauses
            .iter()
            .all(|clause| clause.is_satisfied_by(assignment))
    }

    /// The formula which results from assuming the variable has the given value, or an error if the assumption leads to a contradiction.
    ///
    /// Clauses satisfied by the assumption are removed, and every literal on the variable is removed from the remaining clauses.
    /// See [reduction](crate::procedures::reduction) for details.
    pub fn assume(&self, variable: &V, value: bool) -> Result<Formula<V>, err::ReductionError> {
        Context::from_formula(self, Config::default()).assume(variable, value)
    }
}

impl<V: Variable> From<Vec<ExClause<V>>> for Formula<V> {
    fn from(clauses: Vec<ExClause<V>>) -> Self {
        Self { clauses }
    }
}

impl<V: Variable> FromIterator<ExClause<V>> for Formula<V> {
    fn from_iter<I: IntoIterator<Item = ExClause<V>>>(iter: I) -> Self {
        Self {
            clauses: iter.into_iter().collect(),
        }
    }
}

impl<V: Variable> FromIterator<Vec<(V, bool)>> for Formula<V> {
    fn from_iter<I: IntoIterator<Item = Vec<(V, bool)>>>(iter: I) -> Self {
        iter.into_iter()
            .map(|clause| clause.into_iter().map(Literal::from).collect::<ExClause<V>>())
            .collect()
    }
}

impl<V: Variable> std::fmt::Display for Formula<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for clause in &self.clauses {
            writeln!(f, "{}", clause.as_string())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod formula_tests {
    use super::*;

    fn pairs(clauses: Vec<Vec<(&'static str, bool)>>) -> Formula<&'static str> {
        clauses.into_iter().collect()
    }

    #[test]
    fn satisfied_clause_removed() {
        let formula = pairs(vec![vec![("a", true), ("b", true)], vec![("b", false), ("c", true)]]);
        let reduced = formula.assume(&"a", true).unwrap();
        assert_eq!(reduced, pairs(vec![vec![("b", false), ("c", true)]]));
    }

    #[test]
    fn falsified_literal_removed() {
        let formula = pairs(vec![vec![("a", true), ("b", true), ("c", false)]]);
        let reduced = formula.assume(&"b", false).unwrap();
        assert_eq!(reduced, pairs(vec![vec![("a", true), ("c", false)]]));
    }

    #[test]
    fn unit_conflict() {
        let formula = pairs(vec![vec![("a", true), ("b", true)], vec![("a", false)]]);
        assert_eq!(
            formula.assume(&"a", true),
            Err(err::ReductionError::Conflict)
        );
    }

    #[test]
    fn emptied_clause() {
        let formula = pairs(vec![vec![("a", false), ("a", false)]]);
        assert_eq!(
            formula.assume(&"a", true),
            Err(err::ReductionError::EmptyClause)
        );
    }

    #[test]
    fn unknown_variable() {
        let formula = pairs(vec![vec![("a", false), ("b", true)]]);
        assert_eq!(formula.assume(&"z", true), Ok(formula.clone()));
    }

    #[test]
    fn variables_in_order() {
        let formula = pairs(vec![
            vec![("c", false), ("a", true)],
            vec![("a", false), ("b", true), ("c", true)],
        ]);
        assert_eq!(formula.variables(), vec![&"c", &"a", &"b"]);
    }
}
