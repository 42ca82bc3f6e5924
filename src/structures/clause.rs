//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical (external) representation of a clause is as a vector of literals, and the canonical internal representation is as a vector of [CLiteral]s.
//!
//! ```rust
//! # use roster_sat::structures::assignment::Assignment;
//! # use roster_sat::structures::clause::Clause;
//! # use roster_sat::structures::literal::Literal;
//! let clause = vec![Literal::new("p", true), Literal::new("q", false)];
//!
//! assert_eq!(clause.size(), 2);
//!
//! let assignment = Assignment::from_iter([("p", false), ("q", false)]);
//! assert!(clause.is_satisfied_by(&assignment));
//!
//! let assignment = Assignment::from_iter([("p", false)]);
//! assert!(!clause.is_satisfied_by(&assignment));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).

use crate::structures::{
    assignment::Assignment,
    atom::Variable,
    literal::{CLiteral, Literal},
};

/// The clause trait.
pub trait Clause<V: Variable> {
    /// Some string representation of the clause, with literals separated by a space.
    fn as_string(&self) -> String;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// Whether the clause contains exactly one literal.
    fn is_unit(&self) -> bool {
        self.size() == 1
    }

    /// An iterator over all literals in the clause, in order.
    fn literals<'a>(&'a self) -> impl Iterator<Item = &'a Literal<V>>
    where
        V: 'a;

    /// An iterator over all variables in the clause, in order and with repetition.
    fn variables<'a>(&'a self) -> impl Iterator<Item = &'a V>
    where
        V: 'a;

    /// Whether some literal of the clause has the value of its polarity on the given assignment.
    ///
    /// Unbound variables do not satisfy a clause, and so the empty clause is satisfied by no assignment.
    fn is_satisfied_by(&self, assignment: &Assignment<V>) -> bool;
}

impl<V: Variable> Clause<V> for [Literal<V>] {
    fn as_string(&self) -> String {
        self.iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn literals<'a>(&'a self) -> impl Iterator<Item = &'a Literal<V>>
    where
        V: 'a,
    {
        self.iter()
    }

    fn variables<'a>(&'a self) -> impl Iterator<Item = &'a V>
    where
        V: 'a,
    {
        self.iter().map(|literal| literal.variable())
    }

    fn is_satisfied_by(&self, assignment: &Assignment<V>) -> bool {
        self.iter()
            .any(|literal| assignment.value_of(literal.variable()) == Some(literal.polarity()))
    }
}

/// The canonical (external) representation of a clause.
pub type ExClause<V> = Vec<Literal<V>>;

/// The canonical (internal) representation of a clause.
pub type CClause = Vec<CLiteral>;

#[cfg(test)]
mod clause_tests {
    use super::*;

    #[test]
    fn borrowed_variables() {
        let names = vec!["p".to_string(), "q".to_string()];
        let clause: ExClause<&str> = names
            .iter()
            .map(|name| Literal::new(name.as_str(), true))
            .collect();

        assert_eq!(clause.variables().collect::<Vec<_>>(), vec![&"p", &"q"]);
        assert_eq!(clause.literals().count(), 2);
        assert!(!clause.is_unit());
        assert_eq!(clause.size(), 2);
        assert_eq!(clause.as_string(), "\"p\" \"q\"");
    }
}
