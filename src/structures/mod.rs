//! Key structures, such as literals, clauses, and formulas.
//!
//! Structures come in two representations:
//! - An *external* representation, parameterised by some [Variable](atom::Variable), used when providing a formula or reading an assignment.
//! - An *internal* representation built from [atoms](atom::Atom), used by the databases of a [context](crate::context).
//!
//! ## Formulas
//!
//! A [formula](formula::Formula) 𝐅 is a sequence of [clauses](clause), interpreted as the conjunction of those clauses (and so is the conjunction of disjunctions over literals).
//!
//! The order of clauses in a formula, and of literals in a clause, has no effect on which assignments satisfy the formula.
//! Still, order is used to break ties when making decisions, and so fixes which assignment is returned from a solve.
//!
//! ## Assignments
//!
//! An [assignment](assignment::Assignment) is a (partial) function from variables to truth values.

pub mod assignment;
pub mod atom;
pub mod clause;
pub mod formula;
pub mod literal;
