//! Databases for holding information relevant to a solve.
//!
//!   - [The clause database](crate::db::clause)
//!     + A collection of clauses, each indexed by a [clause key](ClauseKey). \
//!       From an external perspective there are two kinds of clause:
//!       * Original clauses \
//!         Original clauses are added to the context from some formula, and are kept for the life of the context.
//!       * Derived clauses \
//!         Clauses obtained by removing falsified literals from some other clause during a search.
//!         Derived clauses are released as soon as the part of the search which derived them is abandoned.
//!
//!   - [The atom database](crate::db::atom)
//!     + The map between external variables and internal atoms.

pub mod atom;
pub mod clause;

/// A key to access a clause stored in the [clause database](crate::db::clause).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClauseKey {
    /// A clause of the formula given to the context.
    Original(slotmap::DefaultKey),

    /// A clause derived during a search.
    Derived(slotmap::DefaultKey),
}
