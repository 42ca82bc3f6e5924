//! Procedures used to determine the satisfiability of a formula.
//!
//! - [search] manages the search, as a depth-first exploration of assumptions.
//! - [decision] chooses the atom to assume a value of, and the value to assume first.
//! - [reduction] applies an assumption to a formula.

pub mod decision;
pub mod reduction;
pub mod search;
