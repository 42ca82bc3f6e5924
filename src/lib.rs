//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form, together with an encoding of session scheduling problems as such formulas.
//!
//! roster_sat determines satisfiability by an exhaustive backtracking search, preferring the literals of unit clauses when choosing what to assume.
//! There is no clause learning, no watched literals, and no restarts: the search is a direct implementation of the textbook procedure, kept small so the procedure is easy to follow.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](crate::config) and some formula, and determine the satisfiability of the formula by a [search](crate::procedures::search).
//! Internally, the formula is stored in a [clause database](crate::db::clause) and the variables of the formula are mapped to atoms by an [atom database](crate::db::atom).
//!
//! Useful starting points, then, may be:
//! - The [search procedure](crate::procedures::search) to inspect the dynamics of a solve.
//! - The [structures] to familiarise yourself with the elements of a solve and their representation (formulas, clauses, etc.)
//! - The [encoder] to see how a scheduling problem is written as a formula.
//!
//! # Examples
//!
//! + Solve a formula.
//!
//! ```rust
//! # use roster_sat::{solve, structures::formula::Formula};
//! let formula: Formula<&str> = vec![
//!     vec![("p", true), ("q", true)],
//!     vec![("p", false), ("q", true)],
//!     vec![("q", false), ("r", true)],
//! ]
//! .into_iter()
//! .collect();
//!
//! let assignment = solve(&formula).unwrap();
//!
//! assert_eq!(assignment.value_of(&"q"), Some(true));
//! assert_eq!(assignment.value_of(&"r"), Some(true));
//! assert!(assignment.satisfies(&formula));
//! ```
//!
//! + Schedule students to sessions.
//!
//! ```rust
//! # use std::collections::{BTreeMap, BTreeSet};
//! # use roster_sat::{encode, solve};
//! let mut preferences = BTreeMap::new();
//! for student in ["Alice", "Bob", "Carol"] {
//!     preferences.insert(student.to_string(), BTreeSet::from(["Quiz".to_string()]));
//! }
//! let capacities = BTreeMap::from([("Quiz".to_string(), 1)]);
//!
//! let formula = encode(&preferences, &capacities).unwrap();
//! assert!(solve(&formula).is_none());
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to the search can be filtered with `RUST_LOG=search …` or,
//! - Each assumption and the reductions it leads to can be found with `RUST_LOG=search=trace,reduction=trace …`

pub mod config;
pub mod context;
pub mod db;
pub mod encoder;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;

pub use encoder::encode;
pub use procedures::search::solve;
