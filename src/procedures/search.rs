//! Determines the satisfiability of the formula in a context.
//!
//! # Overview
//!
//! The search is a depth-first exploration of assumptions, each assumption being made on the formula which results from the assumptions before it.
//!
//! For a formula 𝐅:
//! - If 𝐅 is empty, 𝐅 is satisfied by the empty assignment.
//! - Otherwise, some literal *l* is [decided](crate::procedures::decision) on and 𝐅 is [reduced](crate::procedures::reduction) on the assumption of *l*.
//!   + If the reduction fails, *l* cannot be true on any assignment which satisfies 𝐅.
//!   + If the reduction is empty, the assignment of *l* satisfies 𝐅.
//!   + Otherwise, the search continues on the reduced formula, and if some assignment satisfies the reduced formula that assignment together with *l* satisfies 𝐅.
//! - If no assignment with *l* true satisfies 𝐅, the same is tried with *-l*, and if neither succeeds 𝐅 is unsatisfiable.
//!
//! Rather than recursion, the search keeps an explicit stack of frames, one for each decision.
//! Each frame holds the formula the decision was made on and the branches of the decision which remain to be explored.
//! So, the depth of a search is limited only by memory, rather than by the call stack.
//!
//! ```none
//!                    +-----------------+
//!   +--------------->| next assumption |<--------------------+
//!   |                +-----------------+                     |
//!   |                  |             |                       |
//!   |   both branches   |             | some branch remains   |
//!   |   explored       ⌄             ⌄                       |
//!   |             +-----------+   +--------+   contradiction |
//!   +-------------| pop frame |   | reduce |-----------------+
//!                 +-----------+   +--------+                 |
//!                       |            |    |                  |
//!                       |      empty |    | otherwise        |
//!                       ⌄            ⌄    ⌄                  |
//!             unsatisfiable,   satisfiable  +------------+   |
//!             if no frame                   | push frame |---+
//!             remains                       +------------+
//! ```
//!
//! As each reduction removes the atom assumed from the formula, the stack never holds more frames than the formula has atoms.
//!
//! # Assignments
//!
//! The assumption made by each frame on the stack is recorded on a trail, and when the search ends with an empty formula the trail is the satisfying assignment.
//! As atoms assumed by earlier frames are absent from the formulas of later frames, no atom appears twice on the trail.
//!
//! # Example
//!
//! ```rust
//! # use roster_sat::procedures::search::solve;
//! # use roster_sat::structures::formula::Formula;
//! let formula: Formula<&str> = vec![
//!     vec![("a", true), ("b", false), ("c", true)],
//!     vec![("a", false)],
//! ]
//! .into_iter()
//! .collect();
//!
//! let assignment = solve(&formula).unwrap();
//! assert_eq!(assignment.value_of(&"a"), Some(false));
//! assert!(formula.is_satisfied_by(&assignment));
//!
//! let contradiction: Formula<&str> = vec![vec![("a", true)], vec![("a", false)]].into_iter().collect();
//! assert!(solve(&contradiction).is_none());
//! ```

use crate::{
    config::Config,
    context::{Context, Counters},
    db::ClauseKey,
    misc::log::targets::{self},
    reports::Report,
    structures::{assignment::Assignment, atom::Variable, formula::Formula, literal::CLiteral},
};

/// The branches of a decision left to explore.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Branch {
    Primary,
    Secondary,
    Exhausted,
}

/// A decision, together with the formula the decision was made on.
struct Frame {
    /// The formula the decision was made on.
    formula: Vec<ClauseKey>,

    /// Clauses derived in reaching the formula, to be released with the frame.
    derived: Vec<ClauseKey>,

    /// The primary assumption of the decision.
    decision: CLiteral,

    /// The next branch to explore.
    branch: Branch,
}

impl Frame {
    fn new(formula: Vec<ClauseKey>, derived: Vec<ClauseKey>, decision: CLiteral) -> Self {
        Self {
            formula,
            derived,
            decision,
            branch: Branch::Primary,
        }
    }

    /// The next assumption to explore, if any.
    fn next_assumption(&mut self) -> Option<CLiteral> {
        match self.branch {
            Branch::Primary => {
                self.branch = Branch::Secondary;
                Some(self.decision)
            }
            Branch::Secondary => {
                self.branch = Branch::Exhausted;
                Some(self.decision.negate())
            }
            Branch::Exhausted => None,
        }
    }
}

impl<V: Variable> Context<V> {
    /// Determines the satisfiability of the formula of the context.
    ///
    /// If the formula is satisfiable, the satisfying assignment found is available from [assignment](Context::assignment).
    pub fn solve(&mut self) -> Report {
        let total_time = std::time::Instant::now();
        self.trail.clear();
        self.counters = Counters::default();

        self.report = self.search();

        log::debug!(
            target: targets::SEARCH,
            "{} decisions, {} contradictions, depth {}",
            self.counters.decisions,
            self.counters.contradictions,
            self.counters.max_depth
        );
        log::info!(target: targets::SEARCH, "{} in {:?}", self.report, total_time.elapsed());
        self.report
    }

    fn search(&mut self) -> Report {
        if self.empty_clause {
            log::info!(target: targets::SEARCH, "The formula contains the empty clause");
            return Report::Unsatisfiable;
        }

        if self.formula.is_empty() {
            return Report::Satisfiable;
        }

        let Some(decision) = self.decide(&self.formula) else {
            return Report::Unsatisfiable;
        };
        let mut stack = vec![Frame::new(self.formula.clone(), Vec::new(), decision)];

        let report = 'search_loop: loop {
            let depth = stack.len();
            let Some(frame) = stack.last_mut() else {
                break 'search_loop Report::Unsatisfiable;
            };

            let Some(assumption) = frame.next_assumption() else {
                if let Some(frame) = stack.pop() {
                    self.clause_db.release_all(frame.derived);
                }
                continue 'search_loop;
            };

            self.trail.truncate(depth - 1);
            self.trail.push(assumption);
            self.counters.decisions += 1;
            self.counters.max_depth = self.counters.max_depth.max(depth);
            log::trace!(target: targets::SEARCH, "Assumed {assumption} at depth {depth}");

            match self.clause_db.reduce(&frame.formula, assumption) {
                Err(e) => {
                    log::trace!(target: targets::SEARCH, "Contradiction: {e}");
                    self.counters.contradictions += 1;
                }

                Ok(reduction) if reduction.formula.is_empty() => {
                    break 'search_loop Report::Satisfiable;
                }

                Ok(reduction) => match self.decide(&reduction.formula) {
                    Some(decision) => {
                        stack.push(Frame::new(reduction.formula, reduction.derived, decision));
                    }

                    None => {
                        self.counters.contradictions += 1;
                        self.clause_db.release_all(reduction.derived);
                    }
                },
            }
        };

        for frame in stack {
            self.clause_db.release_all(frame.derived);
        }
        report
    }
}

/// A satisfying assignment of the formula, if the formula is satisfiable, found with the default configuration.
pub fn solve<V: Variable>(formula: &Formula<V>) -> Option<Assignment<V>> {
    solve_with_config(formula, Config::default())
}

/// A satisfying assignment of the formula, if the formula is satisfiable.
pub fn solve_with_config<V: Variable>(formula: &Formula<V>, config: Config) -> Option<Assignment<V>> {
    let mut the_context = Context::from_formula(formula, config);
    match the_context.solve() {
        Report::Satisfiable => the_context.assignment(),
        _ => None,
    }
}
