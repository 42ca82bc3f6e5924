/*!
The context of a solve.

A context holds a formula together with a [configuration](crate::config), and the databases used to search for a satisfying assignment of the formula.

- The variables of the formula are mapped to internal atoms by the [atom database](crate::db::atom).
- The clauses of the formula are stored in the [clause database](crate::db::clause), and the formula itself is kept as a sequence of clause keys.

```rust
# use roster_sat::config::Config;
# use roster_sat::context::Context;
# use roster_sat::reports::Report;
# use roster_sat::structures::literal::Literal;
let mut the_context = Context::from_config(Config::default());

the_context.add_clause(&[Literal::new("p", false), Literal::new("q", true)]);
the_context.add_clause(&[Literal::new("p", true), Literal::new("q", false)]);

assert_eq!(the_context.solve(), Report::Satisfiable);

let assignment = the_context.assignment().unwrap();
assert_eq!(assignment.value_of(&"p"), assignment.value_of(&"q"));

the_context.add_clause(&[Literal::new("p", true)]);
the_context.add_clause(&[Literal::new("q", false)]);

assert_eq!(the_context.solve(), Report::Unsatisfiable);
assert!(the_context.assignment().is_none());
```

A context may be solved any number of times, and the same assignment is found on each solve of the same formula.
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, ClauseKey},
    reports::Report,
    structures::{
        assignment::Assignment,
        atom::Variable,
        clause::ExClause,
        formula::Formula,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// A context, parameterised to the variables of its formula.
pub struct Context<V: Variable> {
    /// The configuration of the context.
    pub config: Config,

    /// The atom database.
    pub atom_db: AtomDB<V>,

    /// The clause database.
    pub clause_db: ClauseDB,

    /// Keys of the clauses of the formula, in the order the clauses were added.
    pub(crate) formula: Vec<ClauseKey>,

    /// Whether the empty clause was added to the context.
    pub(crate) empty_clause: bool,

    /// The assumptions of the most recent satisfying branch of a search, one per decision.
    pub(crate) trail: Vec<CLiteral>,

    /// The result of the most recent solve.
    pub(crate) report: Report,

    /// Counts from the most recent solve.
    pub(crate) counters: Counters,
}

impl<V: Variable> Context<V> {
    /// A context with the given configuration and the empty formula.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            atom_db: AtomDB::new(),
            clause_db: ClauseDB::new(),
            formula: Vec::new(),
            empty_clause: false,
            trail: Vec::new(),
            report: Report::Unknown,
            counters: Counters::default(),
        }
    }

    /// A context with the given configuration and formula.
    pub fn from_formula(formula: &Formula<V>, config: Config) -> Self {
        let mut the_context = Self::from_config(config);
        for clause in formula.clauses() {
            the_context.add_clause(clause);
        }
        the_context
    }

    /// Appends a clause to the formula of the context.
    ///
    /// The clause is stored as given: duplicate literals and tautologies are kept.
    /// The empty clause may be added, though any formula containing the empty clause is unsatisfiable.
    pub fn add_clause(&mut self, clause: &[Literal<V>]) {
        if clause.is_empty() {
            self.empty_clause = true;
        }
        let clause = clause
            .iter()
            .map(|literal| self.atom_db.internal_literal(literal))
            .collect();
        let key = self.clause_db.store_original(clause);
        self.formula.push(key);
        self.report = Report::Unknown;
    }

    /// The formula of the context.
    pub fn formula(&self) -> Formula<V> {
        self.external_formula(&self.formula)
    }

    /// The formula of the context, on the assumption that the variable has the given value.
    ///
    /// The formula of the context is unchanged.
    pub fn assume(&mut self, variable: &V, value: bool) -> Result<Formula<V>, err::ReductionError> {
        let Some(atom) = self.atom_db.atom_of(variable) else {
            return Ok(self.formula());
        };

        let reduction = self
            .clause_db
            .reduce(&self.formula, CLiteral::new(atom, value))?;
        let reduced = self.external_formula(&reduction.formula);
        self.clause_db.release_all(reduction.derived);
        Ok(reduced)
    }

    /// The result of the most recent solve, or [Report::Unknown] if the formula has been revised since.
    pub fn report(&self) -> Report {
        self.report
    }

    /// The satisfying assignment found by the most recent solve, if the formula is satisfiable.
    ///
    /// The assignment binds each variable assumed on the way to the satisfying assignment, and no other variable.
    pub fn assignment(&self) -> Option<Assignment<V>> {
        match self.report {
            Report::Satisfiable => Some(
                self.trail
                    .iter()
                    .map(|literal| (self.atom_db[literal.atom()].clone(), literal.polarity()))
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Counts from the most recent solve.
    pub fn counters(&self) -> Counters {
        self.counters
    }

    fn external_formula(&self, keys: &[ClauseKey]) -> Formula<V> {
        keys.iter()
            .map(|key| {
                self.clause_db[*key]
                    .iter()
                    .map(|literal| self.atom_db.external_literal(*literal))
                    .collect::<ExClause<V>>()
            })
            .collect()
    }
}
