/*!
An encoding of session scheduling problems as formulas.

A scheduling problem pairs each student with the sessions acceptable to the student, and each session with a capacity.
A solution assigns each student to exactly one acceptable session, such that no session holds more students than its capacity.

The encoding has an atom for each student/session pair, named `<student>_<session>`, which is true just in case the student is assigned to the session.
Clauses are added in three families, in order:

1. Coverage. \
   For each student, a clause of the (positive) atoms of the student on each acceptable session.
   So, each student is assigned to some acceptable session.
2. At most one session. \
   For each student and each pair of distinct sessions (whether acceptable to the student or not), a clause of the negated atoms of the student on the two sessions.
3. Capacity. \
   For each session with capacity *c* less than the number of students, and for each collection of *c + 1* students, a clause of the negated atoms of those students on the session.
   A session with capacity at least the number of students cannot be overfilled, and has no clauses.

Students and sessions are encoded in the (lexicographic) order of their names.

```rust
# use roster_sat::encoder::Problem;
# use roster_sat::config::EncoderConfig;
# use roster_sat::procedures::search::solve;
let mut problem = Problem::new();
problem.add_session("S1", 1);
problem.add_session("S2", 1);
problem.add_student("Alice", ["S1", "S2"]);
problem.add_student("Bob", ["S1"]);

let config = EncoderConfig::default();
let formula = problem.encode(&config).unwrap();
let assignment = solve(&formula).unwrap();
let schedule = problem.schedule(&assignment, &config);

assert_eq!(schedule.get("Alice").map(String::as_str), Some("S2"));
assert_eq!(schedule.get("Bob").map(String::as_str), Some("S1"));
assert!(problem.admits(&schedule));
```

# Names

As names of atoms are built by joining a student and a session, names are ambiguous whenever a student or session contains the separator.
For example, the student "a_b" on session "c" and the student "a" on session "b_c" share the atom "a_b_c".
It is up to the caller to avoid such names, though with [strict_names](crate::config::EncoderConfig::strict_names) names containing the separator are rejected.
*/

pub mod combinations;

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    config::EncoderConfig,
    encoder::combinations::Combinations,
    misc::log::targets::{self},
    structures::{assignment::Assignment, formula::Formula, literal::Literal},
    types::err::{self},
};

/// The acceptable sessions of each student.
pub type Preferences = BTreeMap<String, BTreeSet<String>>;

/// The capacity of each session.
pub type Capacities = BTreeMap<String, usize>;

/// The session each student is assigned to.
pub type Schedule = BTreeMap<String, String>;

/// A session scheduling problem.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Problem {
    preferences: Preferences,
    capacities: Capacities,
}

impl Problem {
    /// The problem without students or sessions.
    pub fn new() -> Self {
        Self::default()
    }

    /// The problem with the given preferences and capacities.
    pub fn from_parts(preferences: Preferences, capacities: Capacities) -> Self {
        Self {
            preferences,
            capacities,
        }
    }

    /// Adds a student together with the sessions acceptable to the student.
    ///
    /// If the student was already present, the acceptable sessions are replaced.
    pub fn add_student<S: Into<String>>(
        &mut self,
        student: impl Into<String>,
        sessions: impl IntoIterator<Item = S>,
    ) {
        let sessions = sessions.into_iter().map(Into::into).collect();
        self.preferences.insert(student.into(), sessions);
    }

    /// Adds a session together with its capacity.
    ///
    /// If the session was already present, the capacity is replaced.
    pub fn add_session(&mut self, session: impl Into<String>, capacity: usize) {
        self.capacities.insert(session.into(), capacity);
    }

    /// The acceptable sessions of each student.
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// The capacity of each session.
    pub fn capacities(&self) -> &Capacities {
        &self.capacities
    }

    /// The formula whose satisfying assignments are the solutions to the problem.
    pub fn encode(&self, config: &EncoderConfig) -> Result<Formula<String>, err::EncodeError> {
        encode_with_config(&self.preferences, &self.capacities, config)
    }

    /// The schedule given by a satisfying assignment of the encoding of the problem.
    ///
    /// Each student is paired with the first session (in order of name) on which the atom of the student is true, and students without such a session are omitted.
    pub fn schedule(&self, assignment: &Assignment<String>, config: &EncoderConfig) -> Schedule {
        self.preferences
            .keys()
            .filter_map(|student| {
                self.capacities
                    .keys()
                    .find(|session| {
                        let atom = pair_variable(student, session, config.separator);
                        assignment.value_of(&atom) == Some(true)
                    })
                    .map(|session| (student.clone(), session.clone()))
            })
            .collect()
    }

    /// Whether the schedule solves the problem.
    ///
    /// That is, whether the schedule assigns exactly the students of the problem, each to some acceptable session, without exceeding the capacity of any session.
    pub fn admits(&self, schedule: &Schedule) -> bool {
        if schedule.len() != self.preferences.len() {
            return false;
        }

        let mut occupancy: BTreeMap<&str, usize> = BTreeMap::new();
        for (student, session) in schedule {
            match self.preferences.get(student) {
                Some(sessions) if sessions.contains(session) => {}
                _ => return false,
            }
            *occupancy.entry(session.as_str()).or_default() += 1;
        }

        occupancy.iter().all(|(session, count)| {
            self.capacities
                .get(*session)
                .is_some_and(|capacity| count <= capacity)
        })
    }
}

/// The name of the atom for the given student being assigned to the given session.
pub fn pair_variable(student: &str, session: &str, separator: char) -> String {
    format!("{student}{separator}{session}")
}

/// The formula whose satisfying assignments are the solutions to the problem, using the default configuration.
pub fn encode(
    preferences: &Preferences,
    capacities: &Capacities,
) -> Result<Formula<String>, err::EncodeError> {
    encode_with_config(preferences, capacities, &EncoderConfig::default())
}

/// The formula whose satisfying assignments are the solutions to the problem.
pub fn encode_with_config(
    preferences: &Preferences,
    capacities: &Capacities,
    config: &EncoderConfig,
) -> Result<Formula<String>, err::EncodeError> {
    check_problem(preferences, capacities, config)?;

    let separator = config.separator;
    let mut formula = Formula::new();

    for (student, sessions) in preferences {
        let clause = sessions
            .iter()
            .map(|session| Literal::new(pair_variable(student, session, separator), true))
            .collect();
        formula.add_clause(clause);
    }
    let coverage_count = formula.len();
    log::debug!(target: targets::ENCODER, "Coverage clauses: {coverage_count}");

    let sessions = capacities.keys().collect::<Vec<_>>();
    for student in preferences.keys() {
        for (index, session_a) in sessions.iter().enumerate() {
            for session_b in &sessions[index + 1..] {
                formula.add_clause(vec![
                    Literal::new(pair_variable(student, session_a, separator), false),
                    Literal::new(pair_variable(student, session_b, separator), false),
                ]);
            }
        }
    }
    let single_count = formula.len() - coverage_count;
    log::debug!(target: targets::ENCODER, "At most one session clauses: {single_count}");

    let students = preferences.keys().collect::<Vec<_>>();
    for (session, capacity) in capacities {
        if *capacity >= students.len() {
            log::trace!(target: targets::ENCODER, "{session} holds every student");
            continue;
        }

        for combination in Combinations::checked(capacity + 1, students.len())? {
            let clause = combination
                .into_iter()
                .map(|index| Literal::new(pair_variable(students[index], session, separator), false))
                .collect();
            formula.add_clause(clause);
        }
    }
    log::debug!(
        target: targets::ENCODER,
        "Capacity clauses: {}",
        formula.len() - coverage_count - single_count
    );

    Ok(formula)
}

/// Ensures the problem meets the preconditions of the encoding.
fn check_problem(
    preferences: &Preferences,
    capacities: &Capacities,
    config: &EncoderConfig,
) -> Result<(), err::EncodeError> {
    for (session, capacity) in capacities {
        if *capacity == 0 {
            return Err(err::EncodeError::ZeroCapacity(session.clone()));
        }
    }

    for (student, sessions) in preferences {
        if let Some(session) = sessions.iter().find(|s| !capacities.contains_key(*s)) {
            return Err(err::EncodeError::UnknownSession {
                student: student.clone(),
                session: session.clone(),
            });
        }
    }

    if config.strict_names {
        let names = preferences.keys().chain(capacities.keys());
        for name in names {
            if name.contains(config.separator) {
                return Err(err::EncodeError::AmbiguousName(name.clone()));
            }
        }
    }

    Ok(())
}
