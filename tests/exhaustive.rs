use rand::{rngs::StdRng, Rng, SeedableRng};

use roster_sat::{
    config::{Config, DecisionPolicy},
    procedures::search::solve_with_config,
    solve,
    structures::{assignment::Assignment, formula::Formula, literal::Literal},
};

/// A formula over the variables `0..variables`, with clauses of one to `max_width` literals.
fn random_formula(rng: &mut StdRng, variables: u32, clauses: usize, max_width: usize) -> Formula<u32> {
    (0..clauses)
        .map(|_| {
            let width = rng.random_range(1..=max_width);
            (0..width)
                .map(|_| Literal::new(rng.random_range(0..variables), rng.random_bool(0.5)))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Whether some total assignment satisfies the formula, checking each in turn.
fn brute_force(formula: &Formula<u32>, variables: u32) -> bool {
    (0..(1_u32 << variables)).any(|bits| {
        let assignment: Assignment<u32> = (0..variables)
            .map(|variable| (variable, (bits >> variable) & 1 == 1))
            .collect();
        formula.is_satisfied_by(&assignment)
    })
}

mod brute {
    use super::*;

    fn cross_check(seed: u64, variables: u32, max_width: usize, config: Config) {
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..200 {
            let clauses = rng.random_range(1..=(variables as usize * 5));
            let formula = random_formula(&mut rng, variables, clauses, max_width);

            match solve_with_config(&formula, config.clone()) {
                Some(assignment) => {
                    assert!(assignment.satisfies(&formula), "unsound on {formula}");
                }
                None => {
                    assert!(!brute_force(&formula, variables), "incomplete on {formula}");
                }
            }
        }
    }

    #[test]
    fn small_three_sat() {
        cross_check(7, 4, 3, Config::default());
    }

    #[test]
    fn ten_variables() {
        cross_check(23, 10, 3, Config::default());
    }

    #[test]
    fn wide_clauses() {
        cross_check(91, 8, 5, Config::default());
    }

    #[test]
    fn first_clause_policy() {
        let config = Config {
            decision: DecisionPolicy::FirstClause,
            ..Default::default()
        };
        cross_check(41, 8, 3, config);
    }

    #[test]
    fn without_unit_priority() {
        let config = Config {
            unit_priority: false,
            ..Default::default()
        };
        cross_check(5, 8, 3, config);
    }
}

mod determinism {
    use super::*;

    #[test]
    fn repeated_solves_agree() {
        let mut rng = StdRng::seed_from_u64(1234);

        for _ in 0..50 {
            let formula = random_formula(&mut rng, 9, 30, 3);
            assert_eq!(solve(&formula), solve(&formula));
        }
    }
}

mod deep {
    use super::*;

    /// x0, and x(i) implies x(i + 1), for a chain of the given length.
    fn implication_chain(length: u32) -> Formula<u32> {
        let mut formula = Formula::new();
        formula.add_clause(vec![Literal::new(0, true)]);
        for i in 0..length {
            formula.add_clause(vec![Literal::new(i, false), Literal::new(i + 1, true)]);
        }
        formula
    }

    #[test]
    fn long_chain() {
        let length = 1_000;
        let formula = implication_chain(length);
        let assignment = solve(&formula).unwrap();

        assert_eq!(assignment.len(), length as usize + 1);
        assert!((0..=length).all(|i| assignment.value_of(&i) == Some(true)));
    }

    #[test]
    fn long_chain_to_contradiction() {
        let length = 1_000;
        let mut formula = implication_chain(length);
        formula.add_clause(vec![Literal::new(length, false)]);

        assert!(solve(&formula).is_none());
    }

    /// A cycle of implications, so every variable takes the value of the first decision.
    #[test]
    fn wide_and_deep() {
        let variables = 600;
        let formula: Formula<u32> = (0..variables)
            .map(|i| vec![Literal::new(i, true), Literal::new((i + 1) % variables, false)])
            .collect();

        let assignment = solve(&formula).unwrap();
        assert!(assignment.satisfies(&formula));
        assert_eq!(assignment.true_variables().count(), variables as usize);
    }
}
