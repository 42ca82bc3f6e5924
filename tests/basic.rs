use roster_sat::{
    config::{Config, DecisionPolicy},
    context::Context,
    reports::Report,
    solve,
    structures::{formula::Formula, literal::Literal},
};

fn formula(clauses: Vec<Vec<(&'static str, bool)>>) -> Formula<&'static str> {
    clauses.into_iter().collect()
}

mod basic {
    use super::*;

    #[test]
    fn empty_formula() {
        let assignment = solve(&Formula::<&str>::new()).unwrap();
        assert!(assignment.is_empty());
    }

    #[test]
    fn one_literal() {
        let assignment = solve(&formula(vec![vec![("p", true)]])).unwrap();
        assert_eq!(assignment.value_of(&"p"), Some(true));
        assert_eq!(assignment.len(), 1);
    }

    #[test]
    fn direct_contradiction() {
        assert!(solve(&formula(vec![vec![("a", true)], vec![("a", false)]])).is_none());
    }

    #[test]
    fn conflict() {
        let the_formula = formula(vec![
            vec![("p", true), ("q", true)],
            vec![("p", false), ("q", false)],
            vec![("p", true), ("q", false)],
            vec![("p", false), ("q", true)],
        ]);
        assert!(solve(&the_formula).is_none());
    }

    #[test]
    fn explicit_empty_clause() {
        let mut the_formula = formula(vec![vec![("p", true)]]);
        the_formula.add_clause(vec![]);
        assert!(solve(&the_formula).is_none());

        let mut ctx = Context::from_formula(&the_formula, Config::default());
        assert_eq!(ctx.solve(), Report::Unsatisfiable);
        assert_eq!(ctx.counters().decisions, 0);
    }

    #[test]
    fn three_literal_clause() {
        let the_formula = formula(vec![vec![("a", true), ("b", false), ("c", true)]]);
        let assignment = solve(&the_formula).unwrap();
        assert!(
            assignment.value_of(&"a") == Some(true)
                || assignment.value_of(&"b") == Some(false)
                || assignment.value_of(&"c") == Some(true)
        );
    }

    #[test]
    fn unit_conjunct() {
        let the_formula = formula(vec![vec![("p", true), ("q", true)], vec![("p", false)]]);
        let assignment = solve(&the_formula).unwrap();

        assert_eq!(assignment.value_of(&"p"), Some(false));
        assert_eq!(assignment.value_of(&"q"), Some(true));
    }

    #[test]
    fn tautology() {
        let the_formula = formula(vec![vec![("p", true), ("q", false), ("p", false)]]);
        let assignment = solve(&the_formula).unwrap();
        assert!(assignment.satisfies(&the_formula));
    }

    #[test]
    fn duplicates() {
        let the_formula = formula(vec![
            vec![("p", true), ("p", true), ("q", true), ("q", true)],
            vec![("p", false), ("p", false)],
        ]);
        let assignment = solve(&the_formula).unwrap();
        assert_eq!(assignment.value_of(&"p"), Some(false));
        assert_eq!(assignment.value_of(&"q"), Some(true));
    }

    #[test]
    fn lecture_unsat() {
        let the_formula = formula(vec![
            vec![("1", true), ("2", true)],
            vec![("2", false), ("3", true)],
            vec![("2", false), ("3", false)],
            vec![("1", false), ("2", false), ("4", false)],
            vec![("1", false), ("2", true), ("4", false)],
            vec![("1", false), ("2", true), ("4", true)],
        ]);
        assert!(solve(&the_formula).is_none());
    }

    #[test]
    fn lecture_sat() {
        let the_formula = formula(vec![
            vec![("1", false), ("2", false), ("3", true)],
            vec![("2", true), ("1", false), ("3", true)],
            vec![("1", true), ("2", false), ("3", true)],
            vec![("3", false), ("4", true), ("5", true)],
            vec![("3", false), ("4", true), ("5", false)],
            vec![("3", false), ("4", false), ("5", true)],
            vec![("3", false), ("4", false), ("5", false)],
        ]);
        let assignment = solve(&the_formula).unwrap();
        assert!(assignment.satisfies(&the_formula));
        assert_eq!(assignment.value_of(&"3"), Some(false));
    }
}

mod decisions {
    use super::*;

    /// Without unit clauses, the first literal of the last clause is assumed first.
    #[test]
    fn last_clause_tie_break() {
        let the_formula = formula(vec![
            vec![("a", true), ("b", true)],
            vec![("c", true), ("d", true)],
        ]);
        let assignment = solve(&the_formula).unwrap();

        assert_eq!(assignment.value_of(&"c"), Some(true));
        assert_eq!(assignment.value_of(&"a"), Some(true));
        assert_eq!(assignment.value_of(&"b"), None);
        assert_eq!(assignment.value_of(&"d"), None);
    }

    /// An earlier copy of the last clause is decided on before a later unit clause.
    #[test]
    fn copy_of_last_clause() {
        let the_formula = formula(vec![
            vec![("a", true), ("b", true)],
            vec![("b", true)],
            vec![("a", true), ("b", true)],
        ]);
        let assignment = solve(&the_formula).unwrap();

        assert_eq!(assignment.value_of(&"a"), Some(true));
        assert_eq!(assignment.value_of(&"b"), Some(true));
        assert_eq!(assignment.len(), 2);
    }

    #[test]
    fn first_clause_policy() {
        let the_formula = formula(vec![
            vec![("a", false), ("b", true)],
            vec![("c", true), ("d", true)],
        ]);
        let config = Config {
            decision: DecisionPolicy::FirstClause,
            ..Default::default()
        };
        let mut ctx = Context::from_formula(&the_formula, config);
        assert_eq!(ctx.solve(), Report::Satisfiable);

        let assignment = ctx.assignment().unwrap();
        assert_eq!(assignment.value_of(&"a"), Some(false));
        assert_eq!(assignment.value_of(&"c"), Some(true));
        assert_eq!(assignment.len(), 2);
    }

    /// Unit clauses are decided on as they appear, without contradiction.
    #[test]
    fn unit_chain() {
        let the_formula = formula(vec![
            vec![("b", true)],
            vec![("a", false), ("b", false)],
            vec![("a", true), ("c", true)],
        ]);
        let mut ctx = Context::from_formula(&the_formula, Config::default());
        assert_eq!(ctx.solve(), Report::Satisfiable);

        let assignment = ctx.assignment().unwrap();
        assert_eq!(assignment.value_of(&"a"), Some(false));
        assert_eq!(assignment.value_of(&"b"), Some(true));
        assert_eq!(assignment.value_of(&"c"), Some(true));
        assert_eq!(ctx.counters().contradictions, 0);
    }

    #[test]
    fn secondary_branch() {
        let the_formula = formula(vec![
            vec![("p", true), ("q", true)],
            vec![("p", true), ("q", false)],
            vec![("p", false), ("r", true)],
        ]);
        let mut ctx = Context::from_formula(&the_formula, Config::default());
        assert_eq!(ctx.solve(), Report::Satisfiable);

        // p is assumed false, leaving the units q and -q, so both branches on q fail.
        let assignment = ctx.assignment().unwrap();
        assert_eq!(assignment.value_of(&"p"), Some(true));
        assert_eq!(assignment.value_of(&"q"), None);
        assert_eq!(assignment.value_of(&"r"), Some(true));

        let counters = ctx.counters();
        assert_eq!(counters.decisions, 5);
        assert_eq!(counters.contradictions, 2);
        assert_eq!(counters.max_depth, 2);
    }
}

mod context {
    use super::*;

    #[test]
    fn repeated_solves() {
        let the_formula = formula(vec![
            vec![("x", true), ("y", true), ("z", false)],
            vec![("x", false), ("y", false)],
            vec![("y", true), ("z", true)],
        ]);
        let mut ctx = Context::from_formula(&the_formula, Config::default());

        assert_eq!(ctx.report(), Report::Unknown);
        assert_eq!(ctx.solve(), Report::Satisfiable);
        let first = ctx.assignment();
        assert_eq!(ctx.solve(), Report::Satisfiable);
        assert_eq!(first, ctx.assignment());

        assert_eq!(solve(&the_formula), first);
        assert_eq!(ctx.clause_db.derived_count(), 0);
    }

    #[test]
    fn revision_resets_report() {
        let mut ctx = Context::from_config(Config::default());
        ctx.add_clause(&[Literal::new("p", true)]);
        assert_eq!(ctx.solve(), Report::Satisfiable);

        ctx.add_clause(&[Literal::new("p", false)]);
        assert_eq!(ctx.report(), Report::Unknown);
        assert!(ctx.assignment().is_none());
        assert_eq!(ctx.solve(), Report::Unsatisfiable);
    }

    #[test]
    fn assume_keeps_formula() {
        let the_formula = formula(vec![
            vec![("p", true), ("q", true)],
            vec![("p", false), ("r", true)],
        ]);
        let mut ctx = Context::from_formula(&the_formula, Config::default());

        assert_eq!(
            ctx.assume(&"p", true),
            Ok(formula(vec![vec![("r", true)]]))
        );
        assert_eq!(ctx.formula(), the_formula);
        assert_eq!(ctx.clause_db.derived_count(), 0);
    }

    #[test]
    fn owned_variables() {
        let the_formula: Formula<String> = vec![
            vec![Literal::new("north".to_string(), true)],
            vec![
                Literal::new("north".to_string(), false),
                Literal::new("south".to_string(), false),
            ],
        ]
        .into_iter()
        .collect();

        let assignment = solve(&the_formula).unwrap();
        assert_eq!(assignment.value_of(&"north".to_string()), Some(true));
        assert_eq!(assignment.value_of(&"south".to_string()), Some(false));
    }
}
