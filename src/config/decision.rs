/// Policies for choosing a decision literal when no unit clause is preferred.
///
/// In either case the decision is the first literal of the chosen clause, with the primary branch taking the polarity of the literal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecisionPolicy {
    /// The last clause of the formula.
    #[default]
    LastClause,

    /// The first clause of the formula.
    FirstClause,
}

impl std::fmt::Display for DecisionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LastClause => write!(f, "last_clause"),
            Self::FirstClause => write!(f, "first_clause"),
        }
    }
}
