/// Counts of things which happened during the most recent solve of a context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// Assumptions made, counting both branches of every decision.
    pub decisions: usize,

    /// Assumptions which led to a contradiction.
    pub contradictions: usize,

    /// The greatest count of assumptions held at once.
    pub max_depth: usize,
}
