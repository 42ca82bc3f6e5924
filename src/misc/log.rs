/*!
Targets for [logging](https://docs.rs/log).

The search, its procedures, the databases, and the encoder each log to their own target, so output may be filtered to the part of a solve of interest.

No logger is installed by the library.
*/

/// Targets to be used with the `target:` argument of a log macro.
pub mod targets {
    /// Logs related to [the search](crate::procedures::search)
    pub const SEARCH: &str = "search";

    /// Logs related to [decisions](crate::procedures::decision)
    pub const DECISION: &str = "decision";

    /// Logs related to [reduction](crate::procedures::reduction) of a formula under an assumption
    pub const REDUCTION: &str = "reduction";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to the [atom database](crate::db::atom)
    pub const ATOM_DB: &str = "atom_db";

    /// Logs related to [encoding](crate::encoder) a scheduling problem
    pub const ENCODER: &str = "encoder";
}
