/*!
Configuration of a context, and of the encoder.

All configuration for a context is contained within [Config].
The encoder reads only the [EncoderConfig] part, which may also be built on its own.

By default a decision takes the literal of the first unit clause, and otherwise the first literal of the last clause.
*/

mod decision;
pub use decision::DecisionPolicy;

mod encoder;
pub use encoder::EncoderConfig;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Which clause to take a decision from, when no unit clause is preferred.
    pub decision: DecisionPolicy,

    /// Prefer the literal of the first unit clause, if any, when making a decision.
    pub unit_priority: bool,

    /// Configuration of the encoder.
    pub encoder: EncoderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            decision: DecisionPolicy::LastClause,
            unit_priority: true,
            encoder: EncoderConfig::default(),
        }
    }
}
