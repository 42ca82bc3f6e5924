/// Configuration of the scheduling [encoder](crate::encoder).
#[derive(Clone, Debug)]
pub struct EncoderConfig {
    /// The character placed between a student and a session in the name of their atom.
    pub separator: char,

    /// Reject identifiers containing the separator, rather than trusting the caller.
    pub strict_names: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        EncoderConfig {
            separator: '_',
            strict_names: false,
        }
    }
}
