/// Categorizes SDL parse errors for programmatic handling.
///
/// The `#[error(...)]` messages are concise. Full human-readable messages
/// live in `SdlParseError::message()`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SdlParseErrorKind {
    /// A required token or construct was missing.
    ///
    /// # Example
    /// ```text
    /// type User { name String }
    ///                  ^ Expected ":" but got "S"
    /// ```
    #[error("expected {expected}, found {}", found.as_deref().unwrap_or("end of input"))]
    ExpectedToken {
        /// What was required (e.g. `"\":\""` or `"name"`).
        expected: String,
        /// The character found instead, or `None` at end of input.
        found: Option<String>,
    },

    /// Text remained after the last complete definition.
    #[error("invalid definition")]
    InvalidDefinition,

    /// Types or values were nested deeper than the parser allows.
    #[error("maximum nesting depth exceeded")]
    RecursionLimitExceeded,
}
