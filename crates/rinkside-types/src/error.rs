//! Error types for the `rinkside-types` crate.
//!
//! Every variant signals an upstream data contract violation: the score
//! provider sent something the playback generator cannot interpret.

/// Errors that can occur while interpreting provider data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The period identifier is neither a positive number nor "OT"/"SO".
    #[error("unrecognized period identifier: {0:?}")]
    UnknownPeriod(String),

    /// The game state string is not one the provider is known to send.
    #[error("unrecognized game state: {0:?}")]
    UnknownGameState(String),

    /// A remaining-time value could not be parsed as "MM:SS" or "END".
    #[error("malformed remaining time: {0:?}")]
    MalformedTime(String),

    /// A second value was 60 or more.
    #[error("second out of range (0-59): {0}")]
    SecondOutOfRange(u8),

    /// A tenth-of-a-second value was 10 or more.
    #[error("tenth of a second out of range (0-9): {0}")]
    TenthOutOfRange(u8),
}
