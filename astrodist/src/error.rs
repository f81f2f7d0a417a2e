//! Error types for conversion operations.

/// Result type for conversion operations.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Error type for distance conversion and speed computation.
///
/// Every failure of the two operations is one of these variants; nothing in
/// this crate panics. The `Display` messages are user-presentable, so a
/// caller can show them verbatim in place of a result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Raw text input could not be parsed as a number.
    #[error("Not a valid number: {0:?}")]
    InvalidInput(String),

    /// A unit label outside the fixed tables was supplied.
    ///
    /// Not reachable through a UI that populates its selections from
    /// [`DistanceUnit::ALL`](crate::registry::DistanceUnit::ALL) /
    /// [`TimeUnit::ALL`](crate::registry::TimeUnit::ALL); only direct callers
    /// of the API can trigger it.
    #[error("Unknown unit: {0:?}")]
    UnknownUnit(String),

    /// The time value converted to exactly zero seconds.
    #[error("Time cannot be zero")]
    DivisionByZero,
}
