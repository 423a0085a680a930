use thiserror::Error;

/// RaceError collects the errors raised by the race engine and its pre-processing.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RaceError {
    /// Raised synchronously before any race state is created.
    #[error("{field} must be positive (got {value})")]
    InvalidConfiguration { field: &'static str, value: u32 },
    #[error("invalid advantage sequence: {0}")]
    InvalidAdvantages(String),
    /// Generic error for options or parameters outside their reasonable limits, details are added
    /// as context by the caller.
    #[error("invalid input value")]
    InvalidInput,
}
