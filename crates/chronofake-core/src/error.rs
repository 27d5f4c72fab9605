use thiserror::Error;

/// Failure raised by a zone provider while resolving the active offset.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ZoneError {
    #[error("local UTC offset could not be determined")]
    IndeterminateOffset,
    #[error("zone provider failed: {message}")]
    Provider { message: String },
}

impl ZoneError {
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }
}

impl From<time::error::IndeterminateOffset> for ZoneError {
    fn from(_: time::error::IndeterminateOffset) -> Self {
        Self::IndeterminateOffset
    }
}

/// Errors that escape a sampling call.
///
/// Generators never validate their arguments; these are the only two ways a
/// call can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error(transparent)]
    Zone(#[from] ZoneError),

    #[error("{operation}: result is outside the representable date-time range")]
    OutOfRange { operation: &'static str },
}

impl GenerateError {
    pub(crate) const fn out_of_range(operation: &'static str) -> Self {
        Self::OutOfRange { operation }
    }
}

/// Validation errors for generator configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("utc_offset must look like +HH:MM or -HH:MM: '{value}'")]
    InvalidUtcOffset { value: String },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
