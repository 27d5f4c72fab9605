use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] chronofake_core::ValidationError),

    #[error(transparent)]
    Config(#[from] chronofake_core::CoreError),

    #[error(transparent)]
    Generate(#[from] chronofake_core::GenerateError),

    #[error("invalid {expected} '{value}'")]
    InvalidDateTime {
        value: String,
        expected: &'static str,
    },

    #[error("formatting error: {0}")]
    Format(#[from] time::error::Format),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::InvalidDateTime { .. } => 2,
            Self::Config(_) => 3,
            Self::Generate(_) => 4,
            Self::Format(_) | Self::Serialization(_) => 5,
            Self::Io(_) => 10,
        }
    }
}
