use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::UtcOffset;

use crate::error::{CoreError, ValidationError};

/// Default window sizes used when a call leaves its day count unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Days covered by `past` when no count is given.
    pub days_to_go_back: i32,
    /// Days covered by `future` when no count is given.
    pub days_to_go_forward: i32,
    /// Days covered by `soon` when no count is given.
    pub soon_days: i32,
    /// Days covered by `recent` when no count is given.
    pub recent_days: i32,
    /// Upper bound of `duration`, in days.
    pub max_duration_days: u32,
    /// Seed for a reproducible random source.
    pub seed: Option<u64>,
    /// Fixed offset such as `+02:00`; the local offset is used when unset.
    pub utc_offset: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            days_to_go_back: 100,
            days_to_go_forward: 100,
            soon_days: 10,
            recent_days: 10,
            max_duration_days: 7,
            seed: None,
            utc_offset: None,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json_str(input: &str) -> Result<Self, CoreError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.offset().map(|_| ())
    }

    /// Parsed `utc_offset`, if one is configured.
    pub fn offset(&self) -> Result<Option<UtcOffset>, ValidationError> {
        self.utc_offset.as_deref().map(parse_utc_offset).transpose()
    }

    pub fn max_duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.max_duration_days) * 86_400)
    }
}

/// Parses `+HH:MM` / `-HH:MM`.
pub fn parse_utc_offset(input: &str) -> Result<UtcOffset, ValidationError> {
    let format = format_description!("[offset_hour sign:mandatory]:[offset_minute]");
    UtcOffset::parse(input.trim(), &format).map_err(|_| ValidationError::InvalidUtcOffset {
        value: input.to_owned(),
    })
}
