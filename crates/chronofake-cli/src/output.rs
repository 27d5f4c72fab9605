use std::time::Duration;

use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Values drawn by one invocation.
#[derive(Debug, Serialize)]
pub struct Samples {
    pub command: &'static str,
    pub values: Vec<String>,
}

pub fn render(samples: &Samples, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            for value in &samples.values {
                println!("{value}");
            }
        }
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(samples)?
            } else {
                serde_json::to_string(samples)?
            };
            println!("{payload}");
        }
    }

    Ok(())
}

/// `YYYY-MM-DDTHH:MM:SS.fffffff`, seven digits for the tick.
pub fn format_local(value: PrimitiveDateTime) -> Result<String, CliError> {
    let format = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:7]"
    );
    Ok(value.format(&format)?)
}

pub fn format_instant(value: OffsetDateTime) -> Result<String, CliError> {
    Ok(value.format(&Rfc3339)?)
}

/// Seconds with tick precision, e.g. `302400.0000000s`.
pub fn format_duration(value: Duration) -> String {
    format!("{}.{:07}s", value.as_secs(), value.subsec_nanos() / 100)
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn formats_local_with_tick_precision() {
        let value = datetime!(2020-01-04 05:06:07.1234567);
        assert_eq!(
            format_local(value).expect("formattable"),
            "2020-01-04T05:06:07.1234567"
        );
    }

    #[test]
    fn formats_instant_as_rfc3339() {
        let value = datetime!(2024-01-01 00:00 UTC);
        assert_eq!(
            format_instant(value).expect("formattable"),
            "2024-01-01T00:00:00Z"
        );
    }

    #[test]
    fn formats_duration_in_seconds() {
        assert_eq!(format_duration(Duration::new(90, 500_000_100)), "90.5000001s");
        assert_eq!(format_duration(Duration::ZERO), "0.0000000s");
    }
}
