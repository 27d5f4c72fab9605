use chronofake_core::{Clock, RandomSource, TimeDataSet, ZoneError};
use time::UtcOffset;

use crate::cli::InstantCommand;
use crate::error::CliError;
use crate::output::format_instant;

use super::parse_instant;

pub fn run<R, C, Z>(
    data: &mut TimeDataSet<R, C, Z>,
    command: &InstantCommand,
    count: usize,
) -> Result<Vec<String>, CliError>
where
    R: RandomSource,
    C: Clock,
    Z: Fn() -> Result<UtcOffset, ZoneError>,
{
    let mut values = Vec::with_capacity(count);
    match command {
        InstantCommand::Past(args) => {
            let reference = args.reference.as_deref().map(parse_instant).transpose()?;
            for _ in 0..count {
                values.push(format_instant(data.instant().past(args.days, reference)?)?);
            }
        }
        InstantCommand::Future(args) => {
            let reference = args.reference.as_deref().map(parse_instant).transpose()?;
            for _ in 0..count {
                values.push(format_instant(data.instant().future(args.days, reference)?)?);
            }
        }
        InstantCommand::Soon(args) => {
            for _ in 0..count {
                values.push(format_instant(data.instant().soon(args.days)?)?);
            }
        }
        InstantCommand::Recent(args) => {
            for _ in 0..count {
                values.push(format_instant(data.instant().recent(args.days)?)?);
            }
        }
        InstantCommand::Between(args) => {
            let start = parse_instant(&args.start)?;
            let end = parse_instant(&args.end)?;
            for _ in 0..count {
                values.push(format_instant(data.instant().between(start, end)?)?);
            }
        }
    }
    Ok(values)
}
