use chronofake_core::{Clock, RandomSource, TimeDataSet, ZoneError};
use time::UtcOffset;

use crate::cli::{BetweenArgs, DaysArgs, WindowArgs};
use crate::error::CliError;
use crate::output::format_local;

use super::parse_local;

pub fn past<R, C, Z>(
    data: &mut TimeDataSet<R, C, Z>,
    args: &WindowArgs,
    count: usize,
) -> Result<Vec<String>, CliError>
where
    R: RandomSource,
    C: Clock,
    Z: Fn() -> Result<UtcOffset, ZoneError>,
{
    let reference = args.reference.as_deref().map(parse_local).transpose()?;
    (0..count)
        .map(|_| format_local(data.local().past(args.days, reference)?))
        .collect()
}

pub fn future<R, C, Z>(
    data: &mut TimeDataSet<R, C, Z>,
    args: &WindowArgs,
    count: usize,
) -> Result<Vec<String>, CliError>
where
    R: RandomSource,
    C: Clock,
    Z: Fn() -> Result<UtcOffset, ZoneError>,
{
    let reference = args.reference.as_deref().map(parse_local).transpose()?;
    (0..count)
        .map(|_| format_local(data.local().future(args.days, reference)?))
        .collect()
}

pub fn soon<R, C, Z>(
    data: &mut TimeDataSet<R, C, Z>,
    args: &DaysArgs,
    count: usize,
) -> Result<Vec<String>, CliError>
where
    R: RandomSource,
    C: Clock,
    Z: Fn() -> Result<UtcOffset, ZoneError>,
{
    (0..count)
        .map(|_| format_local(data.local().soon(args.days)?))
        .collect()
}

pub fn recent<R, C, Z>(
    data: &mut TimeDataSet<R, C, Z>,
    args: &DaysArgs,
    count: usize,
) -> Result<Vec<String>, CliError>
where
    R: RandomSource,
    C: Clock,
    Z: Fn() -> Result<UtcOffset, ZoneError>,
{
    (0..count)
        .map(|_| format_local(data.local().recent(args.days)?))
        .collect()
}

pub fn between<R, C, Z>(
    data: &mut TimeDataSet<R, C, Z>,
    args: &BetweenArgs,
    count: usize,
) -> Result<Vec<String>, CliError>
where
    R: RandomSource,
    C: Clock,
    Z: Fn() -> Result<UtcOffset, ZoneError>,
{
    let start = parse_local(&args.start)?;
    let end = parse_local(&args.end)?;
    (0..count)
        .map(|_| format_local(data.local().between(start, end)?))
        .collect()
}
