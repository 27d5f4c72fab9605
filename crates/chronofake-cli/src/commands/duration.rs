use std::time::Duration;

use chronofake_core::{Clock, RandomSource, TimeDataSet, ZoneError};
use time::UtcOffset;

use crate::cli::DurationArgs;
use crate::output::format_duration;

pub fn run<R, C, Z>(
    data: &mut TimeDataSet<R, C, Z>,
    args: &DurationArgs,
    count: usize,
) -> Vec<String>
where
    R: RandomSource,
    C: Clock,
    Z: Fn() -> Result<UtcOffset, ZoneError>,
{
    let maximum = args.max_seconds.map(Duration::from_secs);
    (0..count)
        .map(|_| format_duration(data.duration().duration(maximum)))
        .collect()
}
