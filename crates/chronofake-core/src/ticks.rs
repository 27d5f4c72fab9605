//! Tick arithmetic shared by the generators.
//!
//! A tick is 100 nanoseconds. Every sampling operation draws a tick count and
//! turns it back into a calendar period (`time::Duration`) or an elapsed span
//! (`std::time::Duration`).

use std::time::Duration as StdDuration;

use time::Duration;

pub const NANOS_PER_TICK: i64 = 100;
pub const TICKS_PER_SECOND: i64 = 10_000_000;
pub const TICKS_PER_DAY: i64 = TICKS_PER_SECOND * 86_400;

/// Ticks in `days` whole days, or `None` when the product leaves `i64`.
pub fn days_to_ticks(days: i32) -> Option<i64> {
    i64::from(days).checked_mul(TICKS_PER_DAY)
}

/// Builds a signed period from a tick count. Never overflows.
pub fn period_from_ticks(ticks: i64) -> Duration {
    let seconds = ticks / TICKS_PER_SECOND;
    let sub_ticks = ticks % TICKS_PER_SECOND;
    // |sub_ticks| < 10^7, so the nanosecond part fits an i32 and shares the sign of `seconds`.
    Duration::new(seconds, (sub_ticks * NANOS_PER_TICK) as i32)
}

/// Whole ticks in a signed period, truncated toward zero and saturated to `i64`.
pub fn total_ticks(period: Duration) -> i64 {
    let ticks = period.whole_nanoseconds() / i128::from(NANOS_PER_TICK);
    i64::try_from(ticks).unwrap_or(if ticks.is_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Builds an elapsed span from a tick count.
pub fn duration_from_ticks(ticks: u64) -> StdDuration {
    let per_second = TICKS_PER_SECOND as u64;
    let nanos = (ticks % per_second) * NANOS_PER_TICK as u64;
    StdDuration::new(ticks / per_second, nanos as u32)
}

/// Whole ticks in an elapsed span, truncated.
pub fn duration_total_ticks(duration: StdDuration) -> u128 {
    duration.as_nanos() / NANOS_PER_TICK as u128
}

/// Rounds a fractional tick count to the nearest tick, ties to even.
///
/// Out-of-range values saturate at the `i64` bounds.
pub fn round_ties_even_ticks(ticks: f64) -> i64 {
    ticks.round_ties_even() as i64
}
