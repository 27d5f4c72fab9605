//! The two tick-drawing strategies.
//!
//! `past`/`future` draw an integer uniformly over the whole inclusive tick
//! range. `recent`/`between` scale a `[0, 1)` double by the range and round
//! to the nearest tick. The two paths treat the range edges differently and
//! are kept apart on purpose.

use crate::error::GenerateError;
use crate::random::RandomSource;
use crate::ticks::{days_to_ticks, round_ties_even_ticks};

/// Inclusive integer draw in `[0, days]`, in ticks.
pub(crate) fn inclusive_part_ticks<R: RandomSource>(
    random: &mut R,
    days: i32,
    operation: &'static str,
) -> Result<i64, GenerateError> {
    let ticks = days_to_ticks(days).ok_or(GenerateError::out_of_range(operation))?;
    Ok(random.long(0, ticks))
}

/// Fraction of `total_ticks`, rounded half-to-even and kept inside `[0, total_ticks]`.
pub(crate) fn fractional_part_ticks<R: RandomSource>(random: &mut R, total_ticks: i64) -> i64 {
    let part = round_ties_even_ticks(random.double() * total_ticks as f64);
    if total_ticks >= 0 {
        part.clamp(0, total_ticks)
    } else {
        part.clamp(total_ticks, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;
    use crate::ticks::TICKS_PER_DAY;

    #[test]
    fn inclusive_draw_reaches_both_ends() {
        let mut random = ScriptedRandom::new(vec![0.0, 1.0]);
        assert_eq!(inclusive_part_ticks(&mut random, 3, "past"), Ok(0));
        assert_eq!(
            inclusive_part_ticks(&mut random, 3, "past"),
            Ok(3 * TICKS_PER_DAY)
        );
    }

    #[test]
    fn inclusive_draw_reports_overflow() {
        let mut random = ScriptedRandom::constant(0.5);
        let err = inclusive_part_ticks(&mut random, i32::MAX, "future").expect_err("must fail");
        assert_eq!(err, GenerateError::OutOfRange { operation: "future" });
    }

    #[test]
    fn fractional_draw_rounds_to_nearest_tick() {
        let mut random = ScriptedRandom::new(vec![0.25, 0.3]);
        // 0.25 * 10 = 2.5 rounds to the even neighbour.
        assert_eq!(fractional_part_ticks(&mut random, 10), 2);
        assert_eq!(fractional_part_ticks(&mut random, 10), 3);
    }

    #[test]
    fn fractional_draw_of_empty_range_is_zero() {
        let mut random = ScriptedRandom::constant(0.9);
        assert_eq!(fractional_part_ticks(&mut random, 0), 0);
    }

    #[test]
    fn fractional_draw_follows_negative_ranges() {
        let mut random = ScriptedRandom::constant(0.5);
        assert_eq!(fractional_part_ticks(&mut random, -10), -5);
    }
}
