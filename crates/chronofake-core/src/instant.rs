//! Random absolute instants, always reported in UTC.

use time::{Duration, OffsetDateTime, UtcOffset};
use tracing::debug;

use crate::clock::Clock;
use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::random::RandomSource;
use crate::sampling::{fractional_part_ticks, inclusive_part_ticks};
use crate::ticks::{period_from_ticks, total_ticks};

/// Same windows as [`crate::LocalDateTimeGenerator`], on the global timeline.
///
/// No zone is involved: references given with any offset are compared as
/// instants and results come back at UTC.
#[derive(Debug, Clone)]
pub struct InstantGenerator<R, C> {
    random: R,
    clock: C,
    config: GeneratorConfig,
}

impl<R, C> InstantGenerator<R, C>
where
    R: RandomSource,
    C: Clock,
{
    pub fn new(random: R, clock: C) -> Self {
        Self {
            random,
            clock,
            config: GeneratorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn now(&self) -> Result<OffsetDateTime, GenerateError> {
        to_utc(self.clock.now(), "now")
    }

    pub fn past(
        &mut self,
        days_to_go_back: Option<i32>,
        reference: Option<OffsetDateTime>,
    ) -> Result<OffsetDateTime, GenerateError> {
        let days = days_to_go_back.unwrap_or(self.config.days_to_go_back);
        let max = self.reference_or_now(reference)?;
        let part_ticks = inclusive_part_ticks(&mut self.random, days, "past")?;

        let value = max
            .checked_sub(period_from_ticks(part_ticks))
            .ok_or(GenerateError::out_of_range("past"))?;
        let value = to_utc(value, "past")?;
        debug!(operation = "past", days, %max, part_ticks, %value, "sampled instant");
        Ok(value)
    }

    pub fn future(
        &mut self,
        days_to_go_forward: Option<i32>,
        reference: Option<OffsetDateTime>,
    ) -> Result<OffsetDateTime, GenerateError> {
        let days = days_to_go_forward.unwrap_or(self.config.days_to_go_forward);
        let min = self.reference_or_now(reference)?;
        let part_ticks = inclusive_part_ticks(&mut self.random, days, "future")?;

        let value = min
            .checked_add(period_from_ticks(part_ticks))
            .ok_or(GenerateError::out_of_range("future"))?;
        let value = to_utc(value, "future")?;
        debug!(operation = "future", days, %min, part_ticks, %value, "sampled instant");
        Ok(value)
    }

    pub fn soon(&mut self, days: Option<i32>) -> Result<OffsetDateTime, GenerateError> {
        let days = days.unwrap_or(self.config.soon_days);
        let now = self.now()?;
        let end = now
            .checked_add(Duration::days(i64::from(days)))
            .ok_or(GenerateError::out_of_range("soon"))?;
        self.between(now, end)
    }

    pub fn recent(&mut self, days: Option<i32>) -> Result<OffsetDateTime, GenerateError> {
        let days = days.unwrap_or(self.config.recent_days);
        let now = self.now()?;
        let min = if days == 0 {
            now
        } else {
            now.checked_sub(Duration::days(i64::from(days)))
                .ok_or(GenerateError::out_of_range("recent"))?
        };

        let part_ticks = fractional_part_ticks(&mut self.random, total_ticks(now - min));
        let value = now
            .checked_sub(period_from_ticks(part_ticks))
            .ok_or(GenerateError::out_of_range("recent"))?;
        debug!(operation = "recent", days, %now, part_ticks, %value, "sampled instant");
        Ok(value)
    }

    pub fn between(
        &mut self,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> Result<OffsetDateTime, GenerateError> {
        let min = start.min(end);
        let max = start.max(end);

        let part_ticks = fractional_part_ticks(&mut self.random, total_ticks(max - min));
        let value = min
            .checked_add(period_from_ticks(part_ticks))
            .ok_or(GenerateError::out_of_range("between"))?;
        let value = to_utc(value, "between")?;
        debug!(operation = "between", %min, %max, part_ticks, %value, "sampled instant");
        Ok(value)
    }

    fn reference_or_now(
        &self,
        reference: Option<OffsetDateTime>,
    ) -> Result<OffsetDateTime, GenerateError> {
        match reference {
            Some(reference) => Ok(reference),
            None => self.now(),
        }
    }
}

fn to_utc(value: OffsetDateTime, operation: &'static str) -> Result<OffsetDateTime, GenerateError> {
    value
        .checked_to_offset(UtcOffset::UTC)
        .ok_or(GenerateError::out_of_range(operation))
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::clock::FixedClock;
    use crate::random::ScriptedRandom;

    fn generator(random: ScriptedRandom) -> InstantGenerator<ScriptedRandom, FixedClock> {
        InstantGenerator::new(random, FixedClock(datetime!(2024-05-15 08:00 +02:00)))
    }

    #[test]
    fn now_is_reported_in_utc() {
        let sampler = generator(ScriptedRandom::constant(0.0));
        let now = sampler.now().expect("in range");
        assert_eq!(now, datetime!(2024-05-15 06:00 UTC));
        assert!(now.offset().is_utc());
    }

    #[test]
    fn past_and_future_use_the_inclusive_window() {
        let reference = datetime!(2024-01-01 00:00 +05:00);
        let mut sampler = generator(ScriptedRandom::constant(1.0));

        let past = sampler.past(Some(1), Some(reference)).expect("in range");
        assert_eq!(past, datetime!(2023-12-30 19:00 UTC));

        let future = sampler.future(Some(1), Some(reference)).expect("in range");
        assert_eq!(future, datetime!(2024-01-01 19:00 UTC));
    }

    #[test]
    fn between_compares_instants_not_wall_clocks() {
        // 10:00+02:00 is earlier than 09:00+00:00.
        let start = datetime!(2024-01-01 09:00 UTC);
        let end = datetime!(2024-01-01 10:00 +02:00);
        let mut sampler = generator(ScriptedRandom::constant(0.0));

        assert_eq!(
            sampler.between(start, end),
            Ok(datetime!(2024-01-01 08:00 UTC))
        );
    }

    #[test]
    fn recent_zero_days_is_now() {
        let mut sampler = generator(ScriptedRandom::constant(0.4));
        assert_eq!(sampler.recent(Some(0)), Ok(datetime!(2024-05-15 06:00 UTC)));
    }

    #[test]
    fn soon_stays_inside_the_window() {
        let mut sampler = generator(ScriptedRandom::constant(0.5));
        assert_eq!(sampler.soon(Some(2)), Ok(datetime!(2024-05-16 06:00 UTC)));
    }
}
