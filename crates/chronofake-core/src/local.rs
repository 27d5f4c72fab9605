//! Random local (offset-free) date-times.

use time::{Duration, PrimitiveDateTime, UtcOffset};
use tracing::debug;

use crate::clock::Clock;
use crate::config::GeneratorConfig;
use crate::error::{GenerateError, ZoneError};
use crate::random::RandomSource;
use crate::sampling::{fractional_part_ticks, inclusive_part_ticks};
use crate::ticks::{period_from_ticks, total_ticks};
use crate::zone::local_now;

/// Samples `PrimitiveDateTime` values around "now" or around caller bounds.
///
/// "Now" is the clock's instant converted into whatever offset the zone
/// provider returns at the moment of the call.
#[derive(Debug, Clone)]
pub struct LocalDateTimeGenerator<R, C, Z> {
    random: R,
    clock: C,
    zone: Z,
    config: GeneratorConfig,
}

impl<R, C, Z> LocalDateTimeGenerator<R, C, Z>
where
    R: RandomSource,
    C: Clock,
    Z: Fn() -> Result<UtcOffset, ZoneError>,
{
    pub fn new(random: R, clock: C, zone: Z) -> Self {
        Self {
            random,
            clock,
            zone,
            config: GeneratorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Current local date-time in the provider's zone.
    pub fn now(&self) -> Result<PrimitiveDateTime, GenerateError> {
        local_now(&self.clock, &self.zone)
    }

    /// A date-time in `[reference - days, reference]`.
    ///
    /// `days_to_go_back` defaults to 100 and `reference` to now.
    pub fn past(
        &mut self,
        days_to_go_back: Option<i32>,
        reference: Option<PrimitiveDateTime>,
    ) -> Result<PrimitiveDateTime, GenerateError> {
        let days = days_to_go_back.unwrap_or(self.config.days_to_go_back);
        let max = self.reference_or_now(reference)?;
        let part_ticks = inclusive_part_ticks(&mut self.random, days, "past")?;

        let value = max
            .checked_sub(period_from_ticks(part_ticks))
            .ok_or(GenerateError::out_of_range("past"))?;
        debug!(operation = "past", days, %max, part_ticks, %value, "sampled local date-time");
        Ok(value)
    }

    /// A date-time in `[reference, reference + days]`.
    ///
    /// `days_to_go_forward` defaults to 100 and `reference` to now.
    pub fn future(
        &mut self,
        days_to_go_forward: Option<i32>,
        reference: Option<PrimitiveDateTime>,
    ) -> Result<PrimitiveDateTime, GenerateError> {
        let days = days_to_go_forward.unwrap_or(self.config.days_to_go_forward);
        let min = self.reference_or_now(reference)?;
        let part_ticks = inclusive_part_ticks(&mut self.random, days, "future")?;

        let value = min
            .checked_add(period_from_ticks(part_ticks))
            .ok_or(GenerateError::out_of_range("future"))?;
        debug!(operation = "future", days, %min, part_ticks, %value, "sampled local date-time");
        Ok(value)
    }

    /// A date-time no more than `days` (default 10) ahead of now.
    pub fn soon(&mut self, days: Option<i32>) -> Result<PrimitiveDateTime, GenerateError> {
        let days = days.unwrap_or(self.config.soon_days);
        let now = self.now()?;
        let end = now
            .checked_add(Duration::days(i64::from(days)))
            .ok_or(GenerateError::out_of_range("soon"))?;
        self.between(now, end)
    }

    /// A date-time within the last `days` (default 10) days.
    pub fn recent(&mut self, days: Option<i32>) -> Result<PrimitiveDateTime, GenerateError> {
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
        debug!(operation = "recent", days, %now, part_ticks, %value, "sampled local date-time");
        Ok(value)
    }

    /// A date-time between `start` and `end`, given in either order.
    pub fn between(
        &mut self,
        start: PrimitiveDateTime,
        end: PrimitiveDateTime,
    ) -> Result<PrimitiveDateTime, GenerateError> {
        let min = start.min(end);
        let max = start.max(end);

        let part_ticks = fractional_part_ticks(&mut self.random, total_ticks(max - min));
        let value = min
            .checked_add(period_from_ticks(part_ticks))
            .ok_or(GenerateError::out_of_range("between"))?;
        debug!(operation = "between", %min, %max, part_ticks, %value, "sampled local date-time");
        Ok(value)
    }

    fn reference_or_now(
        &self,
        reference: Option<PrimitiveDateTime>,
    ) -> Result<PrimitiveDateTime, GenerateError> {
        match reference {
            Some(reference) => Ok(reference),
            None => self.now(),
        }
    }
}
