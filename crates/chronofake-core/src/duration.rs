//! Random elapsed spans.

use std::time::Duration;

use tracing::debug;

use crate::config::GeneratorConfig;
use crate::random::RandomSource;
use crate::ticks::{duration_from_ticks, duration_total_ticks};

/// Samples spans in `[0, maximum]`.
#[derive(Debug, Clone)]
pub struct DurationGenerator<R> {
    random: R,
    config: GeneratorConfig,
}

impl<R: RandomSource> DurationGenerator<R> {
    pub fn new(random: R) -> Self {
        Self {
            random,
            config: GeneratorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// A span between zero and `maximum` (default one week).
    ///
    /// The fractional tick draw is truncated, so the result never exceeds
    /// `maximum` and a zero maximum always yields zero.
    pub fn duration(&mut self, maximum: Option<Duration>) -> Duration {
        let maximum = maximum.unwrap_or_else(|| self.config.max_duration());
        let total_ticks = duration_total_ticks(maximum);

        let part_ticks = (self.random.double() * total_ticks as f64) as u64;
        // Spans beyond 2^53 ticks lose precision in the product.
        let part_ticks = u128::from(part_ticks).min(total_ticks) as u64;

        let value = duration_from_ticks(part_ticks);
        debug!(?maximum, part_ticks, ?value, "sampled duration");
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{FastRandom, ScriptedRandom};

    #[test]
    fn zero_maximum_yields_zero() {
        let mut sampler = DurationGenerator::new(ScriptedRandom::constant(0.99));
        assert_eq!(sampler.duration(Some(Duration::ZERO)), Duration::ZERO);
    }

    #[test]
    fn default_maximum_is_one_week() {
        let mut sampler = DurationGenerator::new(ScriptedRandom::constant(0.5));
        assert_eq!(sampler.duration(None), Duration::from_secs(7 * 86_400 / 2));
    }

    #[test]
    fn fractional_ticks_are_truncated() {
        // 0.5 * 3 ticks = 1.5 ticks -> 1 tick.
        let mut sampler = DurationGenerator::new(ScriptedRandom::constant(0.5));
        assert_eq!(
            sampler.duration(Some(Duration::from_nanos(300))),
            Duration::from_nanos(100)
        );
    }

    #[test]
    fn never_exceeds_huge_maximum() {
        let maximum = Duration::MAX;
        let mut sampler = DurationGenerator::new(ScriptedRandom::constant(1.0));
        assert!(sampler.duration(Some(maximum)) <= maximum);
    }

    #[test]
    fn seeded_draws_stay_in_range() {
        let maximum = Duration::from_secs(3_600);
        let mut sampler = DurationGenerator::new(FastRandom::with_seed(3));
        for _ in 0..500 {
            assert!(sampler.duration(Some(maximum)) <= maximum);
        }
    }

    #[test]
    fn configured_maximum_is_used_by_default() {
        let config = GeneratorConfig {
            max_duration_days: 1,
            ..GeneratorConfig::default()
        };
        let mut sampler =
            DurationGenerator::new(ScriptedRandom::constant(0.25)).with_config(config);
        assert_eq!(sampler.duration(None), Duration::from_secs(21_600));
    }
}
