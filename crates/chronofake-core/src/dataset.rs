use time::UtcOffset;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::config::GeneratorConfig;
use crate::duration::DurationGenerator;
use crate::error::{ValidationError, ZoneError};
use crate::instant::InstantGenerator;
use crate::local::LocalDateTimeGenerator;
use crate::random::{FastRandom, RandomSource};
use crate::zone;

/// Type-erased zone provider.
pub type BoxedZone = Box<dyn Fn() -> Result<UtcOffset, ZoneError>>;

/// One random source, clock and zone provider shared by every generator.
///
/// Each accessor lends the shared parts to a short-lived generator, so draws
/// made through `local()`, `instant()` and `duration()` advance the same
/// random sequence.
pub struct TimeDataSet<R, C, Z> {
    random: R,
    clock: C,
    zone: Z,
    config: GeneratorConfig,
}

impl TimeDataSet<FastRandom, SystemClock, BoxedZone> {
    /// Wall clock, `fastrand` source seeded from `config.seed` when set, and
    /// either the configured fixed offset or the machine's local offset.
    pub fn from_config(config: GeneratorConfig) -> Result<Self, ValidationError> {
        let random = match config.seed {
            Some(seed) => FastRandom::with_seed(seed),
            None => FastRandom::new(),
        };
        let zone: BoxedZone = match config.offset()? {
            Some(offset) => Box::new(zone::fixed(offset)),
            None => Box::new(zone::local),
        };
        debug!(seed = ?config.seed, offset = ?config.utc_offset, "built time data set");

        Ok(Self::new(random, SystemClock, zone).with_config(config))
    }
}

impl<R, C, Z> TimeDataSet<R, C, Z>
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

    pub fn local(&mut self) -> LocalDateTimeGenerator<&mut R, &C, &Z> {
        LocalDateTimeGenerator::new(&mut self.random, &self.clock, &self.zone)
            .with_config(self.config.clone())
    }

    pub fn instant(&mut self) -> InstantGenerator<&mut R, &C> {
        InstantGenerator::new(&mut self.random, &self.clock).with_config(self.config.clone())
    }

    pub fn duration(&mut self) -> DurationGenerator<&mut R> {
        DurationGenerator::new(&mut self.random).with_config(self.config.clone())
    }
}
