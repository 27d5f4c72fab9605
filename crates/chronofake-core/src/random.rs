//! Random source abstraction.
//!
//! Generators never touch a global RNG: every draw goes through an injected
//! [`RandomSource`], so a seeded [`FastRandom`] or a [`ScriptedRandom`] makes
//! the whole pipeline reproducible.

/// Uniform randomness consumed by the generators.
pub trait RandomSource {
    /// Uniform double in `[0, 1)`.
    fn double(&mut self) -> f64;

    /// Uniform integer in the closed range between `lo` and `hi`.
    ///
    /// The bounds may be given in either order.
    fn long(&mut self, lo: i64, hi: i64) -> i64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn double(&mut self) -> f64 {
        (**self).double()
    }

    fn long(&mut self, lo: i64, hi: i64) -> i64 {
        (**self).long(lo, hi)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn double(&mut self) -> f64 {
        (**self).double()
    }

    fn long(&mut self, lo: i64, hi: i64) -> i64 {
        (**self).long(lo, hi)
    }
}

/// Production source backed by `fastrand`.
#[derive(Debug, Clone)]
pub struct FastRandom {
    rng: fastrand::Rng,
}

impl Default for FastRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl FastRandom {
    /// Source seeded from the thread-local generator.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Deterministic source; equal seeds replay equal sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl RandomSource for FastRandom {
    fn double(&mut self) -> f64 {
        self.rng.f64()
    }

    fn long(&mut self, lo: i64, hi: i64) -> i64 {
        let (min, max) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        self.rng.i64(min..=max)
    }
}

/// Largest double strictly below one.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Replays a fixed list of fractions, cycling when exhausted.
///
/// `double()` returns the next fraction (clamped into `[0, 1)`); `long(lo, hi)`
/// maps the next fraction onto the closed range, so `1.0` selects the upper
/// bound exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedRandom {
    fractions: Vec<f64>,
    index: usize,
}

impl ScriptedRandom {
    pub fn new(fractions: impl Into<Vec<f64>>) -> Self {
        Self {
            fractions: fractions.into(),
            index: 0,
        }
    }

    /// Source that always yields the same fraction.
    pub fn constant(fraction: f64) -> Self {
        Self::new(vec![fraction])
    }

    fn next_fraction(&mut self) -> f64 {
        if self.fractions.is_empty() {
            return 0.0;
        }
        let value = self.fractions[self.index % self.fractions.len()];
        self.index = self.index.wrapping_add(1);
        if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn double(&mut self) -> f64 {
        self.next_fraction().min(BELOW_ONE)
    }

    fn long(&mut self, lo: i64, hi: i64) -> i64 {
        let (min, max) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let span = i128::from(max) - i128::from(min);
        let offset = (self.next_fraction() * span as f64).floor() as i128;
        (i128::from(min) + offset.clamp(0, span)) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_random_double_is_in_unit_interval() {
        let mut random = FastRandom::with_seed(7);
        for _ in 0..1_000 {
            let value = random.double();
            assert!((0.0..1.0).contains(&value), "value {value} out of range");
        }
    }

    #[test]
    fn fast_random_long_accepts_reversed_bounds() {
        let mut random = FastRandom::with_seed(11);
        for _ in 0..1_000 {
            let value = random.long(10, -10);
            assert!((-10..=10).contains(&value), "value {value} out of range");
        }
        assert_eq!(random.long(5, 5), 5);
    }

    #[test]
    fn equal_seeds_replay_equal_sequences() {
        let mut left = FastRandom::with_seed(42);
        let mut right = FastRandom::with_seed(42);
        for _ in 0..32 {
            assert_eq!(left.long(0, i64::MAX), right.long(0, i64::MAX));
            assert_eq!(left.double().to_bits(), right.double().to_bits());
        }
    }

    #[test]
    fn scripted_random_cycles_through_fractions() {
        let mut random = ScriptedRandom::new(vec![0.25, 0.5]);
        assert_eq!(random.double(), 0.25);
        assert_eq!(random.double(), 0.5);
        assert_eq!(random.double(), 0.25);
    }

    #[test]
    fn scripted_random_maps_long_onto_closed_range() {
        let mut random = ScriptedRandom::new(vec![0.0, 1.0, 0.5]);
        assert_eq!(random.long(0, 100), 0);
        assert_eq!(random.long(0, 100), 100);
        assert_eq!(random.long(100, 0), 50);
    }

    #[test]
    fn scripted_random_long_covers_full_i64_range() {
        let mut random = ScriptedRandom::new(vec![0.0, 1.0]);
        assert_eq!(random.long(i64::MIN, i64::MAX), i64::MIN);
        assert_eq!(random.long(i64::MIN, i64::MAX), i64::MAX);
    }

    #[test]
    fn scripted_random_double_stays_below_one() {
        let mut random = ScriptedRandom::constant(1.0);
        assert!(random.double() < 1.0);
    }

    #[test]
    fn empty_script_yields_zero() {
        let mut random = ScriptedRandom::new(Vec::<f64>::new());
        assert_eq!(random.double(), 0.0);
        assert_eq!(random.long(3, 9), 3);
    }

    #[test]
    fn borrowed_source_advances_the_owner() {
        fn draw<R: RandomSource>(mut random: R) -> f64 {
            random.double()
        }

        let mut owner = ScriptedRandom::new(vec![0.1, 0.2]);
        assert_eq!(draw(&mut owner), 0.1);
        assert_eq!(owner.double(), 0.2);
    }
}
