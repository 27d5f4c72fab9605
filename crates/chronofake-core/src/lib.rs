//! # Chronofake Core
//!
//! Random date-times, instants and durations for test-data synthesis.
//!
//! ## Overview
//!
//! Every value is a uniform draw inside a window anchored to "now" or to
//! caller-supplied bounds. Windows are measured in days and drawn in ticks
//! (100 ns), on top of the `time` crate's calendar arithmetic.
//!
//! - **Local date-times** ([`LocalDateTimeGenerator`]): `past`, `future`,
//!   `soon`, `recent`, `between` over `PrimitiveDateTime`
//! - **Instants** ([`InstantGenerator`]): the same windows over UTC
//!   `OffsetDateTime`
//! - **Durations** ([`DurationGenerator`]): spans in `[0, maximum]`
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`clock`] | Clock trait, system and fixed clocks |
//! | [`config`] | Default windows, seed and offset |
//! | [`dataset`] | Facade sharing one source across generators |
//! | [`duration`] | Duration generator |
//! | [`error`] | Error types |
//! | [`instant`] | Instant generator |
//! | [`local`] | Local date-time generator |
//! | [`random`] | Random source trait and implementations |
//! | [`ticks`] | Tick arithmetic |
//! | [`zone`] | Zone providers |
//!
//! ## Quick Start
//!
//! ```rust
//! use chronofake_core::{zone, FastRandom, LocalDateTimeGenerator, SystemClock};
//! use time::macros::datetime;
//!
//! let mut dates = LocalDateTimeGenerator::new(FastRandom::with_seed(7), SystemClock, zone::utc);
//!
//! let start = datetime!(2020-01-01 00:00);
//! let end = datetime!(2020-01-10 00:00);
//! let value = dates.between(start, end)?;
//! assert!(start <= value && value <= end);
//! # Ok::<(), chronofake_core::GenerateError>(())
//! ```
//!
//! ## Sampling
//!
//! `past` and `future` draw an integer uniformly over the inclusive tick
//! range. `recent` and `between` scale a `[0, 1)` double by the range and
//! round half-to-even. Both paths are kept; their edge behaviour differs at
//! the tick level.
//!
//! ## Error Handling
//!
//! Arguments are never validated: a negative day count silently flips the
//! window. A call fails only when the zone provider fails or the arithmetic
//! leaves the supported range:
//!
//! ```rust
//! use chronofake_core::GenerateError;
//!
//! fn describe(error: &GenerateError) -> &'static str {
//!     match error {
//!         GenerateError::Zone(_) => "zone lookup failed",
//!         GenerateError::OutOfRange { .. } => "window too large",
//!     }
//! }
//! ```

pub mod clock;
pub mod config;
pub mod dataset;
pub mod duration;
pub mod error;
pub mod instant;
pub mod local;
pub mod random;
mod sampling;
pub mod ticks;
pub mod zone;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{parse_utc_offset, GeneratorConfig};
pub use dataset::{BoxedZone, TimeDataSet};
pub use duration::DurationGenerator;
pub use error::{CoreError, GenerateError, ValidationError, ZoneError};
pub use instant::InstantGenerator;
pub use local::LocalDateTimeGenerator;
pub use random::{FastRandom, RandomSource, ScriptedRandom};
pub use ticks::{TICKS_PER_DAY, TICKS_PER_SECOND};
