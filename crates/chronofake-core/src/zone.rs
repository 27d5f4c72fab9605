//! Zone providers.
//!
//! A zone provider is any `Fn() -> Result<UtcOffset, ZoneError>`. Generators
//! store the provider itself and call it each time they need "now", so a
//! provider reading shared state picks up offset changes made after the
//! generator was built.

use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};
use tracing::warn;

use crate::clock::Clock;
use crate::error::{GenerateError, ZoneError};

/// Provider that always resolves to UTC.
pub fn utc() -> Result<UtcOffset, ZoneError> {
    Ok(UtcOffset::UTC)
}

/// Provider that asks the operating system for the current local offset.
///
/// On platforms where reading the offset is unsound in a multi-threaded
/// process `time` refuses, and this returns [`ZoneError::IndeterminateOffset`].
pub fn local() -> Result<UtcOffset, ZoneError> {
    Ok(UtcOffset::current_local_offset()?)
}

/// Provider pinned to one offset.
pub fn fixed(offset: UtcOffset) -> impl Fn() -> Result<UtcOffset, ZoneError> + Clone {
    move || Ok(offset)
}

/// Current instant converted to the provider's offset, without the offset.
pub(crate) fn local_now<C, Z>(clock: &C, zone: &Z) -> Result<PrimitiveDateTime, GenerateError>
where
    C: Clock,
    Z: Fn() -> Result<UtcOffset, ZoneError>,
{
    let offset = zone().inspect_err(|error| warn!(%error, "zone provider failed"))?;
    let zoned: OffsetDateTime = clock
        .now()
        .checked_to_offset(offset)
        .ok_or(GenerateError::out_of_range("now"))?;
    Ok(PrimitiveDateTime::new(zoned.date(), zoned.time()))
}
