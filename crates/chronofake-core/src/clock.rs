use time::OffsetDateTime;

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> OffsetDateTime;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> OffsetDateTime {
        (**self).now()
    }
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn fixed_clock_never_moves() {
        let clock = FixedClock(datetime!(2024-03-10 12:00 UTC));
        assert_eq!(clock.now(), clock.now());
        assert_eq!((&clock).now(), datetime!(2024-03-10 12:00 UTC));
    }

    #[test]
    fn system_clock_reports_utc() {
        let now = SystemClock.now();
        assert!(now.offset().is_utc());
    }
}
