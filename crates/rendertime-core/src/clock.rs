//! Wall-clock sources.

use chrono::{Local, NaiveDateTime};

/// A source of the current local wall-clock time.
pub trait Clock {
    /// Returns the current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// The system clock in the local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that always reports the same instant.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rendertime_core::{Clock, FixedClock};
///
/// let instant = NaiveDate::from_ymd_opt(2024, 1, 1)
///     .unwrap()
///     .and_hms_opt(10, 0, 0)
///     .unwrap();
/// assert_eq!(FixedClock::new(instant).now(), instant);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: NaiveDateTime,
}

impl FixedClock {
    /// Creates a clock frozen at `instant`.
    #[must_use]
    pub const fn new(instant: NaiveDateTime) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.instant
    }
}

impl<C> Clock for &C
where
    C: Clock + ?Sized,
{
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
