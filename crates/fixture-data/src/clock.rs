//! Deterministic clock for date and timestamp generators.
//!
//! Generators that depend on "today" take `&dyn mockable::Clock`. Production
//! callers pass [`mockable::DefaultClock`]; tests pin the date with
//! [`FixedClock`].

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};
use mockable::Clock;

/// A clock frozen at a single instant.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use fixture_data::{FixedClock, today};
///
/// let date = NaiveDate::from_ymd_opt(2025, 7, 7).expect("valid date");
/// assert_eq!(today(&FixedClock::on_date(date)), "2025-07-07");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Creates a clock that always reports `now`.
    #[must_use]
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self(now)
    }

    /// Creates a clock frozen at midnight UTC on `date`.
    #[must_use]
    pub fn on_date(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN).and_utc())
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}
