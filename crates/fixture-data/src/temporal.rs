//! Calendar date and timestamp formatters.
//!
//! Dates are rendered as `YYYY-MM-DD` in UTC and are always computed from
//! the injected clock's current UTC date. Every random day offset is drawn
//! from a range that is inclusive on both ends.

use chrono::{NaiveDate, SecondsFormat, TimeDelta};
use mockable::Clock;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// Default spread, in days either side of today, for [`random_date`].
pub const DEFAULT_RANDOM_DATE_OFFSET_DAYS: u32 = 30;

/// Default start offset for [`date_range`].
pub const DEFAULT_RANGE_START_OFFSET_DAYS: i64 = 0;

/// Default end offset for [`date_range`].
pub const DEFAULT_RANGE_END_OFFSET_DAYS: i64 = 7;

/// Default distance for [`future_date`] and [`past_date`].
pub const DEFAULT_DAY_DISTANCE: u32 = 1;

/// Default youngest age for [`date_of_birth`].
pub const DEFAULT_MIN_AGE: u32 = 18;

/// Default oldest age for [`date_of_birth`].
pub const DEFAULT_MAX_AGE: u32 = 65;

/// Years are approximated as 365 days when converting ages to offsets.
const DAYS_PER_YEAR: i64 = 365;

/// Upper bound, in milliseconds, of how far back [`random_timestamp`] reaches.
const TIMESTAMP_SPREAD_MILLIS: i64 = 10_000_000_000;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A pair of `YYYY-MM-DD` dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range.
    pub start: String,
    /// Last day of the range.
    pub end: String,
}

/// Returns today's UTC date.
///
/// ```
/// use fixture_data::today;
/// use mockable::DefaultClock;
///
/// assert_eq!(today(&DefaultClock).len(), "YYYY-MM-DD".len());
/// ```
#[must_use]
pub fn today(clock: &dyn Clock) -> String {
    format_date(clock.utc().date_naive())
}

/// Returns a date drawn uniformly from `[today - offset_days, today + offset_days]`.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidArgument`] if the shifted date leaves
/// the supported calendar range.
pub fn random_date<R: Rng>(
    rng: &mut R,
    clock: &dyn Clock,
    offset_days: u32,
) -> Result<String, GenerationError> {
    let spread = i64::from(offset_days);
    let offset = rng.random_range(-spread..=spread);
    shift_today(clock, offset, "offset_days").map(format_date)
}

/// Returns the dates `start_offset` and `end_offset` days from today.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidRange`] when `start_offset` is after
/// `end_offset`, and [`GenerationError::InvalidArgument`] when either date
/// leaves the supported calendar range. The ordering check is deliberately
/// stricter than plain date arithmetic, which would happily return a range
/// whose start follows its end.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use fixture_data::{FixedClock, date_range};
///
/// let clock = FixedClock::on_date(NaiveDate::from_ymd_opt(2025, 7, 7).expect("date"));
/// let range = date_range(&clock, 0, 7).expect("valid offsets");
/// assert_eq!(range.start, "2025-07-07");
/// assert_eq!(range.end, "2025-07-14");
/// ```
pub fn date_range(
    clock: &dyn Clock,
    start_offset: i64,
    end_offset: i64,
) -> Result<DateRange, GenerationError> {
    if end_offset < start_offset {
        return Err(GenerationError::InvalidRange {
            min: start_offset,
            max: end_offset,
        });
    }
    let start = shift_today(clock, start_offset, "start_offset")?;
    let end = shift_today(clock, end_offset, "end_offset")?;
    Ok(DateRange {
        start: format_date(start),
        end: format_date(end),
    })
}

/// Returns the date `days_ahead` days after today.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidArgument`] if the date leaves the
/// supported calendar range.
pub fn future_date(clock: &dyn Clock, days_ahead: u32) -> Result<String, GenerationError> {
    shift_today(clock, i64::from(days_ahead), "days_ahead").map(format_date)
}

/// Returns the date `days_back` days before today.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidArgument`] if the date leaves the
/// supported calendar range.
pub fn past_date(clock: &dyn Clock, days_back: u32) -> Result<String, GenerationError> {
    shift_today(clock, -i64::from(days_back), "days_back").map(format_date)
}

/// Returns a date of birth between `min_age` and `max_age` years ago.
///
/// Ages are converted to days at 365 days per year and the offset is drawn
/// from `[min_age * 365, max_age * 365]`.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidRange`] when `max_age < min_age`, and
/// [`GenerationError::InvalidArgument`] if the date leaves the supported
/// calendar range.
pub fn date_of_birth<R: Rng>(
    rng: &mut R,
    clock: &dyn Clock,
    min_age: u32,
    max_age: u32,
) -> Result<String, GenerationError> {
    if max_age < min_age {
        return Err(GenerationError::InvalidRange {
            min: i64::from(min_age),
            max: i64::from(max_age),
        });
    }
    let youngest = i64::from(min_age) * DAYS_PER_YEAR;
    let oldest = i64::from(max_age) * DAYS_PER_YEAR;
    let days_ago = rng.random_range(youngest..=oldest);
    shift_today(clock, -days_ago, "max_age").map(format_date)
}

/// Returns an RFC 3339 UTC timestamp with millisecond precision, up to
/// roughly 115 days before now.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidArgument`] if the clock is so close to
/// the start of the supported range that the offset underflows.
pub fn random_timestamp<R: Rng>(rng: &mut R, clock: &dyn Clock) -> Result<String, GenerationError> {
    let millis_back = rng.random_range(0..TIMESTAMP_SPREAD_MILLIS);
    let now = clock.utc();
    TimeDelta::try_milliseconds(millis_back)
        .and_then(|delta| now.checked_sub_signed(delta))
        .map(|instant| instant.to_rfc3339_opts(SecondsFormat::Millis, true))
        .ok_or_else(|| {
            GenerationError::invalid_argument("clock", "current time is too close to the minimum")
        })
}

fn shift_today(
    clock: &dyn Clock,
    days: i64,
    name: &'static str,
) -> Result<NaiveDate, GenerationError> {
    let today = clock.utc().date_naive();
    TimeDelta::try_days(days)
        .and_then(|delta| today.checked_add_signed(delta))
        .ok_or_else(|| {
            GenerationError::invalid_argument(
                name,
                format!("an offset of {days} days leaves the supported calendar range"),
            )
        })
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
