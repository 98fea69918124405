//! Calendar arithmetic for lease periods.
//!
//! Dates are plain calendar dates. Month lengths in the duration formula use a
//! fixed 30.44-day average, which existing schedules depend on.

use chrono::{Datelike, Days, Months, NaiveDate};
use rust_decimal::Decimal;

use super::error::ScheduleError;

/// Average days per month used to turn trailing days into a fractional month.
pub const AVERAGE_DAYS_PER_MONTH: Decimal = Decimal::from_parts(3044, 0, 0, false, 2);

/// Lease duration in fractional months.
///
/// Whole months come from the year and month differences; the day difference
/// (inclusive, hence `+ 1`) is divided by [`AVERAGE_DAYS_PER_MONTH`].
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
/// use rentroll_core::lease::calendar::fractional_months;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 30).unwrap();
/// assert_eq!(fractional_months(start, end), dec!(30) / dec!(30.44));
/// ```
#[must_use]
pub fn fractional_months(start: NaiveDate, end: NaiveDate) -> Decimal {
    let year_diff = i64::from(end.year()) - i64::from(start.year());
    let month_diff = i64::from(end.month()) - i64::from(start.month());
    let day_diff = i64::from(end.day()) - i64::from(start.day());

    Decimal::from(year_diff * 12 + month_diff)
        + Decimal::from(day_diff + 1) / AVERAGE_DAYS_PER_MONTH
}

/// First day of the month containing `date`.
#[must_use]
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Moves a date forward by whole months.
pub fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate, ScheduleError> {
    date.checked_add_months(Months::new(months))
        .ok_or(ScheduleError::DateOutOfRange)
}

/// Last day of the block of `months` months starting at `block_start`'s month.
pub fn last_of_block(block_start: NaiveDate, months: u32) -> Result<NaiveDate, ScheduleError> {
    add_months(first_of_month(block_start), months)?
        .pred_opt()
        .ok_or(ScheduleError::DateOutOfRange)
}

/// Same month as `date`, with the day replaced.
pub fn on_day(date: NaiveDate, day: u32) -> Result<NaiveDate, ScheduleError> {
    date.with_day(day).ok_or(ScheduleError::DateOutOfRange)
}

/// Day count from `from` to `to`, both ends included.
#[must_use]
pub fn inclusive_days(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days() + 1
}
