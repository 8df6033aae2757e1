//! French business days, as used for regulatory response deadlines.
//!
//! All functions read the shared national calendar from
//! [`france`](crate::time::calendar::france::france) and are pure: the same
//! input always gives the same output, from any thread.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};

use crate::time::calendar::france::france;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::dateerror::DateError;
use crate::time::utility::{to_iso_date_string, utc_calendar_date, utc_midnight};

pub use crate::time::easter::compute_easter_sunday;

/// French national public holidays of `year` as `YYYY-MM-DD` strings.
///
/// Compare the result as a set. When two holidays share a date (Ascension on
/// May 1 in 2008) the set holds ten strings instead of eleven.
pub fn get_public_holidays(year: i32) -> Result<HashSet<String>, DateError> {
    Ok(france()
        .get_public_holidays(year)?
        .into_iter()
        .map(to_iso_date_string)
        .collect())
}

pub fn is_workday(date: NaiveDate) -> Result<bool, DateError> {
    france().is_business_day(date)
}

/// The first date strictly after `date` that is neither a Saturday, a Sunday
/// nor a French public holiday of its own year.
///
/// ```
/// use chrono::NaiveDate;
/// use trackdechets_dates::time::workday::next_workday;
///
/// // Sunday before Whit Monday 2025.
/// let sunday = NaiveDate::from_ymd_opt(2025, 6, 8).unwrap();
/// assert_eq!(next_workday(sunday).unwrap(), NaiveDate::from_ymd_opt(2025, 6, 10).unwrap());
/// ```
pub fn next_workday(date: NaiveDate) -> Result<NaiveDate, DateError> {
    france().next_business_day(date)
}

/// [`next_workday`] of the instant's UTC date, returned at midnight UTC.
pub fn next_workday_utc(instant: DateTime<Utc>) -> Result<DateTime<Utc>, DateError> {
    next_workday(utc_calendar_date(&instant)).map(utc_midnight)
}
