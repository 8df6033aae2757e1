use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::time::dateerror::DateError;

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// `YYYY-MM-DD`, the date portion of an ISO-8601 UTC timestamp.
pub fn to_iso_date_string(d: NaiveDate) -> String {
    d.format(ISO_DATE_FORMAT).to_string()
}

pub fn parse_iso_date(value: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT).map_err(|_| {
        DateError::InvalidDateString {
            value: value.to_owned(),
        }
    })
}

/// Calendar date of an instant, read in UTC. The time of day is dropped.
#[inline]
pub fn utc_calendar_date(instant: &DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

#[inline]
pub fn utc_midnight(d: NaiveDate) -> DateTime<Utc> {
    d.and_time(NaiveTime::MIN).and_utc()
}
