use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::dateerror::DateError;
use crate::time::period::Period;
use crate::time::utility::{utc_calendar_date, utc_midnight};

/// Response deadline: the next business day after the start date, then a
/// fixed calendar offset.
///
/// With a `0D` offset the deadline is the next business day itself, which is
/// the "one business day to respond" rule.
#[derive(Clone)]
pub struct DeadlineRule {
    calendar: Arc<dyn HolidayCalendar>,
    offset: Period,
}

impl DeadlineRule {
    pub fn new(calendar: Arc<dyn HolidayCalendar>, offset: Period) -> DeadlineRule {
        DeadlineRule { calendar, offset }
    }

    pub fn offset(&self) -> Period {
        self.offset
    }

    pub fn calendar(&self) -> &Arc<dyn HolidayCalendar> {
        &self.calendar
    }

    pub fn deadline_from_date(&self, start: NaiveDate) -> Result<NaiveDate, DateError> {
        let first_business_day = self.calendar.next_business_day(start)?;
        self.offset
            .checked_shift(first_business_day)
            .ok_or(DateError::DateOutOfRange { date: first_business_day })
    }

    /// Deadline for a request made at `now`, at midnight UTC.
    pub fn deadline_from(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>, DateError> {
        self.deadline_from_date(utc_calendar_date(&now)).map(utc_midnight)
    }
}
