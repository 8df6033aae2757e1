use chrono::NaiveDate;

use crate::time::dateerror::DateError;

use super::recurringholiday::RecurringHoliday;

/// Any non-leap year; a month/day pair valid here exists in every year.
const REFERENCE_YEAR: i32 = 2001;

#[derive(Debug, Clone)]
pub struct FixedDateHoliday {
    name: String,
    month: u32,
    day: u32,
}

impl FixedDateHoliday {
    /// Rejects pairs that are missing from some years (Feb 29, Apr 31, ...).
    pub fn new(name: impl Into<String>, month: u32, day: u32) -> Result<FixedDateHoliday, DateError> {
        if NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, day).is_none() {
            return Err(DateError::InvalidMonthDay { month, day });
        }
        Ok(FixedDateHoliday {
            name: name.into(),
            month,
            day,
        })
    }

    /// For built-in tables whose pairs are covered by tests.
    pub(crate) fn new_unchecked(name: &str, month: u32, day: u32) -> FixedDateHoliday {
        FixedDateHoliday {
            name: name.to_owned(),
            month,
            day,
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_holiday(&self, year: i32) -> Result<NaiveDate, DateError> {
        NaiveDate::from_ymd_opt(year, self.month, self.day).ok_or(DateError::InvalidYear { year })
    }
}
