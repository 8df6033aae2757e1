use chrono::NaiveDate;

use crate::time::dateerror::DateError;
use crate::time::easter::compute_easter_sunday;
use crate::time::period::Period;

use super::recurringholiday::RecurringHoliday;

/// Easter Sunday shifted by a whole number of days (Easter Monday is `+1`).
#[derive(Debug, Clone)]
pub struct EasterRelatedHoliday {
    name: String,
    shift_period: Period,
}

impl EasterRelatedHoliday {
    pub fn new(name: impl Into<String>, shift_days: i32) -> EasterRelatedHoliday {
        EasterRelatedHoliday {
            name: name.into(),
            shift_period: Period::days(shift_days),
        }
    }

    pub fn shift_period(&self) -> Period {
        self.shift_period
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_holiday(&self, year: i32) -> Result<NaiveDate, DateError> {
        let easter_day = compute_easter_sunday(year)?;
        self.shift_period
            .checked_shift(easter_day)
            .ok_or(DateError::DateOutOfRange { date: easter_day })
    }
}
