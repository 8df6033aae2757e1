use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::time::dateerror::DateError;

/// A holiday rule that yields one date per calendar year.
pub trait RecurringHoliday: Send + Sync {
    fn name(&self) -> &str;

    fn get_holiday(&self, year: i32) -> Result<NaiveDate, DateError>;

    fn is_holiday(&self, d: &NaiveDate) -> Result<bool, DateError> {
        Ok(self.get_holiday(d.year())? == *d)
    }

    fn occurrence(&self, year: i32) -> Result<PublicHoliday, DateError> {
        Ok(PublicHoliday {
            name: self.name().to_owned(),
            date: self.get_holiday(year)?,
        })
    }
}

/// One dated occurrence of a named holiday.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicHoliday {
    pub name: String,
    pub date: NaiveDate,
}
