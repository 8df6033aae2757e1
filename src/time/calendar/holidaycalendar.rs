use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use tracing::trace;

use crate::time::dateerror::DateError;

/// A working-day calendar: weekends plus dated public holidays.
///
/// Holiday sets are keyed by calendar year. Every membership test derives
/// the set from the tested date's own year, so walks that cross December 31
/// see the holidays of the year they land in.
///
/// # Notes
/// - `Send + Sync` supertrait: calendars are shared as `Arc<dyn HolidayCalendar>`
///   between registries, deadline rules and threads.
/// - Every query returns `Result`, since a rule relative to Easter has no date
///   outside the Gregorian years it is computed for.
/// - `is_forced_business_day` is checked before weekends and holidays.
pub trait HolidayCalendar: Send + Sync {
    fn is_weekend(&self, d: NaiveDate) -> bool;

    /// Public holidays of `year`, weekends excluded.
    fn get_public_holidays(&self, year: i32) -> Result<HashSet<NaiveDate>, DateError>;

    /// Dates worked even though they fall on a weekend or a holiday.
    fn is_forced_business_day(&self, _d: NaiveDate) -> bool {
        false
    }

    fn is_public_holiday(&self, d: NaiveDate) -> Result<bool, DateError> {
        Ok(self.get_public_holidays(d.year())?.contains(&d))
    }

    fn is_holiday(&self, d: NaiveDate) -> Result<bool, DateError> {
        if self.is_forced_business_day(d) {
            return Ok(false);
        }
        Ok(self.is_weekend(d) || self.is_public_holiday(d)?)
    }

    fn is_business_day(&self, d: NaiveDate) -> Result<bool, DateError> {
        Ok(!self.is_holiday(d)?)
    }

    /// Moves `n` business days forward (or backward when `n < 0`).
    /// `n == 0` returns `horizon` unchanged, business day or not.
    fn shift_n_business_day(&self, horizon: NaiveDate, n: i32) -> Result<NaiveDate, DateError> {
        let shift_one_day: fn(&NaiveDate) -> Option<NaiveDate> = if n >= 0 {
            NaiveDate::succ_opt
        } else {
            NaiveDate::pred_opt
        };

        let mut m = n.unsigned_abs();
        let mut d = horizon;
        while m > 0 {
            d = shift_one_day(&d).ok_or(DateError::DateOutOfRange { date: d })?;
            if self.is_business_day(d)? {
                m -= 1;
            } else {
                trace!(date = %d, "skipping non-business day");
            }
        }
        Ok(d)
    }

    /// First business day strictly after `d`.
    fn next_business_day(&self, d: NaiveDate) -> Result<NaiveDate, DateError> {
        self.shift_n_business_day(d, 1)
    }

    /// Last business day strictly before `d`.
    fn previous_business_day(&self, d: NaiveDate) -> Result<NaiveDate, DateError> {
        self.shift_n_business_day(d, -1)
    }
}
