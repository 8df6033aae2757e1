use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::dateerror::DateError;

/// Memoizes the public-holiday set of each year a wrapped calendar is asked
/// about. Results are identical to the wrapped calendar's.
///
/// Two threads missing the same year at once may both compute it; the sets
/// are equal, so the second insert is a no-op in effect.
pub struct CachedCalendar<C> {
    raw_calendar: C,
    cache: RwLock<HashMap<i32, Arc<HashSet<NaiveDate>>>>,
}

impl<C: HolidayCalendar> CachedCalendar<C> {
    pub fn new(raw_calendar: C) -> CachedCalendar<C> {
        CachedCalendar {
            raw_calendar,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn raw_calendar(&self) -> &C {
        &self.raw_calendar
    }

    /// Number of years memoized so far.
    pub fn cached_years(&self) -> usize {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn holidays_of(&self, year: i32) -> Result<Arc<HashSet<NaiveDate>>, DateError> {
        if let Some(set) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&year)
        {
            return Ok(Arc::clone(set));
        }

        let set = Arc::new(self.raw_calendar.get_public_holidays(year)?);
        debug!(year, holidays = set.len(), "cached public holidays");
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(year, Arc::clone(&set));
        Ok(set)
    }
}

impl<C: HolidayCalendar> HolidayCalendar for CachedCalendar<C> {
    #[inline]
    fn is_weekend(&self, d: NaiveDate) -> bool {
        self.raw_calendar.is_weekend(d)
    }

    fn get_public_holidays(&self, year: i32) -> Result<HashSet<NaiveDate>, DateError> {
        Ok(self.holidays_of(year)?.as_ref().clone())
    }

    #[inline]
    fn is_forced_business_day(&self, d: NaiveDate) -> bool {
        self.raw_calendar.is_forced_business_day(d)
    }

    fn is_public_holiday(&self, d: NaiveDate) -> Result<bool, DateError> {
        Ok(self.holidays_of(d.year())?.contains(&d))
    }
}
