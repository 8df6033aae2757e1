use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::dateerror::DateError;
use crate::time::recurringholiday::recurringholiday::{PublicHoliday, RecurringHoliday};

/// Weekend days as a bitmask: Mon(0), Tue(1), ..., Sun(6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WeekendMask(u8);

impl WeekendMask {
    fn new(weekends: &HashSet<Weekday>) -> Self {
        let mut mask = 0u8;
        for &weekday in weekends {
            mask |= 1u8 << weekday.num_days_from_monday();
        }
        WeekendMask(mask)
    }

    #[inline]
    fn is_weekend(&self, weekday: Weekday) -> bool {
        let bit = 1u8 << weekday.num_days_from_monday();
        (self.0 & bit) != 0
    }

    fn to_hashset(self) -> HashSet<Weekday> {
        (0..7u8)
            .filter(|day| (self.0 & (1u8 << day)) != 0)
            .filter_map(|day| Weekday::try_from(day).ok())
            .collect()
    }
}

pub fn default_weekends() -> HashSet<Weekday> {
    HashSet::from([Weekday::Sat, Weekday::Sun])
}

/// Rule-based calendar: a weekend mask, recurring holiday rules, and
/// one-off overrides in both directions.
///
/// Additional business days win over everything else, so an exceptional
/// working Saturday or a worked public holiday can be declared.
///
/// # Notes
/// - Weekends are stored as a `WeekendMask` bitmask; `weekends()` rebuilds the set.
/// - Overrides are plain date sets. `get_public_holidays` only adds those of the
///   requested year, then removes that year's additional business days.
/// - Rule order is kept so `named_holidays` lists holidays as declared.
pub struct SimpleCalendar {
    weekends: WeekendMask,
    recurring_holidays: Vec<Arc<dyn RecurringHoliday>>,
    additional_holidays: HashSet<NaiveDate>,
    additional_business_days: HashSet<NaiveDate>,
}

impl SimpleCalendar {
    pub fn new(
        weekends: HashSet<Weekday>,
        recurring_holidays: Vec<Arc<dyn RecurringHoliday>>,
        additional_holidays: Vec<NaiveDate>,
        additional_business_days: Vec<NaiveDate>,
    ) -> SimpleCalendar {
        SimpleCalendar {
            weekends: WeekendMask::new(&weekends),
            recurring_holidays,
            additional_holidays: additional_holidays.into_iter().collect(),
            additional_business_days: additional_business_days.into_iter().collect(),
        }
    }

    pub fn with_additional_holidays(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> SimpleCalendar {
        self.additional_holidays.extend(dates);
        self
    }

    pub fn with_additional_business_days(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> SimpleCalendar {
        self.additional_business_days.extend(dates);
        self
    }

    pub fn weekends(&self) -> HashSet<Weekday> {
        self.weekends.to_hashset()
    }

    pub fn recurring_holidays(&self) -> &[Arc<dyn RecurringHoliday>] {
        &self.recurring_holidays
    }

    #[inline]
    pub fn is_additional_holiday(&self, d: NaiveDate) -> bool {
        self.additional_holidays.contains(&d)
    }

    #[inline]
    pub fn is_additional_business_day(&self, d: NaiveDate) -> bool {
        self.additional_business_days.contains(&d)
    }

    /// Occurrences of the recurring rules in `year`, in rule order.
    ///
    /// Unlike [`HolidayCalendar::get_public_holidays`] this keeps one entry
    /// per rule even when two rules land on the same date.
    pub fn named_holidays(&self, year: i32) -> Result<Vec<PublicHoliday>, DateError> {
        self.recurring_holidays
            .iter()
            .map(|rule| rule.occurrence(year))
            .collect()
    }
}

impl HolidayCalendar for SimpleCalendar {
    #[inline]
    fn is_weekend(&self, d: NaiveDate) -> bool {
        self.weekends.is_weekend(d.weekday())
    }

    fn get_public_holidays(&self, year: i32) -> Result<HashSet<NaiveDate>, DateError> {
        let mut holiday_set = HashSet::with_capacity(self.recurring_holidays.len());

        for rule in self.recurring_holidays.iter() {
            holiday_set.insert(rule.get_holiday(year)?);
        }

        holiday_set.extend(
            self.additional_holidays
                .iter()
                .filter(|d| d.year() == year)
                .copied(),
        );

        for b_day in self.additional_business_days.iter().filter(|d| d.year() == year) {
            holiday_set.remove(b_day);
        }

        Ok(holiday_set)
    }

    #[inline]
    fn is_forced_business_day(&self, d: NaiveDate) -> bool {
        self.is_additional_business_day(d)
    }
}
