use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;
use trackdechets_dates::time::calendar::france::france;
use trackdechets_dates::time::calendar::holidaycalendar::HolidayCalendar;
use trackdechets_dates::time::easter::compute_easter_sunday;
use trackdechets_dates::time::workday::{get_public_holidays, next_workday};

fn from_1950(days: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(1950, 1, 1).unwrap() + Duration::days(days)
}

fn is_weekend(d: NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

proptest! {
    /// The next workday is strictly later, never a weekend and never a holiday.
    #[test]
    fn next_workday_is_a_workday(days in 0i64..36500) {
        let d = from_1950(days);
        let next = next_workday(d).unwrap();

        prop_assert!(next > d);
        prop_assert!(!is_weekend(next), "{next} is a weekend day");
        let holidays = get_public_holidays(next.year()).unwrap();
        prop_assert!(!holidays.contains(&next.format("%Y-%m-%d").to_string()));
    }

    /// Every date skipped over is a non-working day.
    #[test]
    fn skipped_days_are_not_workdays(days in 0i64..36500) {
        let d = from_1950(days);
        let next = next_workday(d).unwrap();
        let mut skipped = d.succ_opt().unwrap();
        while skipped < next {
            prop_assert!(france().is_holiday(skipped).unwrap(), "{skipped} was skipped");
            skipped = skipped.succ_opt().unwrap();
        }
    }

    #[test]
    fn next_workday_is_strictly_increasing(days in 0i64..36500) {
        let next = next_workday(from_1950(days)).unwrap();
        prop_assert!(next_workday(next).unwrap() > next);
    }

    /// Holidays stay in their year; only Ascension landing on May 1 or
    /// May 8 makes the set smaller than eleven.
    #[test]
    fn holiday_set_shape(year in 1583i32..=9999) {
        let holidays = france().get_public_holidays(year).unwrap();
        prop_assert!(holidays.iter().all(|d| d.year() == year));

        let ascension = compute_easter_sunday(year).unwrap() + Duration::days(39);
        let collides = ascension == NaiveDate::from_ymd_opt(year, 5, 1).unwrap()
            || ascension == NaiveDate::from_ymd_opt(year, 5, 8).unwrap();
        prop_assert_eq!(holidays.len(), if collides { 10 } else { 11 });
    }

    #[test]
    fn easter_is_a_spring_sunday(year in 1583i32..=9999) {
        let easter = compute_easter_sunday(year).unwrap();
        prop_assert_eq!(easter.weekday(), Weekday::Sun);
        prop_assert!(easter >= NaiveDate::from_ymd_opt(year, 3, 22).unwrap());
        prop_assert!(easter <= NaiveDate::from_ymd_opt(year, 4, 25).unwrap());
    }
}
