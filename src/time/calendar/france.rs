use std::sync::{Arc, LazyLock};

use crate::time::calendar::simplecalendar::{SimpleCalendar, default_weekends};
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

pub const FRANCE: &str = "France";

const FIXED_DATE_HOLIDAYS: [(&str, u32, u32); 8] = [
    ("Jour de l'an", 1, 1),
    ("Fête du Travail", 5, 1),
    ("Victoire 1945", 5, 8),
    ("Fête nationale", 7, 14),
    ("Assomption", 8, 15),
    ("Toussaint", 11, 1),
    ("Armistice 1918", 11, 11),
    ("Noël", 12, 25),
];

const EASTER_RELATED_HOLIDAYS: [(&str, i32); 3] = [
    ("Lundi de Pâques", 1),
    ("Ascension", 39),
    ("Lundi de Pentecôte", 50),
];

/// French national calendar: Saturday and Sunday off, eight fixed-date
/// holidays and three holidays relative to Easter.
///
/// Regional days (Alsace-Moselle, overseas departments) are not included.
pub fn france_calendar() -> SimpleCalendar {
    let mut rules: Vec<Arc<dyn RecurringHoliday>> = Vec::with_capacity(11);
    for (name, month, day) in FIXED_DATE_HOLIDAYS {
        rules.push(Arc::new(FixedDateHoliday::new_unchecked(name, month, day)));
    }
    for (name, shift_days) in EASTER_RELATED_HOLIDAYS {
        rules.push(Arc::new(EasterRelatedHoliday::new(name, shift_days)));
    }
    SimpleCalendar::new(default_weekends(), rules, vec![], vec![])
}

static FRANCE_CALENDAR: LazyLock<SimpleCalendar> = LazyLock::new(france_calendar);

/// Shared immutable instance of [`france_calendar`].
pub fn france() -> &'static SimpleCalendar {
    &FRANCE_CALENDAR
}
