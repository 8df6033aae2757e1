use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TimeUnit {
    Days,
    Weeks,
    Months,
    Years,
}

impl TimeUnit {
    pub fn to_char(&self) -> char {
        match self {
            TimeUnit::Days => 'D',
            TimeUnit::Weeks => 'W',
            TimeUnit::Months => 'M',
            TimeUnit::Years => 'Y',
        }
    }

    fn from_char(c: char) -> Option<TimeUnit> {
        match c.to_ascii_uppercase() {
            'D' => Some(TimeUnit::Days),
            'W' => Some(TimeUnit::Weeks),
            'M' => Some(TimeUnit::Months),
            'Y' => Some(TimeUnit::Years),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ParsePeriodError {
    #[error("empty period string")]
    Empty,
    #[error("unknown time unit '{0}' found")]
    UnknownTimeUnit(char),
    #[error(transparent)]
    Parse(#[from] ParseIntError),
}

/// A signed span such as `1D`, `2W`, `3M` or `-1Y`.
///
/// Month and year shifts clamp to the last day of the target month, so
/// `2025-01-31 + 1M` is `2025-02-28`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    number: i32,
    unit: TimeUnit,
}

impl Period {
    pub fn new(number: i32, unit: TimeUnit) -> Period {
        Period { number, unit }
    }

    pub fn days(number: i32) -> Period {
        Period::new(number, TimeUnit::Days)
    }

    pub fn weeks(number: i32) -> Period {
        Period::new(number, TimeUnit::Weeks)
    }

    pub fn months(number: i32) -> Period {
        Period::new(number, TimeUnit::Months)
    }

    pub fn years(number: i32) -> Period {
        Period::new(number, TimeUnit::Years)
    }

    pub fn parse(period_str: &str) -> Result<Period, ParsePeriodError> {
        let trimmed = period_str.trim();
        let unit_chr = trimmed.chars().last().ok_or(ParsePeriodError::Empty)?;
        let unit = TimeUnit::from_char(unit_chr).ok_or(ParsePeriodError::UnknownTimeUnit(unit_chr))?;
        let number = trimmed[..trimmed.len() - unit_chr.len_utf8()].parse::<i32>()?;
        Ok(Period::new(number, unit))
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Shifts `d` by this period. `None` when the result is not representable.
    pub fn checked_shift(&self, d: NaiveDate) -> Option<NaiveDate> {
        match self.unit {
            TimeUnit::Days => d.checked_add_signed(Duration::try_days(self.number as i64)?),
            TimeUnit::Weeks => d.checked_add_signed(Duration::try_weeks(self.number as i64)?),
            TimeUnit::Months => shift_months(d, self.number),
            TimeUnit::Years => shift_months(d, self.number.checked_mul(12)?),
        }
    }
}

fn shift_months(d: NaiveDate, number: i32) -> Option<NaiveDate> {
    let months = Months::new(number.unsigned_abs());
    if number >= 0 {
        d.checked_add_months(months)
    } else {
        d.checked_sub_months(months)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.number, self.unit.to_char())
    }
}

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::parse(s)
    }
}

impl TryFrom<String> for Period {
    type Error = ParsePeriodError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Period::parse(&value)
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_every_unit() {
        assert_eq!(Period::parse("1D"), Ok(Period::days(1)));
        assert_eq!(Period::parse("2W"), Ok(Period::weeks(2)));
        assert_eq!(Period::parse("3m"), Ok(Period::months(3)));
        assert_eq!(Period::parse("-1Y"), Ok(Period::years(-1)));
    }

    #[test]
    fn rejects_malformed_strings() {
        assert_eq!(Period::parse(""), Err(ParsePeriodError::Empty));
        assert_eq!(Period::parse("5X"), Err(ParsePeriodError::UnknownTimeUnit('X')));
        assert!(matches!(Period::parse("D"), Err(ParsePeriodError::Parse(_))));
        assert!(matches!(Period::parse("é"), Err(ParsePeriodError::UnknownTimeUnit('é'))));
    }

    #[test]
    fn display_matches_parse_input() {
        assert_eq!(Period::weeks(2).to_string(), "2W");
        assert_eq!("10D".parse::<Period>().unwrap().to_string(), "10D");
    }

    #[test]
    fn day_shift_rolls_over_month_and_year() {
        assert_eq!(Period::days(1).checked_shift(date(2025, 12, 31)), Some(date(2026, 1, 1)));
        assert_eq!(Period::days(39).checked_shift(date(2025, 4, 20)), Some(date(2025, 5, 29)));
        assert_eq!(Period::weeks(-1).checked_shift(date(2025, 3, 3)), Some(date(2025, 2, 24)));
    }

    #[test]
    fn month_shift_clamps_to_end_of_month() {
        assert_eq!(Period::months(1).checked_shift(date(2025, 1, 31)), Some(date(2025, 2, 28)));
        assert_eq!(Period::years(1).checked_shift(date(2024, 2, 29)), Some(date(2025, 2, 28)));
        assert_eq!(Period::months(-2).checked_shift(date(2025, 3, 15)), Some(date(2025, 1, 15)));
    }

    #[test]
    fn overflow_yields_none() {
        assert_eq!(Period::days(1).checked_shift(NaiveDate::MAX), None);
        assert_eq!(Period::years(i32::MAX).checked_shift(date(2025, 1, 1)), None);
    }

    #[test]
    fn serde_uses_string_form() {
        let period: Period = serde_json::from_str("\"1D\"").unwrap();
        assert_eq!(period, Period::days(1));
        assert_eq!(serde_json::to_string(&Period::months(3)).unwrap(), "\"3M\"");
        assert!(serde_json::from_str::<Period>("\"1Q\"").is_err());
    }
}
