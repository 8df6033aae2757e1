use chrono::NaiveDate;
use thiserror::Error;

/// Failures of the holiday and workday computations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("invalid year {year}: Easter is only computed for Gregorian years 1583 to 9999")]
    InvalidYear { year: i32 },

    #[error("invalid holiday date: month {month}, day {day} does not occur every year")]
    InvalidMonthDay { month: u32, day: u32 },

    #[error("date arithmetic from {date} leaves the representable range")]
    DateOutOfRange { date: NaiveDate },

    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDateString { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_year_mentions_year() {
        let error = DateError::InvalidYear { year: 1500 };
        assert!(error.to_string().starts_with("invalid year 1500"));
    }

    #[test]
    fn date_out_of_range_displays_date() {
        let error = DateError::DateOutOfRange {
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "date arithmetic from 2025-01-01 leaves the representable range"
        );
    }
}
