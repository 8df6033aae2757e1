use chrono::NaiveDate;

use crate::time::dateerror::DateError;

/// First year of the Gregorian reform for which the computus holds.
pub const MIN_EASTER_YEAR: i32 = 1583;
/// Last year whose dates still print as four-digit ISO years.
pub const MAX_EASTER_YEAR: i32 = 9999;

/// Gregorian Easter Sunday of `year` (anonymous Gregorian algorithm,
/// Meeus/Jones/Butcher).
///
/// Every intermediate value is non-negative inside the accepted range, so
/// integer `/` and `%` match the floor semantics of the published formula.
pub fn compute_easter_sunday(year: i32) -> Result<NaiveDate, DateError> {
    if !(MIN_EASTER_YEAR..=MAX_EASTER_YEAR).contains(&year) {
        return Err(DateError::InvalidYear { year });
    }

    let a = year % 19;
    let b = year / 100;
    let b_div_4 = b / 4;
    let c = (b - b_div_4 - (8 * b + 13) / 25 + 19 * a + 15) % 30;
    let c_div_28 = c / 28;
    let d = c - c_div_28 * (1 - c_div_28 * (29 / (c + 1)) * ((21 - a) / 11));
    let e = (year + year / 4 + d + 2 - b + b_div_4) % 7;
    let f = d - e;
    let month = 3 + (f + 40) / 44;
    let day = f + 28 - 31 * (month / 4);

    NaiveDate::from_ymd_opt(year, month as u32, day as u32).ok_or(DateError::InvalidYear { year })
}
