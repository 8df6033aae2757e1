use std::collections::HashSet;
use std::sync::Arc;

use chrono::{NaiveDate, Weekday};
use serde::Deserialize;

use crate::manager::manager::{IManager, ManagerBuilder};
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::manager::namedobject::NamedJsonObject;
use crate::time::calendar::cachedcalendar::CachedCalendar;
use crate::time::calendar::france::{FRANCE, france_calendar};
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::simplecalendar::{SimpleCalendar, default_weekends};
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

#[derive(Deserialize)]
struct EasterRelatedHolidayJsonProp {
    name: String,
    shift_days: i32,
}

fn easter_related_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: EasterRelatedHolidayJsonProp = parse_json_value(json)?;
    Ok(Arc::new(EasterRelatedHoliday::new(json_prop.name, json_prop.shift_days)))
}

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    name: String,
    month: u32,
    day: u32,
}

fn fixed_date_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: FixedDateHolidayJsonProp = parse_json_value(json)?;
    let holiday = FixedDateHoliday::new(json_prop.name, json_prop.month, json_prop.day)?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
enum HolidayType {
    EasterRelated,
    FixedDate,
}

#[derive(Deserialize)]
struct HolidayTypedObject {
    holiday_type: HolidayType,
}

fn get_recurring_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let holiday_type_obj: HolidayTypedObject = parse_json_value(json.clone())?;
    match holiday_type_obj.holiday_type {
        HolidayType::EasterRelated => easter_related_holiday_from_json(json),
        HolidayType::FixedDate => fixed_date_holiday_from_json(json),
    }
}

#[derive(Deserialize)]
enum CalendarType {
    France,
    SimpleCalendar,
}

#[derive(Deserialize)]
struct CalendarTypedObject {
    calendar_type: CalendarType,
}

/// Overrides accepted by both calendar types.
#[derive(Deserialize)]
struct CalendarOverridesJsonProp {
    #[serde(default)]
    additional_holidays: Vec<NaiveDate>,
    #[serde(default)]
    additional_business_days: Vec<NaiveDate>,
    #[serde(default)]
    cache: bool,
}

#[derive(Deserialize)]
struct SimpleCalendarJsonProp {
    #[serde(default = "default_weekends")]
    weekends: HashSet<Weekday>,
    #[serde(default)]
    recurring_holidays: Vec<serde_json::Value>,
}

fn get_simple_calendar_from_json(json_value: serde_json::Value) -> Result<SimpleCalendar, ManagerError> {
    let calendar_json: SimpleCalendarJsonProp = parse_json_value(json_value)?;
    let recurring_holidays = calendar_json
        .recurring_holidays
        .into_iter()
        .map(get_recurring_holiday_from_json)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SimpleCalendar::new(calendar_json.weekends, recurring_holidays, vec![], vec![]))
}

/// Builds named calendars from JSON entries such as
///
/// ```json
/// { "name": "FranceWithClosures", "calendar_type": "France",
///   "additional_holidays": ["2025-12-26"], "cache": true }
/// ```
///
/// `SimpleCalendar` entries spell out `weekends` and `recurring_holidays`
/// (each with a `holiday_type` of `FixedDate` or `EasterRelated`).
pub struct HolidayCalendarLoader;

impl HolidayCalendarLoader {
    /// A builder holding the built-in French calendar under [`FRANCE`].
    pub fn default_builder() -> ManagerBuilder<dyn HolidayCalendar> {
        let mut builder: ManagerBuilder<dyn HolidayCalendar> = ManagerBuilder::new();
        builder.insert(FRANCE.to_owned(), Arc::new(france_calendar()));
        builder
    }
}

impl IManager<dyn HolidayCalendar, ()> for HolidayCalendarLoader {
    fn insert_obj_from_json(
        &self,
        builder: &mut ManagerBuilder<dyn HolidayCalendar>,
        json_value: serde_json::Value,
        _supports: &(),
    ) -> Result<(), ManagerError> {
        let named_obj: NamedJsonObject = parse_json_value(json_value.clone())?;
        let calendar_typed_object: CalendarTypedObject = parse_json_value(json_value.clone())?;
        let overrides: CalendarOverridesJsonProp = parse_json_value(json_value.clone())?;

        let calendar = match calendar_typed_object.calendar_type {
            CalendarType::France => france_calendar(),
            CalendarType::SimpleCalendar => get_simple_calendar_from_json(json_value)?,
        }
        .with_additional_holidays(overrides.additional_holidays)
        .with_additional_business_days(overrides.additional_business_days);

        let calendar: Arc<dyn HolidayCalendar> = if overrides.cache {
            Arc::new(CachedCalendar::new(calendar))
        } else {
            Arc::new(calendar)
        };
        builder.insert(named_obj.name().to_owned(), calendar);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_builder_has_france() {
        let builder = HolidayCalendarLoader::default_builder();
        let france = builder.get(FRANCE).unwrap();
        assert_eq!(france.is_holiday(date(2025, 7, 14)), Ok(true));
    }

    #[test]
    fn france_with_overrides() {
        let mut builder = HolidayCalendarLoader::default_builder();
        let entry = json!({
            "name": "FranceWithClosures",
            "calendar_type": "France",
            "additional_holidays": ["2025-12-26"],
            "additional_business_days": ["2025-06-09"],
            "cache": true
        });
        HolidayCalendarLoader.insert_obj_from_json(&mut builder, entry, &()).unwrap();

        let calendar = builder.get("FranceWithClosures").unwrap();
        assert_eq!(calendar.is_holiday(date(2025, 12, 26)), Ok(true));
        // Whit Monday worked ("journée de solidarité").
        assert_eq!(calendar.next_business_day(date(2025, 6, 8)), Ok(date(2025, 6, 9)));
    }

    #[test]
    fn simple_calendar_from_rules() {
        let mut builder: ManagerBuilder<dyn HolidayCalendar> = ManagerBuilder::new();
        let entries = vec![json!({
            "name": "Minimal",
            "calendar_type": "SimpleCalendar",
            "weekends": ["Sun"],
            "recurring_holidays": [
                { "holiday_type": "FixedDate", "name": "Noël", "month": 12, "day": 25 },
                { "holiday_type": "EasterRelated", "name": "Lundi de Pâques", "shift_days": 1 }
            ]
        })];
        HolidayCalendarLoader
            .insert_obj_from_json_vec(&mut builder, &entries, &())
            .unwrap();

        let calendar = builder.get("Minimal").unwrap();
        // Saturday 2025-04-19 is worked in this calendar.
        assert_eq!(calendar.next_business_day(date(2025, 4, 18)), Ok(date(2025, 4, 19)));
        assert_eq!(calendar.next_business_day(date(2025, 4, 19)), Ok(date(2025, 4, 22)));
        assert_eq!(
            calendar.get_public_holidays(2025),
            Ok(HashSet::from([date(2025, 12, 25), date(2025, 4, 21)]))
        );
    }

    #[test]
    fn invalid_fixed_date_is_rejected() {
        let mut builder: ManagerBuilder<dyn HolidayCalendar> = ManagerBuilder::new();
        let entry = json!({
            "name": "Broken",
            "calendar_type": "SimpleCalendar",
            "recurring_holidays": [
                { "holiday_type": "FixedDate", "name": "Leap", "month": 2, "day": 29 }
            ]
        });
        let result = HolidayCalendarLoader.insert_obj_from_json(&mut builder, entry, &());
        assert!(matches!(
            result,
            Err(ManagerError::DateError(crate::time::dateerror::DateError::InvalidMonthDay { month: 2, day: 29 }))
        ));
        assert!(builder.get("Broken").is_err());
    }

    #[test]
    fn unknown_types_are_rejected() {
        let mut builder: ManagerBuilder<dyn HolidayCalendar> = ManagerBuilder::new();
        let entry = json!({ "name": "Joint", "calendar_type": "JointCalendar" });
        assert!(matches!(
            HolidayCalendarLoader.insert_obj_from_json(&mut builder, entry, &()),
            Err(ManagerError::JsonParseError(_))
        ));
    }

    #[test]
    fn loads_calendar_array_from_file() {
        let path = std::env::temp_dir().join(format!("trackdechets-calendars-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[{ "name": "Closures", "calendar_type": "France", "additional_holidays": ["2026-05-15"] }]"#,
        )
        .unwrap();

        let mut builder = HolidayCalendarLoader::default_builder();
        let result = HolidayCalendarLoader.from_reader(&mut builder, &path, &());
        std::fs::remove_file(&path).unwrap();
        result.unwrap();

        let manager = builder.build();
        assert_eq!(manager.names(), vec!["Closures", FRANCE]);
        // Ascension bridge: Thursday May 14 and Friday May 15, 2026.
        let calendar = manager.get("Closures").unwrap();
        assert_eq!(calendar.next_business_day(date(2026, 5, 13)), Ok(date(2026, 5, 18)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let mut builder: ManagerBuilder<dyn HolidayCalendar> = ManagerBuilder::new();
        let result = HolidayCalendarLoader.from_reader(&mut builder, "/nonexistent/calendars.json", &());
        assert!(matches!(result, Err(ManagerError::IOError(_))));
    }
}
