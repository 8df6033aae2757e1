use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::manager::manager::{IManager, Manager, ManagerBuilder};
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidaycalendarmanager::HolidayCalendarLoader;
use crate::time::deadline::DeadlineRule;
use crate::time::deadlinerulemanager::DeadlineRuleLoader;

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    holiday_calendar: Vec<serde_json::Value>,
    #[serde(default)]
    deadline: Vec<serde_json::Value>,
}

/// Named calendars and deadline rules. The built-in `France` calendar is
/// always present; a JSON file may add more and define deadline rules.
pub struct Configuration {
    holiday_calendar_manager: Manager<dyn HolidayCalendar>,
    deadline_rule_manager: Manager<DeadlineRule>,
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            holiday_calendar_manager: HolidayCalendarLoader::default_builder().build(),
            deadline_rule_manager: ManagerBuilder::new().build(),
        }
    }

    pub fn holiday_calendar_manager(&self) -> &Manager<dyn HolidayCalendar> {
        &self.holiday_calendar_manager
    }

    pub fn deadline_rule_manager(&self) -> &Manager<DeadlineRule> {
        &self.deadline_rule_manager
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ManagerError> {
        let file_path = file_path.as_ref();
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        info!(path = %file_path.display(), "loading configuration");
        Configuration::from_json_value(json_value)
    }

    /// Calendars load first so deadline rules can refer to them by name.
    pub fn from_json_value(json_value: serde_json::Value) -> Result<Configuration, ManagerError> {
        let json_prop: ConfigurationJsonProp = parse_json_value(json_value)?;

        let mut calendar_builder = HolidayCalendarLoader::default_builder();
        HolidayCalendarLoader.insert_obj_from_json_vec(&mut calendar_builder, &json_prop.holiday_calendar, &())?;
        let holiday_calendar_manager = calendar_builder.build();

        let mut deadline_builder = ManagerBuilder::new();
        DeadlineRuleLoader.insert_obj_from_json_vec(&mut deadline_builder, &json_prop.deadline, &holiday_calendar_manager)?;

        Ok(Configuration {
            holiday_calendar_manager,
            deadline_rule_manager: deadline_builder.build(),
        })
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
