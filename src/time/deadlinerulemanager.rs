use std::sync::Arc;

use serde::Deserialize;

use crate::manager::manager::{IManager, Manager, ManagerBuilder};
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::time::calendar::france::FRANCE;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::deadline::DeadlineRule;
use crate::time::period::Period;

fn default_calendar() -> String {
    FRANCE.to_owned()
}

#[derive(Deserialize)]
struct DeadlineRuleJsonProp {
    name: String,
    #[serde(default = "default_calendar")]
    calendar: String,
    offset: Period,
}

/// Builds deadline rules such as
/// `{ "name": "RevisionRequestResponse", "calendar": "France", "offset": "0D" }`
/// against already-loaded calendars.
pub struct DeadlineRuleLoader;

impl IManager<DeadlineRule, Manager<dyn HolidayCalendar>> for DeadlineRuleLoader {
    fn insert_obj_from_json(
        &self,
        builder: &mut ManagerBuilder<DeadlineRule>,
        json_value: serde_json::Value,
        supports: &Manager<dyn HolidayCalendar>,
    ) -> Result<(), ManagerError> {
        let json_prop: DeadlineRuleJsonProp = parse_json_value(json_value)?;
        let calendar = supports.get(&json_prop.calendar)?;
        builder.insert(json_prop.name, Arc::new(DeadlineRule::new(calendar, json_prop.offset)));
        Ok(())
    }
}
