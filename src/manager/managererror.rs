use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::time::dateerror::DateError;
use crate::time::period::ParsePeriodError;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    DateError(#[from] DateError),
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),
    #[error("key '{0}' not found")]
    NameNotFoundError(String),
    #[error(transparent)]
    TenorParseError(#[from] ParsePeriodError),
}

impl ManagerError {
    pub fn map_elem_not_found(name: &str) -> ManagerError {
        ManagerError::NameNotFoundError(name.to_owned())
    }
}

pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, ManagerError>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_value(json_value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_not_found_message() {
        assert_eq!(ManagerError::map_elem_not_found("Belgique").to_string(), "key 'Belgique' not found");
    }

    #[test]
    fn wraps_date_errors_transparently() {
        let error: ManagerError = DateError::InvalidMonthDay { month: 2, day: 30 }.into();
        assert_eq!(
            error.to_string(),
            "invalid holiday date: month 2, day 30 does not occur every year"
        );
    }

    #[test]
    fn parse_json_value_reports_type_errors() {
        let result: Result<u32, ManagerError> = parse_json_value(serde_json::json!("text"));
        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
    }
}
