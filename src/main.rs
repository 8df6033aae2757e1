mod telemetry;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use tracing::debug;

use trackdechets_dates::configuration::Configuration;
use trackdechets_dates::manager::managererror::ManagerError;
use trackdechets_dates::time::calendar::france::{FRANCE, france};
use trackdechets_dates::time::deadline::DeadlineRule;
use trackdechets_dates::time::easter::compute_easter_sunday;
use trackdechets_dates::time::period::Period;
use trackdechets_dates::time::recurringholiday::recurringholiday::PublicHoliday;
use trackdechets_dates::time::utility::{parse_iso_date, to_iso_date_string, utc_calendar_date};

#[derive(Debug, Parser)]
#[command(name = "trackdechets-dates", about = "French public holidays and business-day deadlines")]
struct Cli {
    /// JSON file declaring extra calendars and deadline rules.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Calendar used by `next-workday` and `deadline --offset`.
    #[arg(long, global = true, default_value = FRANCE)]
    calendar: String,

    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Easter Sunday of a year.
    Easter { year: i32 },
    /// French national public holidays of a year.
    Holidays {
        year: i32,
        #[arg(long)]
        json: bool,
    },
    /// First workday strictly after a date.
    NextWorkday {
        #[arg(value_parser = parse_iso_date)]
        date: NaiveDate,
    },
    /// Response deadline for a request made on a date.
    Deadline {
        /// Defaults to today (UTC).
        #[arg(long, value_parser = parse_iso_date)]
        from: Option<NaiveDate>,
        /// Named rule from the configuration file.
        #[arg(long, conflicts_with = "offset", required_unless_present = "offset")]
        rule: Option<String>,
        /// Offset added after the next workday, e.g. `0D`, `2W`, `1M`.
        #[arg(long)]
        offset: Option<Period>,
    },
}

fn load_configuration(cli: &Cli) -> Result<Configuration, ManagerError> {
    match &cli.config {
        Some(path) => Configuration::from_reader(path),
        None => Ok(Configuration::new()),
    }
}

fn format_holidays(holidays: &[PublicHoliday], json: bool) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string_pretty(holidays);
    }
    Ok(holidays
        .iter()
        .map(|holiday| format!("{} {}", to_iso_date_string(holiday.date), holiday.name))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Runs one command and returns what it prints on stdout.
fn execute(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    let output = match &cli.command {
        Command::Easter { year } => to_iso_date_string(compute_easter_sunday(*year)?),
        Command::Holidays { year, json } => format_holidays(&france().named_holidays(*year)?, *json)?,
        Command::NextWorkday { date } => {
            let configuration = load_configuration(cli)?;
            let calendar = configuration.holiday_calendar_manager().get(&cli.calendar)?;
            to_iso_date_string(calendar.next_business_day(*date)?)
        }
        Command::Deadline { from, rule, offset } => {
            let configuration = load_configuration(cli)?;
            let deadline_rule = match (rule, offset) {
                (Some(name), _) => configuration.deadline_rule_manager().get(name)?,
                (None, Some(offset)) => {
                    let calendar = configuration.holiday_calendar_manager().get(&cli.calendar)?;
                    Arc::new(DeadlineRule::new(calendar, *offset))
                }
                (None, None) => return Err("either --rule or --offset is required".into()),
            };
            let start = from.unwrap_or_else(|| utc_calendar_date(&Utc::now()));
            debug!(start = %start, offset = %deadline_rule.offset(), "computing deadline");
            to_iso_date_string(deadline_rule.deadline_from_date(start)?)
        }
    };
    Ok(output)
}

fn finish(result: Result<String, Box<dyn std::error::Error>>) -> ExitCode {
    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(error) = telemetry::init(&cli.log_level) {
        eprintln!("{error}");
        return ExitCode::FAILURE;
    }

    finish(execute(&cli))
}
