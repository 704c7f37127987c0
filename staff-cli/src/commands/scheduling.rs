#[cfg(test)]
#[path = "../../tests/unit/commands/scheduling_test.rs"]
mod scheduling_test;

use super::*;
use staff_scheduling::model::SchedulingSettings;
use staff_scheduling::shifts::ShiftCatalog;
use staff_scheduling::solver::solve_schedule;
use staff_scheduling::writer::{write_schedule, write_summary};

const STAFF_ARG_NAME: &str = "staff";
const DAYS_ARG_NAME: &str = "days";

pub fn get_scheduling_app() -> Command {
    Command::new("scheduling")
        .about("Assigns shifts to staff members over a planning horizon")
        .arg(config_arg())
        .arg(
            Arg::new(STAFF_ARG_NAME)
                .help("Amount of staff members")
                .short('s')
                .long(STAFF_ARG_NAME)
                .required(false)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new(DAYS_ARG_NAME)
                .help("Length of the planning horizon in days")
                .short('d')
                .long(DAYS_ARG_NAME)
                .required(false)
                .action(ArgAction::Set),
        )
        .arg(time_arg())
}

pub fn run_scheduling<W: Write>(matches: &ArgMatches, writer: &mut W) -> Result<(), String> {
    let settings = get_scheduling_settings(matches)?;
    let catalog = ShiftCatalog::default();

    let schedule = solve_schedule(&settings, &catalog, create_logger())
        .map_err(|err| format!("cannot solve scheduling problem: '{err}'"))?;

    match schedule {
        Some(schedule) => {
            writeln!(writer, "Feasible schedule found:").map_err(|err| err.to_string())?;
            write_schedule(writer, &schedule, &catalog)
                .and_then(|_| write_summary(writer, &schedule, &catalog))
                .map_err(|err| format!("cannot write schedule: '{err}'"))?;
        }
        None => writeln!(writer, "No feasible schedule found.").map_err(|err| err.to_string())?,
    }

    flush(writer)
}

/// Merges settings from the config file with command line arguments.
fn get_scheduling_settings(matches: &ArgMatches) -> Result<SchedulingSettings, String> {
    let mut settings: SchedulingSettings = read_config(matches)?;

    if let Some(num_staff) = parse_int_value(matches, STAFF_ARG_NAME, "staff size")? {
        settings.num_staff = num_staff;
    }

    if let Some(num_days) = parse_int_value(matches, DAYS_ARG_NAME, "days")? {
        settings.num_days = num_days;
    }

    if let Some(max_time) = parse_int_value(matches, TIME_ARG_NAME, "max time")? {
        settings.max_time = max_time;
    }

    Ok(settings)
}
