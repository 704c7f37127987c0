use super::*;
use std::io::Write;

fn get_matches(args: &[&str]) -> ArgMatches {
    get_scheduling_app().try_get_matches_from([&["scheduling"], args].concat()).unwrap()
}

fn run_to_string(matches: &ArgMatches) -> String {
    let mut buffer = Vec::new();
    run_scheduling(matches, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[test]
fn can_get_default_settings() {
    let settings = get_scheduling_settings(&get_matches(&[])).unwrap();

    assert_eq!((settings.num_staff, settings.num_days, settings.max_time), (48, 30, 120));
}

#[test]
fn can_merge_config_file_and_args() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    write!(config, r#"{{ "numStaff": 10, "minWeekHours": 35, "sundayOffWeight": 2.5 }}"#).unwrap();
    let path = config.path().to_str().unwrap();

    let settings = get_scheduling_settings(&get_matches(&["-c", path, "--days", "14", "-t", "10"])).unwrap();

    assert_eq!((settings.num_staff, settings.num_days, settings.max_time), (10, 14, 10));
    assert_eq!((settings.min_week_hours, settings.max_week_hours), (35, 50));
    assert_eq!(settings.sunday_off_weight, 2.5);
}

#[test]
fn can_reject_malformed_config() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    write!(config, "{{ numStaff: }}").unwrap();
    let path = config.path().to_str().unwrap();

    assert!(get_scheduling_settings(&get_matches(&["-c", path])).is_err());
}

#[test]
fn can_write_feasible_schedule() {
    let output = run_to_string(&get_matches(&["--staff", "4", "--days", "3", "-t", "60"]));

    assert!(output.starts_with("Feasible schedule found:\n"));
    assert!(output.contains("Day 3"));
    assert!(output.contains("Staff 3 total hours worked: "));
    assert!(output.contains("\nDay 3:\n  Shift A: 1 staff\n"));
}

#[test]
fn can_report_infeasible_schedule() {
    let output = run_to_string(&get_matches(&["--staff", "1", "--days", "2"]));

    assert_eq!(output, "No feasible schedule found.\n");
}

#[test]
fn can_propagate_invalid_settings() {
    let mut buffer = Vec::new();

    assert!(run_scheduling(&get_matches(&["--days", "0"]), &mut buffer).is_err());
}
