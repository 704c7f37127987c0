#[cfg(test)]
#[path = "../../tests/unit/commands/routing_test.rs"]
mod routing_test;

use super::*;
use serde::Deserialize;
use staff_routing::data::{RoutingSettings, create_routing_data, write_routing_data};
use staff_routing::plots::draw_routes;
use staff_routing::solver::{SolverSettings, solve_routing};
use staff_routing::writer::write_routing_solution;
use std::path::Path;

const STAFF_ARG_NAME: &str = "staff";
const VEHICLES_ARG_NAME: &str = "vehicles";
const SEED_ARG_NAME: &str = "seed";
const GENERATIONS_ARG_NAME: &str = "max-generations";
const PLOT_ARG_NAME: &str = "plot";
const SKIP_DATA_ARG_NAME: &str = "skip-data";

/// Routing command settings as they are kept in the config file.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RoutingConfig {
    data: RoutingSettings,
    solver: SolverSettings,
}

pub fn get_routing_app() -> Command {
    Command::new("routing")
        .about("Generates staff pickup locations and solves the vehicle routing problem")
        .arg(config_arg())
        .arg(
            Arg::new(STAFF_ARG_NAME)
                .help("Amount of staff members to pick up")
                .short('s')
                .long(STAFF_ARG_NAME)
                .required(false)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new(VEHICLES_ARG_NAME)
                .help("Amount of vehicles")
                .short('v')
                .long(VEHICLES_ARG_NAME)
                .required(false)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Seed of the random generator used to synthesize locations and capacities")
                .long(SEED_ARG_NAME)
                .required(false)
                .action(ArgAction::Set),
        )
        .arg(time_arg())
        .arg(
            Arg::new(GENERATIONS_ARG_NAME)
                .help("Specifies maximum number of generations")
                .short('n')
                .long(GENERATIONS_ARG_NAME)
                .required(false)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new(PLOT_ARG_NAME)
                .help("Specifies path to the SVG file with routes plot")
                .short('p')
                .long(PLOT_ARG_NAME)
                .required(false)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new(SKIP_DATA_ARG_NAME)
                .help("Skips printing of generated data")
                .long(SKIP_DATA_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_routing<W: Write>(matches: &ArgMatches, writer: &mut W) -> Result<(), String> {
    let (settings, solver_settings) = get_routing_settings(matches)?;
    let to_string = |err: std::io::Error| format!("cannot write output: '{err}'");

    let data = create_routing_data(&settings).map_err(|err| format!("cannot create routing data: '{err}'"))?;

    if !matches.get_flag(SKIP_DATA_ARG_NAME) {
        write_routing_data(writer, &data).map_err(|err| format!("cannot write routing data: '{err}'"))?;
        writeln!(writer).map_err(to_string)?;
    }

    let solution =
        solve_routing(&data, &solver_settings, create_logger()).map_err(|err| format!("cannot solve problem: '{err}'"))?;

    let staff_size = data.staff_indices().count();
    if staff_size > 0 && solution.unassigned.len() == staff_size {
        writeln!(writer, "No solution found.").map_err(to_string)?;
        return flush(writer);
    }

    write_routing_solution(writer, &data, &solution).map_err(|err| format!("cannot write solution: '{err}'"))?;

    if let Some(path) = matches.get_one::<String>(PLOT_ARG_NAME) {
        draw_routes(Path::new(path), &data, &solution)
            .map_err(|err| format!("cannot draw routes plot '{path}': '{err}'"))?;
        writeln!(writer, "Routes plot is saved to '{path}'").map_err(to_string)?;
    }

    flush(writer)
}

/// Merges settings from the config file with command line arguments.
fn get_routing_settings(matches: &ArgMatches) -> Result<(RoutingSettings, SolverSettings), String> {
    let RoutingConfig { data: mut settings, solver: mut solver_settings } = read_config(matches)?;

    if let Some(staff_size) = parse_int_value(matches, STAFF_ARG_NAME, "staff size")? {
        settings.staff_size = staff_size;
    }

    if let Some(vehicles) = parse_int_value(matches, VEHICLES_ARG_NAME, "vehicles")? {
        settings.vehicles = vehicles;
    }

    if let Some(seed) = parse_int_value(matches, SEED_ARG_NAME, "seed")? {
        settings.seed = seed;
    }

    if let Some(max_time) = parse_int_value(matches, TIME_ARG_NAME, "max time")? {
        solver_settings.max_time = max_time;
    }

    if let Some(max_generations) = parse_int_value(matches, GENERATIONS_ARG_NAME, "max generations")? {
        solver_settings.max_generations = Some(max_generations);
    }

    Ok((settings, solver_settings))
}
