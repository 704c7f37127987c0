use clap::{Arg, ArgAction, ArgMatches, Command};

pub mod routing;
pub mod scheduling;

use rosomaxa::utils::InfoLogger;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, Write};
use std::str::FromStr;
use std::sync::Arc;

const CONFIG_ARG_NAME: &str = "config";
const TIME_ARG_NAME: &str = "max-time";

fn config_arg() -> Arg {
    Arg::new(CONFIG_ARG_NAME)
        .help("Specifies path to the JSON file with settings, command line arguments take precedence")
        .short('c')
        .long(CONFIG_ARG_NAME)
        .required(false)
        .action(ArgAction::Set)
}

fn time_arg() -> Arg {
    Arg::new(TIME_ARG_NAME)
        .help("Specifies wall-clock time budget of the solver in seconds")
        .short('t')
        .long(TIME_ARG_NAME)
        .required(false)
        .action(ArgAction::Set)
}

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

/// Reads settings from the config file if it is specified, otherwise returns defaults.
fn read_config<T: DeserializeOwned + Default>(matches: &ArgMatches) -> Result<T, String> {
    matches.get_one::<String>(CONFIG_ARG_NAME).map_or_else(
        || Ok(T::default()),
        |path| {
            let reader = BufReader::new(open_file(path, "config")?);
            serde_json::from_reader(reader).map_err(|err| format!("cannot read config file '{path}': '{err}'"))
        },
    )
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn create_logger() -> InfoLogger {
    Arc::new(|msg: &str| println!("{msg}"))
}

fn flush<W: Write>(writer: &mut W) -> Result<(), String> {
    writer.flush().map_err(|err| format!("cannot write output: '{err}'"))
}

pub(crate) fn create_app() -> Command {
    Command::new("staff-demos")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Solves staff pickup routing and staff shift scheduling problems")
        .subcommand(routing::get_routing_app())
        .subcommand(scheduling::get_scheduling_app())
}
