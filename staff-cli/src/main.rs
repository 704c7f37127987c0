//! A command line interface to staff pickup routing and staff shift scheduling solvers.
//!

#[cfg(test)]
#[path = "../tests/unit/main_test.rs"]
mod main_test;

mod commands;

use self::commands::create_app;
use self::commands::routing::run_routing;
use self::commands::scheduling::run_scheduling;
use std::io::stdout;
use std::process;

fn main() {
    let matches = create_app().get_matches();

    let result = match matches.subcommand() {
        Some(("routing", routing_matches)) => run_routing(routing_matches, &mut stdout().lock()),
        Some(("scheduling", scheduling_matches)) => run_scheduling(scheduling_matches, &mut stdout().lock()),
        _ => {
            eprintln!("No subcommand was used. Use -h to print help information.");
            process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
