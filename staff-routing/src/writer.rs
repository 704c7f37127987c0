//! Writes routing solution in human readable form.

#[cfg(test)]
#[path = "../tests/unit/writer_test.rs"]
mod writer_test;

use crate::data::RoutingData;
use crate::solver::RoutingSolution;
use std::io::Write;
use vrp_core::utils::GenericResult;

/// Writes routing solution: a section per vehicle with its legs, distance and load, then totals.
pub fn write_routing_solution<W: Write>(
    writer: &mut W,
    data: &RoutingData,
    solution: &RoutingSolution,
) -> GenericResult<()> {
    writeln!(writer, "Total staff: {}", data.total_staff())?;
    writeln!(writer, "Total vehicle capacity: {}\n", data.total_capacity())?;

    for route in solution.routes.iter() {
        writeln!(writer, "------ Vehicle {} (capacity: {}) ------\n", route.vehicle, route.capacity)?;

        for (step, (from, to, distance)) in route.legs(data).enumerate() {
            writeln!(writer, " #{} : {from} -> {to} (distance: {})", step + 1, format_km(distance))?;
        }

        writeln!(writer, "Total distance: {}", format_km(route.distance(data)))?;
        writeln!(writer, "Total Load: {}\n", route.load)?;
    }

    if !solution.unassigned.is_empty() {
        writeln!(writer, "Unassigned staff: {:?}", solution.unassigned)?;
    }

    writeln!(writer, "Total distance of all routes: {}", format_km(solution.distance(data)))?;

    Ok(())
}

/// Formats scaled distance as kilometers.
pub fn format_km(distance: i64) -> String {
    format!("{:.2} km", distance as f64 / 1000.)
}
