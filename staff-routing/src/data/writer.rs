#[cfg(test)]
#[path = "../../tests/unit/data/writer_test.rs"]
mod writer_test;

use super::RoutingData;
use std::io::Write;
use vrp_core::utils::GenericResult;

/// Writes routing data in human readable form.
pub fn write_routing_data<W: Write>(writer: &mut W, data: &RoutingData) -> GenericResult<()> {
    writeln!(writer, "Distance Matrix:")?;
    for row in data.distance_matrix.iter() {
        writeln!(writer, "{row:?}")?;
    }

    writeln!(writer, "\nDemands:\n{:?}", data.demands)?;
    writeln!(writer, "\nVehicle Capacities:\n{:?}", data.vehicle_capacities)?;
    writeln!(writer, "\nNumber of Vehicles:\n{}", data.num_vehicles())?;
    writeln!(writer, "\nDepot Index:\n{}", data.depot)?;
    writeln!(writer, "\nVehicle Start Indices:\n{:?}", data.vehicle_starts)?;
    writeln!(writer, "\nVehicle End Indices:\n{:?}", data.vehicle_ends)?;

    writeln!(writer, "\nLocations:")?;
    for location in data.locations.iter() {
        writeln!(writer, "({}, {})", location.latitude, location.longitude)?;
    }

    Ok(())
}
