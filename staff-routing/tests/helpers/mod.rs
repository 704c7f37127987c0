#[macro_use]
pub mod macros;

use crate::data::{get_distance_matrix, GeoPoint, RoutingData};
use crate::solver::{RoutingSolution, VehicleRoute};

pub const TEST_SCALE: f64 = 1000.;

/// Creates routing data with the depot at origin, staff on a line to the east and vehicles
/// starting west of the depot.
pub fn create_test_data(staff_size: usize, capacities: Vec<i32>) -> RoutingData {
    let vehicles = capacities.len();
    let locations = std::iter::once(GeoPoint::new(0., 0.))
        .chain((1..=staff_size).map(|idx| GeoPoint::new(0., idx as f64)))
        .chain((1..=vehicles).map(|idx| GeoPoint::new(0., -(idx as f64))))
        .collect::<Vec<_>>();

    let first_start = 1 + staff_size;

    RoutingData {
        distance_matrix: get_distance_matrix(locations.as_slice(), TEST_SCALE),
        demands: std::iter::once(0)
            .chain(std::iter::repeat_n(1, staff_size))
            .chain(std::iter::repeat_n(0, vehicles))
            .collect(),
        locations,
        vehicle_capacities: capacities,
        depot: 0,
        vehicle_starts: (first_start..first_start + vehicles).collect(),
        vehicle_ends: vec![0; vehicles],
    }
}

/// Creates a solution from routes given as location indices per vehicle.
pub fn create_test_solution(data: &RoutingData, routes: Vec<Vec<usize>>, unassigned: Vec<usize>) -> RoutingSolution {
    RoutingSolution {
        routes: routes.into_iter().enumerate().map(|(vehicle, stops)| VehicleRoute::new(data, vehicle, stops)).collect(),
        unassigned,
    }
}
