//! Translates routing data into the solver's problem definition.

#[cfg(test)]
#[path = "../tests/unit/problem_test.rs"]
mod problem_test;

use crate::data::RoutingData;
use std::sync::Arc;
use vrp_core::custom_dimension;
use vrp_core::models::common::Dimensions;
use vrp_core::models::problem::{Job, Vehicle};
use vrp_core::prelude::*;
use vrp_core::utils::Float;

// Keeps data indices to map solver's jobs and vehicles back to routing data.
custom_dimension!(StaffIndex typeof usize);
custom_dimension!(VehicleIndex typeof usize);

/// Creates a routing matrix from routing data: durations are the same as distances.
pub fn create_transport(data: &RoutingData) -> GenericResult<Arc<dyn TransportCost>> {
    let size = data.locations.len();
    if data.distance_matrix.len() != size || data.distance_matrix.iter().any(|row| row.len() != size) {
        return Err(GenericError::from(format!("distance matrix must be {size}x{size}")));
    }

    let distances = data.distance_matrix.iter().flat_map(|row| row.iter().map(|&d| d as Float)).collect::<Vec<_>>();
    let durations = distances.clone();

    Ok(Arc::new(SimpleTransportCost::new(durations, distances)?))
}

/// Creates a pickup problem: every staff member is picked up at its location and dropped at the end
/// of the tour, vehicles are limited only by their capacity.
pub fn create_problem(data: &RoutingData) -> GenericResult<Problem> {
    let transport = create_transport(data)?;
    let goal = create_goal(transport.clone())?;

    ProblemBuilder::default()
        .add_jobs(create_jobs(data)?.into_iter())
        .add_vehicles(create_vehicles(data)?.into_iter())
        .with_goal(goal)
        .with_transport_cost(transport)
        .build()
}

fn create_jobs(data: &RoutingData) -> GenericResult<Vec<Job>> {
    data.staff_indices()
        .map(|idx| {
            SingleBuilder::default()
                .id(format!("staff{idx}").as_str())
                .demand(Demand {
                    pickup: (SingleDimLoad::new(data.demands[idx]), SingleDimLoad::default()),
                    delivery: (SingleDimLoad::default(), SingleDimLoad::default()),
                })
                .dimension(|dimens| {
                    dimens.set_staff_index(idx);
                })
                .location(idx)?
                .build_as_job()
        })
        .collect()
}

fn create_vehicles(data: &RoutingData) -> GenericResult<Vec<Vehicle>> {
    if data.vehicle_starts.len() != data.num_vehicles() || data.vehicle_ends.len() != data.num_vehicles() {
        return Err("vehicle starts, ends and capacities must have the same size".into());
    }

    data.vehicle_capacities
        .iter()
        .zip(data.vehicle_starts.iter().zip(data.vehicle_ends.iter()))
        .enumerate()
        .map(|(idx, (&capacity, (&start, &end)))| {
            VehicleBuilder::default()
                .id(format!("v{idx}").as_str())
                .add_detail(VehicleDetailBuilder::default().set_start_location(start).set_end_location(end).build()?)
                .dimension(|dimens| {
                    dimens.set_vehicle_index(idx);
                })
                .capacity(SingleDimLoad::new(capacity))
                .build()
        })
        .collect()
}

fn create_goal(transport: Arc<dyn TransportCost>) -> GenericResult<GoalContext> {
    let minimize_unassigned = MinimizeUnassignedBuilder::new("min-unassigned").build()?;
    let capacity_feature = CapacityFeatureBuilder::<SingleDimLoad>::new("capacity").build()?;
    let transport_feature = TransportFeatureBuilder::new("min-distance")
        .set_transport_cost(transport)
        .set_time_constrained(false)
        .build_minimize_distance()?;

    GoalContextBuilder::with_features(&[minimize_unassigned, transport_feature, capacity_feature])?.build()
}
