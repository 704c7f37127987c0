//! Runs the routing solver and converts its result back to routing data terms.

#[cfg(test)]
#[path = "../tests/unit/solver_test.rs"]
mod solver_test;

use crate::data::RoutingData;
use crate::problem::{create_problem, StaffIndexDimension, VehicleIndexDimension};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use vrp_core::models::Solution;
use vrp_core::prelude::*;
use vrp_core::utils::{Environment, Timer};

/// Specifies solver parameters.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolverSettings {
    /// Wall-clock time budget in seconds.
    pub max_time: usize,
    /// Max amount of generations, unlimited if not set.
    pub max_generations: Option<usize>,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self { max_time: 30, max_generations: None }
    }
}

/// A route of a single vehicle expressed in location indices.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleRoute {
    /// Vehicle index.
    pub vehicle: usize,
    /// Vehicle capacity.
    pub capacity: i32,
    /// Visited locations including start and end.
    pub stops: Vec<usize>,
    /// Total demand served on the route.
    pub load: i32,
}

impl VehicleRoute {
    /// Creates a new route computing its load from the data.
    pub fn new(data: &RoutingData, vehicle: usize, stops: Vec<usize>) -> Self {
        let load = stops.iter().map(|&stop| data.demands[stop]).sum();
        Self { vehicle, capacity: data.vehicle_capacities[vehicle], stops, load }
    }

    /// Returns route legs as (from, to, distance).
    pub fn legs<'a>(&'a self, data: &'a RoutingData) -> impl Iterator<Item = (usize, usize, i64)> + 'a {
        self.stops.windows(2).map(|leg| (leg[0], leg[1], data.distance(leg[0], leg[1])))
    }

    /// Returns total distance of the route.
    pub fn distance(&self, data: &RoutingData) -> i64 {
        self.legs(data).map(|(_, _, distance)| distance).sum()
    }
}

/// A routing solution: one route per vehicle and staff which cannot be picked up.
#[derive(Clone, Debug, Default)]
pub struct RoutingSolution {
    /// Routes ordered by vehicle index.
    pub routes: Vec<VehicleRoute>,
    /// Locations of unassigned staff.
    pub unassigned: Vec<usize>,
}

impl RoutingSolution {
    /// Returns total distance of all routes.
    pub fn distance(&self, data: &RoutingData) -> i64 {
        self.routes.iter().map(|route| route.distance(data)).sum()
    }
}

/// Solves routing problem defined by the data within given time budget.
pub fn solve_routing(
    data: &RoutingData,
    settings: &SolverSettings,
    logger: InfoLogger,
) -> GenericResult<RoutingSolution> {
    let timer = Timer::start();
    let problem = Arc::new(create_problem(data)?);

    let environment = Arc::new(Environment {
        logger: logger.clone(),
        ..Environment::new_with_time_quota(Some(settings.max_time))
    });

    let config = VrpConfigBuilder::new(problem.clone())
        .set_environment(environment)
        .prebuild()?
        .with_max_time(Some(settings.max_time))
        .with_max_generations(settings.max_generations)
        .build()?;

    let solution = Solver::new(problem, config).solve()?;

    (logger)(&format!("solver finished in {}ms with cost {:.2}", timer.elapsed_millis(), solution.cost));

    Ok(convert_solution(data, &solution))
}

/// Converts solver's solution into routes over location indices. Vehicles without a tour are
/// reported with an empty route from start to end.
pub fn convert_solution(data: &RoutingData, solution: &Solution) -> RoutingSolution {
    let mut tours = solution
        .routes
        .iter()
        .zip(solution.get_locations())
        .filter_map(|(route, locations)| {
            route.actor.vehicle.dimens.get_vehicle_index().map(|&vehicle| (vehicle, locations.collect::<Vec<_>>()))
        })
        .collect::<HashMap<_, _>>();

    let routes = (0..data.num_vehicles())
        .map(|vehicle| {
            let stops = tours
                .remove(&vehicle)
                .unwrap_or_else(|| vec![data.vehicle_starts[vehicle], data.vehicle_ends[vehicle]]);
            VehicleRoute::new(data, vehicle, stops)
        })
        .collect();

    let mut unassigned = solution
        .unassigned
        .iter()
        .filter_map(|(job, _)| job.dimens().get_staff_index().copied())
        .collect::<Vec<_>>();
    unassigned.sort_unstable();

    RoutingSolution { routes, unassigned }
}
