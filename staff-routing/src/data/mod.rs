//! Contains problem data model and its synthesis.

mod generator;
pub use self::generator::*;

mod writer;
pub use self::writer::write_routing_data;

use serde::Deserialize;
use std::ops::Range;

/// A geographical point.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct GeoPoint {
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a new instance of `GeoPoint`.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// A bounding box used to sample random locations.
#[derive(Clone, Debug, Deserialize)]
pub struct Area {
    /// Latitude range as (min, max).
    pub latitude: (f64, f64),
    /// Longitude range as (min, max).
    pub longitude: (f64, f64),
}

impl Area {
    pub(crate) fn latitude_range(&self) -> Range<f64> {
        self.latitude.0..self.latitude.1
    }

    pub(crate) fn longitude_range(&self) -> Range<f64> {
        self.longitude.0..self.longitude.1
    }
}

/// Specifies how routing data is synthesized. Defaults describe staff pickup across Mauritius
/// with the depot at Ebene.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoutingSettings {
    /// Amount of staff members to pick up.
    pub staff_size: usize,
    /// Amount of vehicles.
    pub vehicles: usize,
    /// Vehicle capacity range, both ends inclusive.
    pub capacity: (usize, usize),
    /// A seed for random generator.
    pub seed: u64,
    /// Depot location, all vehicles finish there.
    pub depot: GeoPoint,
    /// An area where staff and vehicle start locations are sampled.
    pub area: Area,
    /// A factor applied to euclidean distance to get integer distances.
    pub scale: f64,
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            staff_size: 30,
            vehicles: 6,
            capacity: (5, 10),
            seed: 3,
            depot: GeoPoint::new(-20.2430, 57.4924),
            area: Area { latitude: (-20.5, -20.0), longitude: (57.3, 57.8) },
            scale: 10000.,
        }
    }
}

/// Keeps all data needed to define a pickup problem. Location indices are shared by all collections:
/// the depot goes first, then staff locations, then vehicle start locations.
#[derive(Clone, Debug)]
pub struct RoutingData {
    /// All locations.
    pub locations: Vec<GeoPoint>,
    /// Pairwise distances between locations.
    pub distance_matrix: Vec<Vec<i64>>,
    /// Demand per location.
    pub demands: Vec<i32>,
    /// Capacity per vehicle.
    pub vehicle_capacities: Vec<i32>,
    /// Depot location index.
    pub depot: usize,
    /// Start location index per vehicle.
    pub vehicle_starts: Vec<usize>,
    /// End location index per vehicle.
    pub vehicle_ends: Vec<usize>,
}

impl RoutingData {
    /// Returns amount of vehicles.
    pub fn num_vehicles(&self) -> usize {
        self.vehicle_capacities.len()
    }

    /// Returns indices of locations which have to be visited.
    pub fn staff_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.demands.iter().enumerate().filter(|(_, demand)| **demand > 0).map(|(idx, _)| idx)
    }

    /// Returns total demand of all staff members.
    pub fn total_staff(&self) -> i32 {
        self.demands.iter().sum()
    }

    /// Returns total capacity of the fleet.
    pub fn total_capacity(&self) -> i32 {
        self.vehicle_capacities.iter().sum()
    }

    /// Returns distance between two locations.
    pub fn distance(&self, from: usize, to: usize) -> i64 {
        self.distance_matrix[from][to]
    }
}
