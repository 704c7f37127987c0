#[cfg(test)]
#[path = "../../tests/unit/data/generator_test.rs"]
mod generator_test;

use super::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use vrp_core::prelude::GenericError;
use vrp_core::utils::GenericResult;

/// Creates routing data using given settings. The same settings always produce the same data.
pub fn create_routing_data(settings: &RoutingSettings) -> GenericResult<RoutingData> {
    validate_settings(settings)?;

    let mut random = SmallRng::seed_from_u64(settings.seed);
    let mut sample_location = |area: &Area| {
        let latitude = random.gen_range(area.latitude_range());
        let longitude = random.gen_range(area.longitude_range());
        GeoPoint::new(latitude, longitude)
    };

    let depot = 0;
    let staff = (0..settings.staff_size).map(|_| sample_location(&settings.area)).collect::<Vec<_>>();
    let starts = (0..settings.vehicles).map(|_| sample_location(&settings.area)).collect::<Vec<_>>();

    let locations = std::iter::once(settings.depot).chain(staff).chain(starts).collect::<Vec<_>>();
    let distance_matrix = get_distance_matrix(locations.as_slice(), settings.scale);

    let (min_capacity, max_capacity) = settings.capacity;
    let vehicle_capacities =
        (0..settings.vehicles).map(|_| random.gen_range(min_capacity..=max_capacity) as i32).collect::<Vec<_>>();

    let demands = std::iter::once(0)
        .chain(std::iter::repeat_n(1, settings.staff_size))
        .chain(std::iter::repeat_n(0, settings.vehicles))
        .collect();

    let first_start = locations.len() - settings.vehicles;

    Ok(RoutingData {
        locations,
        distance_matrix,
        demands,
        vehicle_capacities,
        depot,
        vehicle_starts: (first_start..first_start + settings.vehicles).collect(),
        vehicle_ends: vec![depot; settings.vehicles],
    })
}

/// Calculates distance matrix for given locations.
pub fn get_distance_matrix(locations: &[GeoPoint], scale: f64) -> Vec<Vec<i64>> {
    locations.iter().map(|from| locations.iter().map(|to| euclidean_distance(from, to, scale)).collect()).collect()
}

/// Calculates euclidean distance between two points scaled and truncated to integer.
pub fn euclidean_distance(from: &GeoPoint, to: &GeoPoint, scale: f64) -> i64 {
    let latitude = from.latitude - to.latitude;
    let longitude = from.longitude - to.longitude;

    ((latitude * latitude + longitude * longitude).sqrt() * scale) as i64
}

fn validate_settings(settings: &RoutingSettings) -> GenericResult<()> {
    let (min_capacity, max_capacity) = settings.capacity;

    if settings.vehicles == 0 {
        return Err("at least one vehicle is required".into());
    }

    if min_capacity == 0 || min_capacity > max_capacity {
        return Err(GenericError::from(format!(
            "capacity range must be positive and non-empty, got: [{min_capacity}, {max_capacity}]"
        )));
    }

    if settings.area.latitude_range().is_empty() || settings.area.longitude_range().is_empty() {
        return Err("sampling area must be non-empty".into());
    }

    if settings.scale.is_nan() || settings.scale <= 0. {
        return Err(GenericError::from(format!("distance scale must be positive, got: {}", settings.scale)));
    }

    Ok(())
}
