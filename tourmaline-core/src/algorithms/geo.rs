#[cfg(test)]
#[path = "../../tests/unit/algorithms/geo_test.rs"]
mod geo_test;

use crate::models::{Distance, GeoPoint};

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Computes the great circle distance between two coordinates in kilometers using
/// the haversine formula. Identical points produce zero.
///
/// The same function serves two purposes: an edge weight fallback when no measured
/// road length is available, and the A* remaining distance estimate.
pub fn haversine_distance(from: &GeoPoint, to: &GeoPoint) -> Distance {
    let from_lat = from.lat.to_radians();
    let to_lat = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.).sin().powi(2) + from_lat.cos() * to_lat.cos() * (delta_lng / 2.).sin().powi(2);
    let c = 2. * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}
