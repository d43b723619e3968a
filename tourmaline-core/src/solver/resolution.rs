#[cfg(test)]
#[path = "../../tests/unit/solver/resolution_test.rs"]
mod resolution_test;

use crate::algorithms::geo::haversine_distance;
use crate::models::{CoordinateIndex, GeoPoint, NodeId};
use crate::utils::compare_floats;

/// Maps a raw coordinate to the nearest known graph node by straight line distance.
///
/// Returns `None` when the index holds no geometry at all: the solver treats such a
/// point as an isolated synthetic node whose legs are estimated instead of routed.
pub fn resolve_nearest<N: NodeId>(coordinates: &CoordinateIndex<N>, point: &GeoPoint) -> Option<N> {
    coordinates
        .iter()
        .map(|(node, location)| (node, haversine_distance(location, point)))
        .min_by(|(_, first), (_, second)| compare_floats(*first, *second))
        .map(|(node, _)| node.clone())
}
