#[cfg(test)]
#[path = "../../tests/unit/construction/matrix_test.rs"]
mod matrix_test;

use crate::algorithms::geo::haversine_distance;
use crate::algorithms::search::astar;
use crate::models::{CoordinateIndex, DistanceMatrix, GeoPoint, RoadGraph};
use crate::utils::{parallel_collect, Float, RouteError, RouteResult};

const METERS_PER_KM: Float = 1000.;

/// Supplies a dense matrix of directed distances in meters for an ordered list of
/// coordinates, e.g. by calling a remote routing service.
///
/// Implementations are expected to bound their request with a connect/read timeout
/// and make a single attempt: expiry, transport errors and malformed payloads are
/// all surfaced as [`RouteError::MatrixSource`], never as a partial matrix.
pub trait MatrixSource {
    /// Returns the matrix as rows of meters, one row per origin point.
    fn distance_matrix(&self, points: &[GeoPoint]) -> RouteResult<Vec<Vec<Float>>>;
}

/// Builds the matrix by running one shortest path search per ordered pair of
/// points; rows are computed in parallel. Both directions are searched separately
/// as a directed network does not guarantee symmetric distances. Unreachable pairs
/// keep infinite distance.
///
/// The cost grows as O(n^2) search invocations, which dominates large requests.
pub fn build_from_graph<G>(graph: &G, coordinates: &CoordinateIndex<G::Node>, points: &[G::Node]) -> DistanceMatrix
where
    G: RoadGraph + Sync,
{
    let indices: Vec<usize> = (0..points.len()).collect();
    let rows = parallel_collect(&indices, |&from| {
        (0..points.len())
            .map(|to| if from == to { 0. } else { astar(graph, coordinates, &points[from], &points[to]).distance })
            .collect::<Vec<_>>()
    });

    let mut matrix = DistanceMatrix::new(points.len());
    rows.iter().enumerate().for_each(|(from, row)| {
        row.iter().enumerate().for_each(|(to, &distance)| matrix.set(from, to, distance));
    });

    matrix
}

/// Builds the matrix from straight line distances only. Used when no road graph is
/// available for the request.
pub fn build_from_coordinates(points: &[GeoPoint]) -> DistanceMatrix {
    let mut matrix = DistanceMatrix::new(points.len());

    for from in 0..points.len() {
        for to in 0..points.len() {
            if from != to {
                matrix.set(from, to, haversine_distance(&points[from], &points[to]));
            }
        }
    }

    matrix
}

/// Fetches the matrix from an external source and normalizes it to kilometers.
///
/// A source failure or a malformed payload fails the whole computation: silently
/// substituting another distance source would break the single unit contract the
/// ordering solver relies on.
pub fn build_from_source(source: &dyn MatrixSource, points: &[GeoPoint]) -> RouteResult<DistanceMatrix> {
    let rows = source.distance_matrix(points)?;

    if rows.len() != points.len() {
        return Err(RouteError::MatrixSource(format!("expected {} matrix rows, got {}", points.len(), rows.len())));
    }

    let matrix =
        DistanceMatrix::from_rows(rows).map_err(|err| RouteError::MatrixSource(err.to_string()))?;

    Ok(matrix.map(|distance| distance / METERS_PER_KM))
}
