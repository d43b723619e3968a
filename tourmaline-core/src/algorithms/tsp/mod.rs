//! Algorithms which decide the visiting order of waypoints over a distance matrix.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/tsp/dispatch_test.rs"]
mod dispatch_test;

use crate::models::DistanceMatrix;
use crate::utils::{Float, Random};
use std::sync::Arc;

mod held_karp;
pub use self::held_karp::held_karp;

mod memetic;
pub use self::memetic::{MemeticConfig, MemeticSolver};

mod two_opt;
pub(crate) use self::two_opt::two_opt;

/// Specifies whether a tour returns to its start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TourKind {
    /// The tour ends at its last waypoint.
    Open,
    /// The tour returns to the start. Such tours are reported with the start
    /// repeated as the last element.
    Closed,
}

/// A visiting order over matrix point indices together with its total distance.
#[derive(Clone, Debug)]
pub struct TourSolution {
    /// Point indices in visiting order; closed tours repeat the start at the end.
    pub tour: Vec<usize>,
    /// Total travel distance over the matrix, infinite when a leg is unreachable.
    pub distance: Float,
}

/// The largest point count still handled by the exact dynamic programming solver.
/// Beyond it the 2^n * n state space stops being practical and the memetic search
/// takes over.
pub const EXACT_SOLVER_LIMIT: usize = 12;

/// Computes the total distance of a tour under the given convention. The wrap
/// around leg is added for closed tours expressed without the repeated start, so
/// both tour representations price identically.
pub fn tour_distance(matrix: &DistanceMatrix, tour: &[usize], kind: TourKind) -> Float {
    if tour.len() < 2 {
        return 0.;
    }

    let wrap = match kind {
        TourKind::Closed if tour.first() != tour.last() => matrix.get(tour[tour.len() - 1], tour[0]),
        _ => 0.,
    };

    tour.windows(2).map(|leg| matrix.get(leg[0], leg[1])).sum::<Float>() + wrap
}

/// Returns the visiting order of all matrix points which minimizes the total
/// travel distance.
///
/// Instances up to [`EXACT_SOLVER_LIMIT`] points are solved exactly with
/// [`held_karp`], larger ones heuristically with [`MemeticSolver`]. Trivial inputs
/// short circuit without touching either solver: empty input and a single point
/// map to the identity order with zero distance, two points need no ordering.
pub fn solve_visiting_order(
    matrix: &DistanceMatrix,
    kind: TourKind,
    config: &MemeticConfig,
    random: Arc<dyn Random>,
) -> TourSolution {
    match matrix.size() {
        0 => TourSolution { tour: vec![], distance: 0. },
        1 => TourSolution { tour: vec![0], distance: 0. },
        2 => match kind {
            TourKind::Open => TourSolution { tour: vec![0, 1], distance: matrix.get(0, 1) },
            TourKind::Closed => TourSolution { tour: vec![0, 1, 0], distance: matrix.get(0, 1) + matrix.get(1, 0) },
        },
        size if size <= EXACT_SOLVER_LIMIT => held_karp(matrix, kind),
        _ => MemeticSolver::new(matrix, kind, config.clone(), random).solve(),
    }
}
