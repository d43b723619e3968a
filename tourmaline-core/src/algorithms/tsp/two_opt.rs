#[cfg(test)]
#[path = "../../../tests/unit/algorithms/tsp/two_opt_test.rs"]
mod two_opt_test;

use super::*;

/// Improves a tour by reversing sub segments while any reversal strictly shortens
/// it (2-opt local search, the "un-crossing" move).
///
/// The start point is pinned, so candidate segments begin at index 1; directly
/// adjacent pairs are skipped as their reversal is a plain swap already covered by
/// mutation. Runs full sweeps until a sweep finds no improvement or the sweep cap
/// is reached, which bounds the worst case cost.
///
/// Expects a tour without the repeated closing element; the wrap around leg is
/// still priced for closed tours.
pub(crate) fn two_opt(matrix: &DistanceMatrix, kind: TourKind, tour: Vec<usize>, max_sweeps: usize) -> Vec<usize> {
    let mut best = tour;
    let mut best_distance = tour_distance(matrix, &best, kind);

    let mut improved = true;
    let mut sweeps = 0;

    while improved && sweeps < max_sweeps {
        improved = false;
        sweeps += 1;

        for segment_start in 1..best.len().saturating_sub(1) {
            for segment_end in (segment_start + 2)..best.len() {
                let mut candidate = best.clone();
                candidate[segment_start..=segment_end].reverse();

                let candidate_distance = tour_distance(matrix, &candidate, kind);
                if candidate_distance < best_distance {
                    best = candidate;
                    best_distance = candidate_distance;
                    improved = true;
                }
            }
        }
    }

    best
}
