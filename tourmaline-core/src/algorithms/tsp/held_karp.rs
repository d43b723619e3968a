#[cfg(test)]
#[path = "../../../tests/unit/algorithms/tsp/held_karp_test.rs"]
mod held_karp_test;

use super::*;

/// Solves the visiting order exactly with Held-Karp subset dynamic programming.
///
/// Each state (subset mask, last point) keeps the cheapest cost of visiting
/// exactly that subset ending at the last point, plus the predecessor used to get
/// there. Runs in O(2^n * n^2) time and O(2^n * n) memory, which is why the
/// dispatch caps it at [`EXACT_SOLVER_LIMIT`] points. The result is deterministic
/// and globally optimal: it serves as the correctness baseline the memetic solver
/// is measured against.
///
/// A matrix without any reachable complete tour has no valid final state; such
/// input degrades to the identity order with zero distance instead of failing.
pub fn held_karp(matrix: &DistanceMatrix, kind: TourKind) -> TourSolution {
    let n = matrix.size();
    debug_assert!(n >= 2);

    let states = 1_usize << n;
    let index = |mask: usize, last: usize| mask * n + last;

    let mut cost = vec![Float::INFINITY; states * n];
    let mut parent = vec![usize::MAX; states * n];

    for point in 1..n {
        let mask = (1 << point) | 1;
        cost[index(mask, point)] = matrix.get(0, point);
        parent[index(mask, point)] = 0;
    }

    for mask in 0..states {
        // a useful state holds the start point plus at least two others,
        // smaller subsets are covered by the base case above
        if mask & 1 == 0 || mask.count_ones() < 3 {
            continue;
        }

        for last in 1..n {
            if mask & (1 << last) == 0 {
                continue;
            }

            let prev_mask = mask & !(1 << last);
            let mut best = Float::INFINITY;
            let mut best_parent = usize::MAX;

            for prev in 1..n {
                if prev == last || prev_mask & (1 << prev) == 0 {
                    continue;
                }

                let prev_cost = cost[index(prev_mask, prev)];
                if !prev_cost.is_finite() {
                    continue;
                }

                let candidate = prev_cost + matrix.get(prev, last);
                if candidate < best {
                    best = candidate;
                    best_parent = prev;
                }
            }

            if best_parent != usize::MAX {
                cost[index(mask, last)] = best;
                parent[index(mask, last)] = best_parent;
            }
        }
    }

    let full_mask = states - 1;
    let mut best_distance = Float::INFINITY;
    let mut best_last = usize::MAX;

    for last in 1..n {
        let state_cost = cost[index(full_mask, last)];
        if !state_cost.is_finite() {
            continue;
        }

        let candidate = match kind {
            TourKind::Closed => state_cost + matrix.get(last, 0),
            TourKind::Open => state_cost,
        };

        if candidate < best_distance {
            best_distance = candidate;
            best_last = last;
        }
    }

    if best_last == usize::MAX {
        return TourSolution { tour: (0..n).collect(), distance: 0. };
    }

    let mut tour = Vec::with_capacity(n + 1);
    let mut mask = full_mask;
    let mut current = best_last;
    while current != 0 {
        tour.push(current);
        let prev = parent[index(mask, current)];
        mask &= !(1 << current);
        current = prev;
    }
    tour.push(0);
    tour.reverse();

    if kind == TourKind::Closed {
        tour.push(0);
    }

    TourSolution { tour, distance: best_distance }
}
