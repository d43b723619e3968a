#[cfg(test)]
#[path = "../../../tests/unit/algorithms/search/astar_test.rs"]
mod astar_test;

use super::*;
use crate::algorithms::geo::haversine_distance;
use crate::models::{CoordinateIndex, RoadGraph};
use rustc_hash::FxHashSet;
use std::collections::BinaryHeap;

/// Runs A* shortest path search guided by the great circle estimate of the
/// remaining distance, f(n) = g(n) + h(n).
///
/// Unlike [`dijkstra`](super::dijkstra), a missing endpoint produces a soft
/// "not found" result instead of an error: call sites treat the sentinel as a
/// routine miss. A node without a known coordinate gets a zero estimate, which
/// keeps the search correct and merely less informed.
///
/// The estimate stays admissible while every edge weight is at least the straight
/// line distance between its endpoints. Road lengths satisfy that; weights scaled
/// by congestion factors above 1.0 may not, making results potentially
/// non optimal. This is a known approximation, not corrected here.
pub fn astar<G: RoadGraph>(
    graph: &G,
    coordinates: &CoordinateIndex<G::Node>,
    start: &G::Node,
    end: &G::Node,
) -> SearchResult<G::Node> {
    if !graph.has_node(start) || !graph.has_node(end) {
        return SearchResult::not_found(vec![], "start or end does not exist");
    }

    if start == end {
        return SearchResult::found(vec![start.clone()], 0., vec![start.clone()]);
    }

    let end_location = coordinates.get(end);
    let estimate_to_end = |node: &G::Node| match (coordinates.get(node), end_location) {
        (Some(from), Some(to)) => haversine_distance(&from, &to),
        _ => 0.,
    };

    let mut scores: FxHashMap<G::Node, Float> = FxHashMap::default();
    let mut previous: FxHashMap<G::Node, G::Node> = FxHashMap::default();
    let mut closed: FxHashSet<G::Node> = FxHashSet::default();
    let mut visited_order = Vec::new();
    let mut frontier = BinaryHeap::new();

    scores.insert(start.clone(), 0.);
    frontier.push(FrontierEntry { estimate: estimate_to_end(start), node: start.clone() });

    while let Some(FrontierEntry { node: current, .. }) = frontier.pop() {
        if !closed.insert(current.clone()) {
            continue;
        }
        visited_order.push(current.clone());

        if current == *end {
            break;
        }

        let current_score = scores[&current];
        for (neighbor, weight) in graph.neighbors(&current) {
            if closed.contains(&neighbor) {
                continue;
            }

            let candidate = current_score + weight;
            let known = scores.get(&neighbor).copied().unwrap_or(Float::INFINITY);
            if candidate < known {
                scores.insert(neighbor.clone(), candidate);
                previous.insert(neighbor.clone(), current.clone());
                frontier.push(FrontierEntry { estimate: candidate + estimate_to_end(&neighbor), node: neighbor });
            }
        }
    }

    let path = reconstruct_path(&previous, start, end);
    if path.is_empty() {
        SearchResult::not_found(visited_order, "no path between start and end")
    } else {
        SearchResult::found(path, scores[end], visited_order)
    }
}
