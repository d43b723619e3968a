#[cfg(test)]
#[path = "../../../tests/unit/algorithms/search/dijkstra_test.rs"]
mod dijkstra_test;

use super::*;
use crate::models::RoadGraph;
use crate::utils::{RouteError, RouteResult};
use rustc_hash::FxHashSet;
use std::collections::BinaryHeap;

/// Runs Dijkstra shortest path search from start to end, stopping as soon as the
/// end node is settled.
///
/// Fails fast with [`RouteError::NodeNotFound`] when either endpoint is not part of
/// the graph; an unreachable end is not an error and is reported as a sentinel
/// result with an empty path and infinite distance. Callers preferring a checkable
/// sentinel over an error for missing endpoints use [`astar`](super::astar) instead:
/// both conventions are relied upon and must stay as they are.
pub fn dijkstra<G: RoadGraph>(graph: &G, start: &G::Node, end: &G::Node) -> RouteResult<SearchResult<G::Node>> {
    if !graph.has_node(start) || !graph.has_node(end) {
        return Err(RouteError::NodeNotFound(format!("start or end does not exist: {start:?} -> {end:?}")));
    }

    if start == end {
        return Ok(SearchResult::found(vec![start.clone()], 0., vec![start.clone()]));
    }

    let mut distances: FxHashMap<G::Node, Float> = FxHashMap::default();
    let mut previous: FxHashMap<G::Node, G::Node> = FxHashMap::default();
    let mut closed: FxHashSet<G::Node> = FxHashSet::default();
    let mut visited_order = Vec::new();
    let mut frontier = BinaryHeap::new();

    distances.insert(start.clone(), 0.);
    frontier.push(FrontierEntry { estimate: 0., node: start.clone() });

    while let Some(FrontierEntry { node: current, .. }) = frontier.pop() {
        if !closed.insert(current.clone()) {
            continue;
        }
        visited_order.push(current.clone());

        // relaxations done so far cannot be improved by nodes settled later
        // under non negative weights, so stopping here is safe
        if current == *end {
            break;
        }

        let current_distance = distances[&current];
        for (neighbor, weight) in graph.neighbors(&current) {
            if closed.contains(&neighbor) {
                continue;
            }

            let candidate = current_distance + weight;
            let known = distances.get(&neighbor).copied().unwrap_or(Float::INFINITY);
            if candidate < known {
                distances.insert(neighbor.clone(), candidate);
                previous.insert(neighbor.clone(), current.clone());
                frontier.push(FrontierEntry { estimate: candidate, node: neighbor });
            }
        }
    }

    let path = reconstruct_path(&previous, start, end);
    Ok(if path.is_empty() {
        SearchResult::not_found(visited_order, "no path between start and end")
    } else {
        SearchResult::found(path, distances[end], visited_order)
    })
}
