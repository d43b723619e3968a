//! Single pair shortest path search over a road graph.
//!
//! Two engines share one skeleton: [`dijkstra`] expands by tentative distance
//! alone, [`astar`] ranks the frontier by distance plus a great circle estimate.
//! They differ intentionally in how a missing endpoint is reported, see the
//! respective functions.

use crate::models::{Distance, NodeId};
use crate::utils::Float;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

mod dijkstra;
pub use self::dijkstra::dijkstra;

mod astar;
pub use self::astar::astar;

/// A result of a shortest path search.
#[derive(Clone, Debug)]
pub struct SearchResult<N> {
    /// Nodes of the discovered path from start to end, empty when there is none.
    pub path: Vec<N>,
    /// Total path cost, infinite when the end was not reached.
    pub distance: Distance,
    /// Nodes in the order they were settled, kept for diagnostics.
    pub visited: Vec<N>,
    /// A human readable remark, set on soft failures.
    pub message: Option<String>,
}

impl<N> SearchResult<N> {
    /// Tests whether a path was found.
    pub fn is_found(&self) -> bool {
        self.distance.is_finite()
    }

    pub(crate) fn found(path: Vec<N>, distance: Distance, visited: Vec<N>) -> Self {
        Self { path, distance, visited, message: None }
    }

    pub(crate) fn not_found(visited: Vec<N>, message: &str) -> Self {
        Self { path: vec![], distance: Float::INFINITY, visited, message: Some(message.to_string()) }
    }
}

/// An entry of the search frontier. Ordered so that a binary heap pops the entry
/// with the smallest cost estimate first; stale duplicates are skipped via the
/// closed set which keeps the behavior identical to a linear minimum scan.
pub(crate) struct FrontierEntry<N> {
    pub estimate: Float,
    pub node: N,
}

impl<N> PartialEq for FrontierEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.estimate == other.estimate
    }
}

impl<N> Eq for FrontierEntry<N> {}

impl<N> PartialOrd for FrontierEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for FrontierEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.estimate.total_cmp(&self.estimate)
    }
}

/// Walks predecessor links backward from end to start. Returns an empty path when
/// the walk does not reach the start, which signals an unreachable pair.
pub(crate) fn reconstruct_path<N: NodeId>(previous: &FxHashMap<N, N>, start: &N, end: &N) -> Vec<N> {
    let mut path = vec![end.clone()];
    let mut current = end;

    while let Some(node) = previous.get(current) {
        path.push(node.clone());
        current = node;
    }

    path.reverse();

    if path.first() == Some(start) {
        path
    } else {
        vec![]
    }
}
