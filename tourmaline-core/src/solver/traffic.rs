#[cfg(test)]
#[path = "../../tests/unit/solver/traffic_test.rs"]
mod traffic_test;

use crate::models::{AdjacencyGraph, NodeId, RoadGraph};
use crate::utils::Float;
use rustc_hash::FxHashMap;

/// Static per node congestion multipliers.
///
/// A factor of 1.0 keeps the base weight, larger values penalize every road leaving
/// the node. Factors above 1.0 can push edge weights past the straight line distance
/// between their endpoints, which weakens the optimality guarantee of the guided
/// search (see [`astar`](crate::algorithms::search::astar)).
#[derive(Clone, Debug)]
pub struct TrafficIndex<N: NodeId> {
    factors: FxHashMap<N, Float>,
}

impl<N: NodeId> Default for TrafficIndex<N> {
    fn default() -> Self {
        Self { factors: FxHashMap::default() }
    }
}

impl<N: NodeId> TrafficIndex<N> {
    /// Sets the congestion factor of a node.
    pub fn set_factor(&mut self, node: N, factor: Float) {
        self.factors.insert(node, factor);
    }

    /// Returns the factor of a node, 1.0 when nothing is known about it.
    pub fn factor(&self, node: &N) -> Float {
        self.factors.get(node).copied().unwrap_or(1.)
    }

    /// Produces a copy of the graph with every outgoing edge weight scaled by the
    /// factor of its source node.
    pub fn apply(&self, graph: &AdjacencyGraph<N>) -> AdjacencyGraph<N> {
        let mut adjusted = AdjacencyGraph::default();

        for node in graph.nodes() {
            adjusted.add_node(node.clone());
            for (neighbor, weight) in graph.neighbors(&node) {
                adjusted.add_edge(node.clone(), neighbor, weight * self.factor(&node));
            }
        }

        adjusted
    }
}
