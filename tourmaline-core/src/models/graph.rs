#[cfg(test)]
#[path = "../../tests/unit/models/graph_test.rs"]
mod graph_test;

use crate::models::common::{Distance, GeoPoint};
use rustc_hash::FxHashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::iter::empty;

/// A node identifier: any cheap to clone hashable token works, e.g. street names,
/// OSM integers or matrix point indices.
pub trait NodeId: Clone + Eq + Hash + Debug + Send + Sync {}

impl<T: Clone + Eq + Hash + Debug + Send + Sync> NodeId for T {}

/// Provides a read only view on a weighted directed graph for search algorithms.
pub trait RoadGraph {
    /// A node identifier type.
    type Node: NodeId;

    /// Returns outgoing edges of a node as (neighbor, weight) pairs.
    /// An absent node yields an empty iterator, never an error.
    fn neighbors<'a>(&'a self, node: &Self::Node) -> Box<dyn Iterator<Item = (Self::Node, Distance)> + 'a>;

    /// Returns all node identifiers known to the graph.
    fn nodes<'a>(&'a self) -> Box<dyn Iterator<Item = Self::Node> + 'a>;

    /// Tests whether the node belongs to the graph.
    fn has_node(&self, node: &Self::Node) -> bool;
}

/// A directed weighted graph backed by adjacency lists. Mutated only while it is
/// constructed; searches treat it as read only.
#[derive(Clone, Debug)]
pub struct AdjacencyGraph<N: NodeId> {
    adjacency: FxHashMap<N, Vec<(N, Distance)>>,
}

impl<N: NodeId> Default for AdjacencyGraph<N> {
    fn default() -> Self {
        Self { adjacency: FxHashMap::default() }
    }
}

impl<N: NodeId> AdjacencyGraph<N> {
    /// Adds a node without edges. Does nothing when the node is already known.
    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Adds a directed edge with a non negative weight, implicitly creating both
    /// endpoints. Parallel edges between the same ordered pair are kept in insertion
    /// order; relaxation naturally prefers the cheapest of them.
    pub fn add_edge(&mut self, from: N, to: N, weight: Distance) {
        self.add_node(to.clone());
        self.adjacency.entry(from).or_default().push((to, weight));
    }

    /// Adds edges in both directions with the same weight.
    pub fn add_undirected_edge(&mut self, first: N, second: N, weight: Distance) {
        self.add_edge(first.clone(), second.clone(), weight);
        self.add_edge(second, first, weight);
    }

    /// Removes the node and every edge which references it, in both directions.
    pub fn remove_node(&mut self, node: &N) {
        self.adjacency.remove(node);
        self.adjacency.values_mut().for_each(|edges| edges.retain(|(to, _)| to != node));
    }

    /// Returns amount of nodes.
    pub fn size(&self) -> usize {
        self.adjacency.len()
    }
}

impl<N: NodeId> RoadGraph for AdjacencyGraph<N> {
    type Node = N;

    fn neighbors<'a>(&'a self, node: &Self::Node) -> Box<dyn Iterator<Item = (N, Distance)> + 'a> {
        match self.adjacency.get(node) {
            Some(edges) => Box::new(edges.iter().cloned()),
            None => Box::new(empty()),
        }
    }

    fn nodes<'a>(&'a self) -> Box<dyn Iterator<Item = N> + 'a> {
        Box::new(self.adjacency.keys().cloned())
    }

    fn has_node(&self, node: &Self::Node) -> bool {
        self.adjacency.contains_key(node)
    }
}

/// Keeps geographic coordinates of graph nodes. Stored apart from the graph as not
/// every data source provides geometry for every node: a node without a coordinate
/// degrades the search heuristic to zero instead of failing.
#[derive(Clone, Debug)]
pub struct CoordinateIndex<N: NodeId> {
    coordinates: FxHashMap<N, GeoPoint>,
}

impl<N: NodeId> Default for CoordinateIndex<N> {
    fn default() -> Self {
        Self { coordinates: FxHashMap::default() }
    }
}

impl<N: NodeId> CoordinateIndex<N> {
    /// Stores the coordinate of a node.
    pub fn insert(&mut self, node: N, point: GeoPoint) {
        self.coordinates.insert(node, point);
    }

    /// Returns the coordinate of a node if it is known.
    pub fn get(&self, node: &N) -> Option<GeoPoint> {
        self.coordinates.get(node).copied()
    }

    /// Iterates over all known (node, coordinate) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&N, &GeoPoint)> {
        self.coordinates.iter()
    }

    /// Returns amount of known coordinates.
    pub fn size(&self) -> usize {
        self.coordinates.len()
    }
}

impl<N: NodeId> FromIterator<(N, GeoPoint)> for CoordinateIndex<N> {
    fn from_iter<T: IntoIterator<Item = (N, GeoPoint)>>(iter: T) -> Self {
        Self { coordinates: iter.into_iter().collect() }
    }
}
