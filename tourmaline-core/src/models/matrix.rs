#[cfg(test)]
#[path = "../../tests/unit/models/matrix_test.rs"]
mod matrix_test;

use crate::models::common::Distance;
use crate::models::graph::RoadGraph;
use crate::utils::{Float, RouteError, RouteResult};
use std::iter::empty;

/// A dense matrix of pairwise travel distances among an ordered point set.
///
/// The matrix does not need to be symmetric (road networks are directed), the
/// diagonal is zero and unreachable pairs keep infinite distance.
#[derive(Clone, Debug)]
pub struct DistanceMatrix {
    data: Vec<Float>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a matrix of the given dimension with zero diagonal and all other
    /// entries marked unreachable.
    pub fn new(size: usize) -> Self {
        let mut data = vec![Float::INFINITY; size * size];
        (0..size).for_each(|idx| data[idx * size + idx] = 0.);

        Self { data, size }
    }

    /// Creates a matrix from row major data, rejecting non square input.
    pub fn from_rows(rows: Vec<Vec<Float>>) -> RouteResult<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return Err(RouteError::InvalidInput("distance matrix must be square".to_string()));
        }

        Ok(Self { data: rows.into_iter().flatten().collect(), size })
    }

    /// Returns matrix dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the distance of the ordered pair.
    pub fn get(&self, from: usize, to: usize) -> Distance {
        self.data[from * self.size + to]
    }

    /// Sets the distance of the ordered pair.
    pub fn set(&mut self, from: usize, to: usize, distance: Distance) {
        self.data[from * self.size + to] = distance;
    }

    /// Tests whether the pair is connected by a finite distance.
    pub fn is_reachable(&self, from: usize, to: usize) -> bool {
        self.get(from, to).is_finite()
    }

    /// Applies an operation to every entry, e.g. for unit conversion.
    pub fn map<F: Fn(Float) -> Float>(mut self, map_op: F) -> Self {
        self.data.iter_mut().for_each(|value| *value = map_op(*value));
        self
    }
}

/// Presents a distance matrix as a complete graph over point indices, so matrix
/// based and graph based callers share the same search code.
pub struct MatrixGraph<'a> {
    matrix: &'a DistanceMatrix,
}

impl<'a> MatrixGraph<'a> {
    /// Creates a graph view over the matrix.
    pub fn new(matrix: &'a DistanceMatrix) -> Self {
        Self { matrix }
    }
}

impl RoadGraph for MatrixGraph<'_> {
    type Node = usize;

    fn neighbors<'b>(&'b self, node: &Self::Node) -> Box<dyn Iterator<Item = (usize, Distance)> + 'b> {
        let from = *node;
        if from >= self.matrix.size() {
            return Box::new(empty());
        }

        Box::new(
            (0..self.matrix.size())
                .filter(move |&to| to != from)
                .map(move |to| (to, self.matrix.get(from, to)))
                .filter(|(_, distance)| distance.is_finite()),
        )
    }

    fn nodes<'b>(&'b self) -> Box<dyn Iterator<Item = usize> + 'b> {
        Box::new(0..self.matrix.size())
    }

    fn has_node(&self, node: &Self::Node) -> bool {
        *node < self.matrix.size()
    }
}
