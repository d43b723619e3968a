use crate::models::{AdjacencyGraph, CoordinateIndex, DistanceMatrix, GeoPoint};
use crate::utils::{DefaultRandom, Float, Random};

/// A node token used by search tests.
pub type TestNode = &'static str;

/// Creates the directed sample graph shared by search tests.
pub fn create_sample_graph() -> AdjacencyGraph<TestNode> {
    let mut graph = AdjacencyGraph::default();

    graph.add_edge("A", "B", 4.);
    graph.add_edge("A", "C", 2.);
    graph.add_edge("B", "C", 1.);
    graph.add_edge("B", "D", 5.);
    graph.add_edge("C", "D", 8.);
    graph.add_edge("C", "E", 10.);
    graph.add_edge("D", "E", 2.);
    graph.add_edge("D", "F", 6.);
    graph.add_edge("E", "F", 2.);

    graph
}

/// Creates coordinates for the sample graph laid out on a tight grid: every edge
/// weight stays far above the straight line distance which keeps the great circle
/// estimate admissible.
pub fn create_sample_coordinates() -> CoordinateIndex<TestNode> {
    [
        ("A", GeoPoint::new(21.000, 105.800)),
        ("B", GeoPoint::new(21.001, 105.801)),
        ("C", GeoPoint::new(21.001, 105.800)),
        ("D", GeoPoint::new(21.002, 105.801)),
        ("E", GeoPoint::new(21.002, 105.802)),
        ("F", GeoPoint::new(21.003, 105.802)),
    ]
    .into_iter()
    .collect()
}

/// Creates a matrix from the given rows.
pub fn create_matrix(rows: &[&[Float]]) -> DistanceMatrix {
    DistanceMatrix::from_rows(rows.iter().map(|row| row.to_vec()).collect()).expect("invalid matrix rows")
}

/// Creates the matrix of a unit square with corners enumerated around the
/// perimeter: sides cost 1, diagonals sqrt(2).
pub fn create_unit_square_matrix() -> DistanceMatrix {
    let diagonal = 2_f64.sqrt();

    create_matrix(&[
        &[0., 1., diagonal, 1.],
        &[1., 0., 1., diagonal],
        &[diagonal, 1., 0., 1.],
        &[1., diagonal, 1., 0.],
    ])
}

/// Creates a symmetric matrix of random distances, reproducible by seed.
pub fn create_random_matrix(size: usize, seed: u64) -> DistanceMatrix {
    let random = DefaultRandom::new_with_seed(seed);
    let mut matrix = DistanceMatrix::new(size);

    for from in 0..size {
        for to in (from + 1)..size {
            let distance = random.uniform_real(1., 100.);
            matrix.set(from, to, distance);
            matrix.set(to, from, distance);
        }
    }

    matrix
}
