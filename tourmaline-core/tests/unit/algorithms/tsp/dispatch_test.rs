use super::*;
use crate::helpers::*;
use crate::utils::DefaultRandom;

fn solve(matrix: &DistanceMatrix, kind: TourKind) -> TourSolution {
    solve_visiting_order(matrix, kind, &MemeticConfig::default(), Arc::new(DefaultRandom::new_with_seed(1)))
}

#[test]
fn can_handle_trivial_inputs() {
    let empty = solve(&DistanceMatrix::new(0), TourKind::Closed);
    assert!(empty.tour.is_empty());
    assert_eq!(empty.distance, 0.);

    let single = solve(&DistanceMatrix::new(1), TourKind::Closed);
    assert_eq!(single.tour, vec![0]);
    assert_eq!(single.distance, 0.);
}

#[test]
fn can_bypass_solvers_for_two_points() {
    let matrix = create_matrix(&[&[0., 3.], &[5., 0.]]);

    let open = solve(&matrix, TourKind::Open);
    assert_eq!(open.tour, vec![0, 1]);
    assert_eq!(open.distance, 3.);

    let closed = solve(&matrix, TourKind::Closed);
    assert_eq!(closed.tour, vec![0, 1, 0]);
    assert_eq!(closed.distance, 8.);
}

#[test]
fn can_delegate_small_instances_to_exact_solver() {
    let matrix = create_unit_square_matrix();

    let solution = solve(&matrix, TourKind::Closed);
    let exact = held_karp(&matrix, TourKind::Closed);

    assert_eq!(solution.tour, exact.tour);
    assert_eq!(solution.distance, exact.distance);
    assert_eq!(solution.distance, 4.);
}

#[test]
fn can_delegate_large_instances_to_memetic_solver() {
    let size = EXACT_SOLVER_LIMIT + 3;
    let matrix = create_random_matrix(size, 23);

    let solution = solve(&matrix, TourKind::Closed);

    assert!(solution.distance.is_finite());
    assert_eq!(solution.tour.len(), size + 1);
    assert_eq!(solution.tour[0], 0);
    assert_eq!(solution.tour[size], 0);

    let mut interior: Vec<usize> = solution.tour[1..size].to_vec();
    interior.sort_unstable();
    assert_eq!(interior, (1..size).collect::<Vec<_>>());

    let recomputed = tour_distance(&matrix, &solution.tour, TourKind::Closed);
    assert!((solution.distance - recomputed).abs() < 1e-9);
}

#[test]
fn can_price_both_tour_representations_identically() {
    let matrix = create_unit_square_matrix();

    let with_repeated_start = tour_distance(&matrix, &[0, 1, 2, 3, 0], TourKind::Closed);
    let without_repeated_start = tour_distance(&matrix, &[0, 1, 2, 3], TourKind::Closed);

    assert_eq!(with_repeated_start, 4.);
    assert_eq!(without_repeated_start, 4.);
}
