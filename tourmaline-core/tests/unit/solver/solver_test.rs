use super::*;
use crate::algorithms::tsp::TourKind;
use crate::construction::MatrixSource;
use crate::utils::DefaultRandom;

type CityNode = &'static str;

const NW: GeoPoint = GeoPoint { lat: 21.02, lng: 105.80 };
const NE: GeoPoint = GeoPoint { lat: 21.02, lng: 105.81 };
const SE: GeoPoint = GeoPoint { lat: 21.01, lng: 105.81 };
const SW: GeoPoint = GeoPoint { lat: 21.01, lng: 105.80 };

/// Four corners of a city block connected along the perimeter; every road is
/// 1.2 km which is above the straight line distance between its endpoints.
fn create_city_network() -> (AdjacencyGraph<CityNode>, CoordinateIndex<CityNode>) {
    let mut graph = AdjacencyGraph::default();
    graph.add_undirected_edge("nw", "ne", 1.2);
    graph.add_undirected_edge("ne", "se", 1.2);
    graph.add_undirected_edge("se", "sw", 1.2);
    graph.add_undirected_edge("sw", "nw", 1.2);

    let coordinates = [("nw", NW), ("ne", NE), ("se", SE), ("sw", SW)].into_iter().collect();

    (graph, coordinates)
}

fn create_test_environment() -> Arc<Environment> {
    Arc::new(Environment::new(Arc::new(DefaultRandom::new_with_seed(123)), Arc::new(|_: &str| {})))
}

fn create_solver(kind: TourKind) -> RouteSolver<CityNode> {
    let (graph, coordinates) = create_city_network();

    RouteSolverBuilder::new(graph, coordinates)
        .with_tour_kind(kind)
        .with_environment(create_test_environment())
        .build()
}

struct StaticSource {
    rows: Vec<Vec<Float>>,
}

impl MatrixSource for StaticSource {
    fn distance_matrix(&self, _: &[GeoPoint]) -> RouteResult<Vec<Vec<Float>>> {
        Ok(self.rows.clone())
    }
}

struct TimedOutSource;

impl MatrixSource for TimedOutSource {
    fn distance_matrix(&self, _: &[GeoPoint]) -> RouteResult<Vec<Vec<Float>>> {
        Err(RouteError::MatrixSource("request timed out after 40s".to_string()))
    }
}

#[test]
fn can_solve_round_trip_over_four_waypoints() {
    let solver = create_solver(TourKind::Closed);

    let plan = solver.solve(&[NW, NE, SE, SW]).unwrap();

    assert_eq!(plan.order.len(), 5);
    assert_eq!(plan.order[0], 0);
    assert_eq!(plan.order[4], 0);
    assert_eq!(plan.distance, 4.8);
    assert_eq!(plan.legs.len(), 4);
    assert!(plan.legs.iter().all(|leg| !leg.estimated));
    assert_eq!(plan.matrix.size(), 4);
    assert_eq!(plan.geometry.first(), Some(&NW));
}

#[test]
fn can_bypass_ordering_for_two_waypoints() {
    let closed = create_solver(TourKind::Closed).solve(&[NW, NE]).unwrap();
    assert_eq!(closed.order, vec![0, 1, 0]);
    assert_eq!(closed.distance, 2.4);

    let open = create_solver(TourKind::Open).solve(&[NW, NE]).unwrap();
    assert_eq!(open.order, vec![0, 1]);
    assert_eq!(open.distance, 1.2);
    assert_eq!(open.legs.len(), 1);
    assert_eq!(open.legs[0].path, vec!["nw", "ne"]);
}

#[test]
fn can_degrade_unreachable_leg_to_estimate() {
    let mut graph = AdjacencyGraph::default();
    graph.add_node("west");
    graph.add_node("east");
    let west = GeoPoint::new(21.0, 105.8);
    let east = GeoPoint::new(21.0, 105.9);
    let coordinates = [("west", west), ("east", east)].into_iter().collect();

    let solver = RouteSolverBuilder::new(graph, coordinates)
        .with_tour_kind(TourKind::Open)
        .with_environment(create_test_environment())
        .build();

    let plan = solver.solve(&[west, east]).unwrap();

    assert_eq!(plan.legs.len(), 1);
    assert!(plan.legs[0].estimated);
    assert!(plan.legs[0].path.is_empty());
    let expected = round_distance(haversine_distance(&west, &east));
    assert_eq!(plan.distance, expected);
    assert_eq!(plan.geometry, vec![west, east]);
}

#[test]
fn can_fail_distinctly_on_external_source_outage() {
    let (graph, coordinates) = create_city_network();
    let solver = RouteSolverBuilder::new(graph, coordinates)
        .with_matrix_strategy(MatrixStrategy::External(Arc::new(TimedOutSource)))
        .with_environment(create_test_environment())
        .build();

    let result = solver.solve(&[NW, NE, SE, SW]);

    assert!(matches!(result, Err(RouteError::MatrixSource(_))));
}

#[test]
fn can_order_waypoints_with_external_matrix() {
    let (graph, coordinates) = create_city_network();
    // perimeter neighbors at 1200m, diagonals at 1700m
    let solver = RouteSolverBuilder::new(graph, coordinates)
        .with_matrix_strategy(MatrixStrategy::External(Arc::new(StaticSource {
            rows: vec![
                vec![0., 1200., 1700., 1200.],
                vec![1200., 0., 1200., 1700.],
                vec![1700., 1200., 0., 1200.],
                vec![1200., 1700., 1200., 0.],
            ],
        })))
        .with_environment(create_test_environment())
        .build();

    let plan = solver.solve(&[NW, NE, SE, SW]).unwrap();

    assert_eq!(plan.distance, 4.8);
    assert!(plan.legs.iter().all(|leg| !leg.estimated));
}

#[test]
fn can_use_great_circle_matrix_without_roads() {
    let solver = RouteSolverBuilder::new(AdjacencyGraph::<CityNode>::default(), CoordinateIndex::default())
        .with_matrix_strategy(MatrixStrategy::GreatCircle)
        .with_tour_kind(TourKind::Open)
        .with_environment(create_test_environment())
        .build();

    let plan = solver.solve(&[NW, NE, SE]).unwrap();

    assert!(plan.distance > 0.);
    assert!(plan.legs.iter().all(|leg| leg.estimated));
}

#[test]
fn can_apply_traffic_factors() {
    let (graph, coordinates) = create_city_network();
    let mut traffic = TrafficIndex::default();
    traffic.set_factor("nw", 2.);

    let solver = RouteSolverBuilder::new(graph, coordinates)
        .with_traffic(traffic)
        .with_tour_kind(TourKind::Open)
        .with_environment(create_test_environment())
        .build();

    let plan = solver.solve(&[NW, NE]).unwrap();

    assert_eq!(plan.distance, 2.4);
}

#[test]
fn can_reject_invalid_input() {
    let solver = create_solver(TourKind::Closed);

    assert!(matches!(solver.solve(&[NW]), Err(RouteError::InvalidInput(_))));
    assert!(matches!(solver.solve(&[]), Err(RouteError::InvalidInput(_))));
    assert!(matches!(
        solver.solve(&[NW, GeoPoint::new(91., 105.8)]),
        Err(RouteError::InvalidInput(_))
    ));
}
