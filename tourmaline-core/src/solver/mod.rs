//! Composes graph search, matrix construction and order solving into one end to
//! end route computation.

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

mod cache;
pub use self::cache::{MapCache, MapData};

mod resolution;
pub use self::resolution::resolve_nearest;

mod traffic;
pub use self::traffic::TrafficIndex;

use crate::algorithms::geo::haversine_distance;
use crate::algorithms::search::astar;
use crate::algorithms::tsp::{solve_visiting_order, MemeticConfig, TourKind};
use crate::construction::{build_from_coordinates, build_from_graph, build_from_source, MatrixSource};
use crate::models::{AdjacencyGraph, CoordinateIndex, DistanceMatrix, GeoPoint, NodeId};
use crate::utils::{Environment, Float, RouteError, RouteResult, Timer};
use std::sync::Arc;

/// Selects how the waypoint distance matrix is produced.
///
/// There is no canonical preference order between the strategies: the choice stays
/// an explicit caller decision made at build time.
#[derive(Clone)]
pub enum MatrixStrategy {
    /// One shortest path search per ordered waypoint pair on the road graph.
    GraphSearch,
    /// Straight line distances over the raw coordinates; useful without a graph.
    GreatCircle,
    /// An external service returning meters, normalized to kilometers here.
    External(Arc<dyn MatrixSource + Send + Sync>),
}

/// A single stitched leg between two consecutive waypoints of the final route.
#[derive(Clone, Debug)]
pub struct RouteLeg<N> {
    /// Index of the leg origin in the requested waypoint list.
    pub from: usize,
    /// Index of the leg destination in the requested waypoint list.
    pub to: usize,
    /// Graph nodes of the detailed road path, empty for estimated legs.
    pub path: Vec<N>,
    /// Leg distance in kilometers.
    pub distance: Float,
    /// True when the leg is a straight line estimate because no road path exists.
    pub estimated: bool,
}

/// An end to end route computation result.
#[derive(Clone, Debug)]
pub struct RoutePlan<N> {
    /// Waypoint visiting order as indices into the request; closed tours repeat
    /// the start at the end.
    pub order: Vec<usize>,
    /// Total travel distance in kilometers, rounded to two decimals.
    pub distance: Float,
    /// Route geometry as an ordered coordinate sequence.
    pub geometry: Vec<GeoPoint>,
    /// Detailed per leg paths, kept for diagnostics.
    pub legs: Vec<RouteLeg<N>>,
    /// The waypoint distance matrix, kept for diagnostics.
    pub matrix: DistanceMatrix,
}

/// Computes shortest multi stop routes over a road network.
///
/// Instances are created via [`RouteSolverBuilder`] and are cheap to share between
/// requests: all state is read only after construction. A single computation blocks
/// the calling thread for its whole duration; services wrapping the solver should
/// offload each request to a worker and enforce their own deadlines.
pub struct RouteSolver<N: NodeId> {
    graph: AdjacencyGraph<N>,
    coordinates: CoordinateIndex<N>,
    matrix_strategy: MatrixStrategy,
    tour_kind: TourKind,
    memetic_config: MemeticConfig,
    environment: Arc<Environment>,
}

/// Provides a way to configure and build [`RouteSolver`].
pub struct RouteSolverBuilder<N: NodeId> {
    graph: AdjacencyGraph<N>,
    coordinates: CoordinateIndex<N>,
    traffic: Option<TrafficIndex<N>>,
    matrix_strategy: MatrixStrategy,
    tour_kind: TourKind,
    memetic_config: MemeticConfig,
    environment: Option<Arc<Environment>>,
}

impl<N: NodeId> RouteSolverBuilder<N> {
    /// Creates a builder over the given road network and its geometry.
    pub fn new(graph: AdjacencyGraph<N>, coordinates: CoordinateIndex<N>) -> Self {
        Self {
            graph,
            coordinates,
            traffic: None,
            matrix_strategy: MatrixStrategy::GraphSearch,
            tour_kind: TourKind::Closed,
            memetic_config: MemeticConfig::default(),
            environment: None,
        }
    }

    /// Applies static congestion factors to the graph at build time.
    pub fn with_traffic(mut self, traffic: TrafficIndex<N>) -> Self {
        self.traffic = Some(traffic);
        self
    }

    /// Overrides the distance matrix strategy.
    pub fn with_matrix_strategy(mut self, strategy: MatrixStrategy) -> Self {
        self.matrix_strategy = strategy;
        self
    }

    /// Switches between round trips and open ended routes.
    pub fn with_tour_kind(mut self, kind: TourKind) -> Self {
        self.tour_kind = kind;
        self
    }

    /// Overrides parameters of the memetic search.
    pub fn with_memetic_config(mut self, config: MemeticConfig) -> Self {
        self.memetic_config = config;
        self
    }

    /// Sets the shared environment (randomization and logging).
    pub fn with_environment(mut self, environment: Arc<Environment>) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Builds the solver.
    pub fn build(self) -> RouteSolver<N> {
        let graph = match &self.traffic {
            Some(traffic) => traffic.apply(&self.graph),
            None => self.graph,
        };

        RouteSolver {
            graph,
            coordinates: self.coordinates,
            matrix_strategy: self.matrix_strategy,
            tour_kind: self.tour_kind,
            memetic_config: self.memetic_config,
            environment: self.environment.unwrap_or_else(|| Arc::new(Environment::default())),
        }
    }
}

impl<N: NodeId> RouteSolver<N> {
    /// Computes a route visiting all given waypoints.
    ///
    /// Waypoints are snapped to their nearest graph nodes, the distance matrix is
    /// built with the configured strategy and the visiting order is decided by the
    /// ordering solver; two waypoints bypass it entirely. The detailed road
    /// geometry of every leg comes from one guided search per consecutive pair.
    ///
    /// A leg without a road path degrades to a straight line estimate instead of
    /// failing the whole request; an external matrix source failure does fail it,
    /// as no consistent fallback distances exist in that case.
    pub fn solve(&self, waypoints: &[GeoPoint]) -> RouteResult<RoutePlan<N>> {
        validate_waypoints(waypoints)?;

        let resolved: Vec<Option<N>> =
            waypoints.iter().map(|point| resolve_nearest(&self.coordinates, point)).collect();

        let timer = Timer::start();
        let matrix = self.build_matrix(waypoints, &resolved)?;
        (self.environment.logger)(&format!(
            "distance matrix for {} waypoints built in {}ms",
            waypoints.len(),
            timer.elapsed_millis()
        ));

        let order = if waypoints.len() == 2 {
            match self.tour_kind {
                TourKind::Open => vec![0, 1],
                TourKind::Closed => vec![0, 1, 0],
            }
        } else {
            let timer = Timer::start();
            let solution =
                solve_visiting_order(&matrix, self.tour_kind, &self.memetic_config, self.environment.random.clone());
            (self.environment.logger)(&format!(
                "visiting order of {} waypoints solved in {}ms",
                waypoints.len(),
                timer.elapsed_millis()
            ));
            solution.tour
        };

        let legs = self.stitch_legs(waypoints, &resolved, &order);
        let geometry = self.build_geometry(waypoints, &legs);
        let distance = round_distance(legs.iter().map(|leg| leg.distance).sum());

        Ok(RoutePlan { order, distance, geometry, legs, matrix })
    }

    fn build_matrix(&self, waypoints: &[GeoPoint], resolved: &[Option<N>]) -> RouteResult<DistanceMatrix> {
        match &self.matrix_strategy {
            MatrixStrategy::GraphSearch => {
                // waypoints with no node in the graph keep infinite rows, their
                // legs are estimated at the stitching stage
                let present: Vec<(usize, N)> = resolved
                    .iter()
                    .enumerate()
                    .filter_map(|(idx, node)| node.clone().map(|node| (idx, node)))
                    .collect();
                let nodes: Vec<N> = present.iter().map(|(_, node)| node.clone()).collect();
                let partial = build_from_graph(&self.graph, &self.coordinates, &nodes);

                let mut matrix = DistanceMatrix::new(waypoints.len());
                for (row, (from, _)) in present.iter().enumerate() {
                    for (col, (to, _)) in present.iter().enumerate() {
                        if row != col {
                            matrix.set(*from, *to, partial.get(row, col));
                        }
                    }
                }

                Ok(matrix)
            }
            MatrixStrategy::GreatCircle => Ok(build_from_coordinates(waypoints)),
            MatrixStrategy::External(source) => build_from_source(source.as_ref(), waypoints),
        }
    }

    fn stitch_legs(&self, waypoints: &[GeoPoint], resolved: &[Option<N>], order: &[usize]) -> Vec<RouteLeg<N>> {
        order
            .windows(2)
            .map(|pair| {
                let (from, to) = (pair[0], pair[1]);

                if let (Some(start), Some(end)) = (&resolved[from], &resolved[to]) {
                    let result = astar(&self.graph, &self.coordinates, start, end);
                    if result.is_found() {
                        return RouteLeg { from, to, path: result.path, distance: result.distance, estimated: false };
                    }
                }

                // degraded result policy: an unreachable pair becomes a straight line
                RouteLeg {
                    from,
                    to,
                    path: vec![],
                    distance: haversine_distance(&waypoints[from], &waypoints[to]),
                    estimated: true,
                }
            })
            .collect()
    }

    fn build_geometry(&self, waypoints: &[GeoPoint], legs: &[RouteLeg<N>]) -> Vec<GeoPoint> {
        let mut geometry: Vec<GeoPoint> = Vec::new();

        for leg in legs {
            let mut points: Vec<GeoPoint> =
                leg.path.iter().filter_map(|node| self.coordinates.get(node)).collect();
            if points.is_empty() {
                points = vec![waypoints[leg.from], waypoints[leg.to]];
            }

            for point in points {
                if geometry.last() != Some(&point) {
                    geometry.push(point);
                }
            }
        }

        geometry
    }
}

fn validate_waypoints(waypoints: &[GeoPoint]) -> RouteResult<()> {
    if waypoints.len() < 2 {
        return Err(RouteError::InvalidInput("at least two waypoints are required".to_string()));
    }

    match waypoints.iter().position(|point| !point.is_valid()) {
        Some(idx) => Err(RouteError::InvalidInput(format!("waypoint {idx} is outside the valid coordinate range"))),
        None => Ok(()),
    }
}

fn round_distance(distance: Float) -> Float {
    if distance.is_finite() {
        (distance * 100.).round() / 100.
    } else {
        distance
    }
}
