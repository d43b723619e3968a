//! This module reimports commonly used types.

pub use crate::algorithms::geo::haversine_distance;
pub use crate::algorithms::search::{astar, dijkstra, SearchResult};
pub use crate::algorithms::tsp::{
    held_karp, solve_visiting_order, tour_distance, MemeticConfig, MemeticSolver, TourKind, TourSolution,
    EXACT_SOLVER_LIMIT,
};
pub use crate::construction::{build_from_coordinates, build_from_graph, build_from_source, MatrixSource};
pub use crate::models::{
    AdjacencyGraph, CoordinateIndex, Distance, DistanceMatrix, GeoPoint, MatrixGraph, NodeId, RoadGraph,
};
pub use crate::solver::{
    resolve_nearest, MapCache, MapData, MatrixStrategy, RouteLeg, RoutePlan, RouteSolver, RouteSolverBuilder,
    TrafficIndex,
};
pub use crate::utils::{
    compare_floats, DefaultRandom, Environment, Float, InfoLogger, Random, RandomGen, RouteError, RouteResult, Timer,
};
