//! Reads a routing problem from a json file, solves it and writes the solution
//! as json to stdout or a file.

use clap::{Arg, ArgAction, ArgMatches, Command};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::sync::Arc;
use tourmaline_core::prelude::*;

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const GENERATIONS_ARG_NAME: &str = "max-generations";
const POPULATION_ARG_NAME: &str = "population-size";
const SEED_ARG_NAME: &str = "seed";
const OPEN_TOUR_ARG_NAME: &str = "open-tour";
const MATRIX_ARG_NAME: &str = "matrix";
const OUT_RESULT_ARG_NAME: &str = "out-result";

/// A routing problem definition: waypoints to visit plus an optional road network.
#[derive(Deserialize)]
struct ProblemDto {
    waypoints: Vec<GeoPointDto>,
    #[serde(default)]
    edges: Vec<EdgeDto>,
    #[serde(default)]
    coordinates: HashMap<String, GeoPointDto>,
    #[serde(default)]
    traffic: HashMap<String, f64>,
}

#[derive(Clone, Copy, Deserialize, Serialize)]
struct GeoPointDto {
    lat: f64,
    lng: f64,
}

#[derive(Deserialize)]
struct EdgeDto {
    from: String,
    to: String,
    distance: f64,
    #[serde(default)]
    oneway: bool,
}

#[derive(Serialize)]
struct SolutionDto {
    order: Vec<usize>,
    distance: f64,
    geometry: Vec<GeoPointDto>,
    legs: Vec<LegDto>,
}

#[derive(Serialize)]
struct LegDto {
    from: usize,
    to: usize,
    distance: f64,
    estimated: bool,
}

/// Creates the `solve` subcommand definition.
pub fn get_solve_command() -> Command {
    Command::new("solve")
        .about("Solves a multi stop routing problem from a json file")
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(1))
        .arg(
            Arg::new(GENERATIONS_ARG_NAME)
                .help("Specifies maximum amount of generations for the memetic search")
                .short('g')
                .long(GENERATIONS_ARG_NAME)
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new(POPULATION_ARG_NAME)
                .help("Specifies population size for the memetic search")
                .short('p')
                .long(POPULATION_ARG_NAME)
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Seeds the random generator to get reproducible results")
                .short('s')
                .long(SEED_ARG_NAME)
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new(OPEN_TOUR_ARG_NAME)
                .help("Keeps the route open instead of returning to the start")
                .long(OPEN_TOUR_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(MATRIX_ARG_NAME)
                .help("Overrides the distance matrix strategy")
                .short('m')
                .long(MATRIX_ARG_NAME)
                .value_parser(["graph", "greatcircle"]),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME),
        )
}

/// Runs the solve command.
pub fn run_solve(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).expect("PROBLEM is required");
    let problem: ProblemDto = serde_json::from_reader(BufReader::new(File::open(problem_path)?))?;

    let mut graph = AdjacencyGraph::default();
    let mut coordinates = CoordinateIndex::default();
    for (node, point) in &problem.coordinates {
        coordinates.insert(node.clone(), GeoPoint::new(point.lat, point.lng));
    }
    for edge in &problem.edges {
        if edge.oneway {
            graph.add_edge(edge.from.clone(), edge.to.clone(), edge.distance);
        } else {
            graph.add_undirected_edge(edge.from.clone(), edge.to.clone(), edge.distance);
        }
    }

    let mut traffic = TrafficIndex::default();
    problem.traffic.iter().for_each(|(node, &factor)| traffic.set_factor(node.clone(), factor));

    let strategy = match matches.get_one::<String>(MATRIX_ARG_NAME).map(String::as_str) {
        Some("graph") => MatrixStrategy::GraphSearch,
        Some("greatcircle") => MatrixStrategy::GreatCircle,
        // road data present favors the graph, otherwise straight lines
        None if problem.edges.is_empty() => MatrixStrategy::GreatCircle,
        None => MatrixStrategy::GraphSearch,
        Some(other) => unreachable!("unexpected matrix strategy: {other}"),
    };

    let random: Arc<dyn Random> = match matches.get_one::<u64>(SEED_ARG_NAME) {
        Some(&seed) => Arc::new(DefaultRandom::new_with_seed(seed)),
        None => Arc::new(DefaultRandom::default()),
    };
    let environment = Arc::new(Environment::new(random, Arc::new(|msg: &str| eprintln!("{msg}"))));

    let mut config = MemeticConfig::default();
    if let Some(&generations) = matches.get_one::<usize>(GENERATIONS_ARG_NAME) {
        config.generations = generations;
    }
    if let Some(&population_size) = matches.get_one::<usize>(POPULATION_ARG_NAME) {
        config.population_size = population_size;
    }

    let kind = if matches.get_flag(OPEN_TOUR_ARG_NAME) { TourKind::Open } else { TourKind::Closed };

    let solver = RouteSolverBuilder::new(graph, coordinates)
        .with_traffic(traffic)
        .with_matrix_strategy(strategy)
        .with_tour_kind(kind)
        .with_memetic_config(config)
        .with_environment(environment)
        .build();

    let waypoints: Vec<GeoPoint> = problem.waypoints.iter().map(|point| GeoPoint::new(point.lat, point.lng)).collect();
    let plan = solver.solve(&waypoints)?;

    let solution = SolutionDto {
        order: plan.order.clone(),
        distance: plan.distance,
        geometry: plan.geometry.iter().map(|point| GeoPointDto { lat: point.lat, lng: point.lng }).collect(),
        legs: plan
            .legs
            .iter()
            .map(|leg| LegDto { from: leg.from, to: leg.to, distance: leg.distance, estimated: leg.estimated })
            .collect(),
    };

    match matches.get_one::<String>(OUT_RESULT_ARG_NAME) {
        Some(path) => serde_json::to_writer_pretty(BufWriter::new(File::create(path)?), &solution)?,
        None => {
            let mut stdout = std::io::stdout();
            serde_json::to_writer_pretty(&mut stdout, &solution)?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}
