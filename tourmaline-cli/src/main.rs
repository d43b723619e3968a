//! A command line interface to the *tourmaline* route solver.
//!

mod solve;

use clap::Command;
use std::process;

fn main() {
    let matches = Command::new("tourmaline")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Computes shortest multi stop routes over a road network")
        .subcommand(solve::get_solve_command())
        .get_matches();

    match matches.subcommand() {
        Some(("solve", solve_matches)) => {
            if let Err(err) = solve::run_solve(solve_matches) {
                eprintln!("{err}");
                process::exit(1);
            }
        }
        _ => {
            eprintln!("No subcommand was used. Use -h to print help information.");
            process::exit(1);
        }
    }
}
