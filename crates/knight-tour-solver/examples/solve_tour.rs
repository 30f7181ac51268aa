//! Example demonstrating a knight's tour search from the command line.
//!
//! This example shows how to:
//! - Build a `TourSolver` for the standard knight or a custom piece
//! - Search from a given start cell, or from every cell until one succeeds
//! - Print the tour as a grid of step numbers along with search statistics
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_tour
//! ```
//!
//! Choose the board size and start cell:
//!
//! ```sh
//! cargo run --example solve_tour -- --size 6 --start 2,3
//! ```
//!
//! Use a custom piece by listing its offsets (here a wazir):
//!
//! ```sh
//! cargo run --example solve_tour -- --size 5 --offset 1,0 --offset 0,1 --offset=-1,0 --offset=0,-1
//! ```
//!
//! Try every start cell until a tour is found, logging each attempt:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example solve_tour -- --size 5 --any
//! ```

use std::process;

use clap::Parser;
use knight_tour_core::{Cell, MoveProfile, Offset};
use knight_tour_solver::{TourOutcome, TourSearch, TourSolver};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Side length of the board.
    #[arg(long, value_name = "N", default_value_t = 8)]
    size: usize,

    /// Start cell as `X,Y`.
    #[arg(long, value_name = "X,Y", default_value = "0,0", value_parser = parse_pair)]
    start: (i32, i32),

    /// Relative move as `DX,DY`. Repeatable. Defaults to the knight.
    #[arg(long = "offset", value_name = "DX,DY", value_parser = parse_pair)]
    offsets: Vec<(i32, i32)>,

    /// Try every start cell in row-major order until a tour is found.
    #[arg(long)]
    any: bool,
}

fn parse_pair(s: &str) -> Result<(i32, i32), String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `A,B`, got `{s}`"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<i32>()
            .map_err(|e| format!("invalid number `{v}`: {e}"))
    };
    Ok((parse(a)?, parse(b)?))
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let profile = if args.offsets.is_empty() {
        MoveProfile::knight()
    } else {
        MoveProfile::new(args.offsets.iter().copied().map(Offset::from))
    };
    let solver = TourSolver::new(profile);

    let result = if args.any {
        solver.find_any(args.size)
    } else {
        solver.solve(args.size, Cell::from(args.start))
    };
    let search = match result {
        Ok(search) => search,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    print_search(&solver, &search);
    if search.outcome.is_exhausted() {
        process::exit(1);
    }
}

fn print_search(solver: &TourSolver, search: &TourSearch) {
    println!("Profile:");
    let offsets = solver
        .profile()
        .offsets()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    println!("  {}", offsets.join(" "));
    println!();

    match &search.outcome {
        TourOutcome::Complete(tour) => {
            println!("Tour from {} to {}:", tour.start(), tour.end());
            for line in tour.to_string().lines() {
                println!("  {line}");
            }
            println!();
            println!("  moves: {}", tour.move_count());
            println!("  closed: {}", tour.is_closed(solver.profile()));
        }
        TourOutcome::Exhausted => {
            println!("No tour found.");
        }
    }
    println!();

    println!("Stats:");
    println!("  placements: {}", search.stats.placements());
    println!("  backtracks: {}", search.stats.backtracks());
    println!("  max depth: {}", search.stats.max_depth());
}
