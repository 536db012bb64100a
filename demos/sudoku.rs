//! Solves a Sudoku puzzle and prints the report: solution grid, domains
//! after AC-3, and the solver statistics.
//!
//! ```text
//! cargo run --example sudoku -- [PUZZLE_FILE] [--stats-json]
//! ```

use std::{fs, path::PathBuf};

use clap::Parser;
use ligare::{
    problems::sudoku::{build_csp, parse_grid, render_domains, render_solution},
    solver::stats::render_stats_table,
};
use tracing_subscriber::EnvFilter;

// An easy puzzle, used when no file is given.
const DEFAULT_PUZZLE: &str = "\
530070000
600195000
098000060
800060003
400803001
700020006
060000280
000419005
000080079";

#[derive(Parser)]
struct Args {
    /// Path to a puzzle file: nine rows of nine digits, 0 for an empty cell.
    puzzle: Option<PathBuf>,
    /// Emit the solver statistics as JSON instead of a table.
    #[arg(long)]
    stats_json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let text = match &args.puzzle {
        Some(path) => fs::read_to_string(path)?,
        None => DEFAULT_PUZZLE.to_string(),
    };

    let grid = parse_grid(&text)?;
    let mut csp = build_csp(&grid)?;

    if !csp.run_arc_consistency() {
        println!("Inconsistent puzzle!");
        return Ok(());
    }

    match csp.run_backtracking_search()? {
        Some(solution) => {
            println!("Solution:");
            print!("{}", render_solution(&solution));
        }
        None => println!("No solution found."),
    }

    if let Some(reduced) = csp.domains_after_reduction() {
        println!("\nDomains after AC-3:");
        println!("{}", render_domains(reduced));
    }

    if args.stats_json {
        println!("{}", serde_json::to_string_pretty(csp.stats())?);
    } else {
        println!("{}", render_stats_table(csp.stats()));
    }

    Ok(())
}
