use clap::Parser;
use frontier::io::{self, LoadError};
use frontier::limits::SearchLimits;
use frontier::puzzle::{Board, MoveSet, TilePuzzle};
use frontier::solvers::{self, Termination};
use std::path::PathBuf;
use std::process;

/// Sliding-tile solver supporting the original, circular and luddy move
/// sets.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the start-state file (16 whitespace-separated tiles, 0
    /// marks the blank)
    board_file: PathBuf,

    /// Move set: original, circular, or luddy
    variant: String,

    /// Abort the search after this many seconds
    #[clap(long)]
    time_limit: Option<f64>,

    /// Abort the search after this many expansions
    #[clap(long)]
    expansion_limit: Option<usize>,
}

fn run(args: &Args) -> Result<(), LoadError> {
    let variant: MoveSet = args.variant.parse()?;
    let board: Board = io::read_to_string(&args.board_file)?.parse()?;

    println!("Start state:\n{board}");

    if !variant.is_solvable(&board) {
        println!("Inf");

        return Ok(());
    }

    println!("Solving...");

    let limits = SearchLimits {
        time_limit: args.time_limit,
        expansion_limit: args.expansion_limit,
    };
    let report = solvers::search(&TilePuzzle::new(board, variant), limits);

    match report.termination {
        Termination::Goal => {
            let moves: String = report.path.iter().collect();
            println!("--- {} seconds ---", report.time);
            println!("Solution found in {} moves:\n{moves}", report.path.len());
        }
        Termination::Exhausted => println!("Inf"),
        Termination::TimeLimit | Termination::ExpansionLimit => {
            println!("Search aborted after {} expansions.", report.expanded);
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(error) = run(&args) {
        eprintln!("Error: {error}");
        process::exit(1);
    }
}
