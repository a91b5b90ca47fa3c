use clap::Parser;
use frontier::io::LoadError;
use frontier::limits::SearchLimits;
use frontier::roster::load_roster;
use frontier::solvers::{optimize, sort_candidates};
use log::warn;
use std::path::PathBuf;
use std::process;

/// Team selection maximizing total skill under a fixed budget.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the roster file (`name skill rate` per line)
    roster_file: PathBuf,

    /// Budget the selected rates may not exceed
    budget: f64,

    /// Abort the enumeration after this many seconds
    #[clap(long)]
    time_limit: Option<f64>,

    /// Abort the enumeration after this many branches
    #[clap(long)]
    expansion_limit: Option<usize>,
}

fn run(args: &Args) -> Result<(), LoadError> {
    let mut candidates = load_roster(&args.roster_file)?;
    sort_candidates(&mut candidates);

    let limits = SearchLimits {
        time_limit: args.time_limit,
        expansion_limit: args.expansion_limit,
    };
    let result = optimize(&candidates, args.budget, limits);

    if !result.complete {
        warn!(
            "enumeration cut short after {} branches; reporting the best group found so far",
            result.explored
        );
    }

    let selection = result.selection;

    if selection.is_empty() {
        println!("Inf");
    } else {
        println!(
            "Found a group with {count} people costing {cost:.6} with total skill {skill:.6}",
            count = selection.members.len(),
            cost = selection.total_cost,
            skill = selection.total_value,
        );

        for (name, fraction) in &selection.members {
            println!("{name} {fraction:.6}");
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
