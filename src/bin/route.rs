use clap::Parser;
use frontier::io::LoadError;
use frontier::limits::SearchLimits;
use frontier::roadmap::{well_formed_city_name, Itinerary, Metric, RoadMap, RouteQuery};
use frontier::solvers::{self, Termination};
use std::path::PathBuf;
use std::process;

/// Road-trip planner optimizing segments, distance, time, or fuel.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Start city, as `City,_State`
    start_city: String,

    /// Destination city, as `City,_State`
    destination_city: String,

    /// Cost function: segments, distance, time, or mpg
    cost_function: String,

    /// Path to the road segment file
    #[clap(long, default_value = "road-segments.txt")]
    segments_file: PathBuf,

    /// Path to the city GPS file
    #[clap(long, default_value = "city-gps.txt")]
    gps_file: PathBuf,

    /// Abort the search after this many seconds
    #[clap(long)]
    time_limit: Option<f64>,

    /// Abort the search after this many expansions
    #[clap(long)]
    expansion_limit: Option<usize>,
}

fn print_itinerary(map: &RoadMap, itinerary: &Itinerary) {
    let cities: Vec<&str> = itinerary
        .cities
        .iter()
        .map(|&city| map.name(city))
        .collect();

    println!(
        "{} {} {} {} {}",
        itinerary.segments,
        itinerary.miles,
        itinerary.hours,
        itinerary.gallons,
        cities.join(" ")
    );
}

fn run(args: &Args) -> Result<(), LoadError> {
    let metric: Metric = args.cost_function.parse()?;
    let map = RoadMap::load(&args.segments_file, &args.gps_file)?;

    if !well_formed_city_name(&args.start_city) || !well_formed_city_name(&args.destination_city)
    {
        println!("Inf");

        return Ok(());
    }

    let (Some(start), Some(goal)) = (
        map.city(&args.start_city),
        map.city(&args.destination_city),
    ) else {
        println!("Inf");

        return Ok(());
    };

    println!("Solving...");

    if start == goal {
        // Already there: a zero-length trip needs no search.
        print_itinerary(&map, &map.itinerary(start, &[]));

        return Ok(());
    }

    let limits = SearchLimits {
        time_limit: args.time_limit,
        expansion_limit: args.expansion_limit,
    };
    let report = solvers::search(&RouteQuery::new(&map, start, goal, metric), limits);

    match report.termination {
        Termination::Goal => print_itinerary(&map, &map.itinerary(start, &report.path)),
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
