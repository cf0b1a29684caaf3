use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use log::info;
use serde::Serialize;
use transit_sssp::config::RunConfig;
use transit_sssp::data_structures::CacheStats;
use transit_sssp::graph::Graph;
use transit_sssp::loader::{load_network_from_path, Network};
use transit_sssp::Strategy;

const USAGE: &str = "usage: metro [--config FILE] [--network FILE] [--delay N] \
[--strategy dense|sparse] [--json] [--all-pairs] [ORIGIN DESTINATION]";

/// Command line options; anything left unset falls back to the config file
#[derive(Debug, Default)]
struct Options {
    config_path: Option<PathBuf>,
    network_path: Option<PathBuf>,
    arc_delay: Option<u32>,
    strategy: Option<Strategy>,
    json: bool,
    all_pairs: bool,
    pair: Option<(usize, usize)>,
}

#[derive(Debug, Serialize)]
struct PathStep {
    index: usize,
    name: String,
}

#[derive(Debug, Serialize)]
struct QueryReport {
    origin: usize,
    destination: usize,
    strategy: Strategy,
    distance: Option<u32>,
    path: Vec<PathStep>,
    elapsed_micros: u64,
}

#[derive(Debug, Serialize)]
struct AllPairsReport {
    strategy: Strategy,
    vertex_count: usize,
    queries: usize,
    unreachable_pairs: usize,
    average_micros: f64,
    cache: CacheStats,
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Options, Box<dyn Error>> {
    let mut options = Options::default();
    let mut positional = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => options.config_path = Some(args.next().ok_or(USAGE)?.into()),
            "--network" => options.network_path = Some(args.next().ok_or(USAGE)?.into()),
            "--delay" => options.arc_delay = Some(args.next().ok_or(USAGE)?.parse()?),
            "--strategy" => options.strategy = Some(args.next().ok_or(USAGE)?.parse()?),
            "--json" => options.json = true,
            "--all-pairs" => options.all_pairs = true,
            "-h" | "--help" => return Err(USAGE.into()),
            _ => positional.push(arg.parse::<usize>()?),
        }
    }

    match positional.as_slice() {
        [] => {}
        [origin, destination] => options.pair = Some((*origin, *destination)),
        _ => return Err(USAGE.into()),
    }

    Ok(options)
}

fn prompt_index(label: &str) -> Result<usize, Box<dyn Error>> {
    println!("Enter the {} station number", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().parse()?)
}

fn run_single_pair(
    network: &Network,
    strategy: Strategy,
    origin: usize,
    destination: usize,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let start = Instant::now();
    let path = network.shortest_path(strategy, origin, destination)?;
    let elapsed = start.elapsed();

    if !path.is_found() {
        return Err(format!("no path from station {} to station {}", origin, destination).into());
    }

    if json {
        let report = QueryReport {
            origin,
            destination,
            strategy,
            distance: path.distance.finite(),
            path: path
                .vertices
                .iter()
                .map(|(index, name)| PathStep {
                    index: *index,
                    name: name.clone(),
                })
                .collect(),
            elapsed_micros: elapsed.as_micros() as u64,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Shortest path found by {} Dijkstra:", strategy);
    for (index, name) in &path.vertices {
        println!("{} {}", index, name);
    }
    println!("with an estimated time of {} seconds", path.distance);
    println!();
    println!("Execution time = {} microseconds", elapsed.as_micros());

    Ok(())
}

/// Average query time over every ordered pair of distinct stations
fn average_all_pairs(network: &Network, strategy: Strategy, json: bool) -> Result<(), Box<dyn Error>> {
    let n = network.vertex_count();
    if n < 2 {
        return Err("all-pairs timing needs at least two stations".into());
    }

    if !json {
        println!(
            "Measuring the average shortest path time over all origin/destination pairs ({} strategy)...",
            strategy
        );
    }

    let mut sum_of_averages = 0.0;
    let mut unreachable_pairs = 0;
    for origin in 0..n {
        let mut total_micros = 0.0;
        for destination in (0..n).filter(|&d| d != origin) {
            let start = Instant::now();
            let path = network.shortest_path(strategy, origin, destination)?;
            total_micros += start.elapsed().as_secs_f64() * 1e6;
            if !path.is_found() {
                unreachable_pairs += 1;
            }
        }
        sum_of_averages += total_micros / (n - 1) as f64;
    }
    let average_micros = sum_of_averages / n as f64;

    if json {
        let report = AllPairsReport {
            strategy,
            vertex_count: n,
            queries: n * (n - 1),
            unreachable_pairs,
            average_micros,
            cache: network.cache_stats(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Average shortest path execution time = {:.3} microseconds",
            average_micros
        );
        if unreachable_pairs > 0 {
            println!("{} pairs had no path", unreachable_pairs);
        }
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::init();

    let options = parse_args(env::args().skip(1))?;

    let mut config = match &options.config_path {
        Some(path) => RunConfig::from_path(path)?,
        None => RunConfig::default(),
    };
    if let Some(path) = options.network_path.clone() {
        config.network_path = path;
    }
    if let Some(delay) = options.arc_delay {
        config.arc_delay = delay;
    }
    if let Some(strategy) = options.strategy {
        config.strategy = strategy;
    }
    config.json_output |= options.json;
    info!("Running with {:?}", config);

    let network = load_network_from_path(&config.network_path, config.arc_delay)?;

    if options.all_pairs {
        return average_all_pairs(&network, config.strategy, config.json_output);
    }

    let (origin, destination) = match options.pair {
        Some(pair) => pair,
        None => (prompt_index("departure")?, prompt_index("arrival")?),
    };

    run_single_pair(&network, config.strategy, origin, destination, config.json_output)
}
