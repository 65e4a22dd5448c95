use shortest_paths::config::CliConfig;
use shortest_paths::report::{PathReport, ReachableReport};
use shortest_paths::{parse_graph, Error, ShortestPaths};
use std::env;
use std::process;

fn run(config: &CliConfig) -> shortest_paths::Result<()> {
    let graph = parse_graph(config.format, &config.path)?;
    let summary = graph.report();
    if !config.json {
        println!("{}", summary);
    }

    let origin = graph
        .node(&config.origin)
        .ok_or_else(|| Error::UnknownLabel(config.origin.clone()))?;

    let mut sp = ShortestPaths::new(&graph);
    sp.compute(origin)?;

    match &config.destination {
        None => {
            let report = ReachableReport::build(&sp)?;
            if config.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report);
            }
        }
        Some(label) => {
            let destination = graph
                .node(label)
                .ok_or_else(|| Error::UnknownLabel(label.clone()))?;
            let report = PathReport::build(&sp, destination)?;
            if config.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report);
            }
        }
    }

    Ok(())
}

fn main() {
    // Initialize logging
    env_logger::init();

    let config = match CliConfig::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    if let Err(e) = run(&config) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
