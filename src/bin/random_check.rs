use std::time::Instant;

use anyhow::Result;
use clap::{value_parser, Arg, ArgAction, Command};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use tracing::debug;

use bipartite::coloring::check_bipartite_many;
use bipartite::graph::VectorGraph;
use bipartite::logging;
use bipartite::util::count_components;
use bipartite::util::generators::{random_bipartite, random_graph};
use bipartite::ColoringError;

fn main() -> Result<()> {
    let matches = Command::new("random_check")
        .about("Generates random conflict graphs and checks which ones split into two groups")
        .arg(
            Arg::new("graphs")
                .long("graphs")
                .short('g')
                .help("Number of graphs to generate")
                .value_parser(value_parser!(usize))
                .default_value("1000"),
        )
        .arg(
            Arg::new("size")
                .long("size")
                .short('n')
                .help("Nodes per graph")
                .value_parser(value_parser!(usize))
                .default_value("1000"),
        )
        .arg(
            Arg::new("degree")
                .long("degree")
                .short('d')
                .help("Average degree")
                .value_parser(value_parser!(usize))
                .default_value("2"),
        )
        .arg(
            Arg::new("bipartite")
                .long("bipartite")
                .help("Only generate graphs with a hidden two-group split")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Random seed")
                .value_parser(value_parser!(u64))
                .default_value("42"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    logging::init(matches.get_flag("verbose"));

    let num_graphs = *matches.get_one::<usize>("graphs").unwrap();
    let n = *matches.get_one::<usize>("size").unwrap();
    let degree = *matches.get_one::<usize>("degree").unwrap();
    let bipartite_only = matches.get_flag("bipartite");
    let seed = *matches.get_one::<u64>("seed").unwrap();

    let mut start = Instant::now();

    let mut rng = StdRng::seed_from_u64(seed);
    let graphs: Vec<VectorGraph> = (0..num_graphs)
        .map(|_| {
            if bipartite_only {
                random_bipartite(n / 2, n - n / 2, n * degree / 2, &mut rng)
            } else {
                random_graph(n, degree, &mut rng)
            }
        })
        .collect();

    let elapsed = start.elapsed();
    println!(
        "generated {} graphs in {}.{:03} seconds",
        graphs.len(),
        elapsed.as_secs(),
        elapsed.subsec_millis()
    );
    start = Instant::now();

    let results = check_bipartite_many(&graphs);

    let elapsed = start.elapsed();
    println!(
        "checked {} graphs in {}.{:03} seconds ({:.1} graphs/s)",
        results.len(),
        elapsed.as_secs(),
        elapsed.subsec_millis(),
        results.len() as f64 / elapsed.as_secs_f64()
    );

    let mut bipartite = 0;
    let mut not_bipartite = 0;
    for (i, result) in results.iter().enumerate() {
        match result {
            Ok(_) => bipartite += 1,
            Err(ColoringError::NotBipartite { vertex, neighbor }) => {
                debug!(graph = i, vertex, neighbor, "odd cycle");
                not_bipartite += 1;
            }
            Err(err) => return Err((*err).into()),
        }
    }

    let total_components: usize = graphs.par_iter().map(|g| count_components(g)).sum();

    println!("bipartite: {bipartite}");
    println!("not bipartite: {not_bipartite}");
    if !graphs.is_empty() {
        println!(
            "average components per graph: {:.2}",
            total_components as f64 / graphs.len() as f64
        );
    }

    Ok(())
}
