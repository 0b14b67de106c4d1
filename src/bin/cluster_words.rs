//! Command-line front end for clustering a word-embedding file.
//!
//! Reads a text embedding file (word followed by comma/space-separated
//! floats per line), runs k-means, and writes a human-readable report.
//!
//! Usage: `cluster-words <embeddings.txt> <output.txt> <k> [seed] [max_iters] [workers]`

use std::env;
use std::process;
use wordclust::{cluster, embeddings, report, ClusterConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 4 || args.len() > 7 {
        eprintln!(
            "Usage: {} <embeddings.txt> <output.txt> <k> [seed] [max_iters] [workers]",
            args[0]
        );
        process::exit(1);
    }

    let input_path = &args[1];
    let output_path = &args[2];
    let k: usize = args[3].parse()?;

    let mut config = ClusterConfig::new(k).with_verbose(true);
    if let Some(seed) = args.get(4) {
        config = config.with_seed(seed.parse()?);
    }
    if let Some(max_iters) = args.get(5) {
        config = config.with_max_iterations(max_iters.parse()?);
    }
    if let Some(workers) = args.get(6) {
        config = config.with_parallelism(workers.parse()?);
    }

    let vectors = embeddings::load_embeddings(input_path)?;
    eprintln!(
        "Loaded {} embeddings, {} dimensions, from {}",
        vectors.len(),
        vectors.dimensions(),
        input_path
    );

    let result = cluster(&vectors, &config)?;
    eprintln!(
        "Finished in {} iterations ({})",
        result.n_iterations(),
        if result.converged() {
            "converged"
        } else {
            "iteration cap reached"
        }
    );

    report::write_report_to_file(output_path, &result)?;
    eprintln!("Clustering results saved to {}", output_path);

    Ok(())
}
