//! Embedding store: parses a text file into a [`VectorSet`].
//!
//! Line format: a word followed by its vector components, separated by
//! commas and/or whitespace, e.g. `king, 0.125, -0.221, 0.704`. Malformed
//! rows (missing vector, non-numeric component, wrong length) are skipped
//! with a diagnostic on stderr rather than failing the whole load.

use crate::error::ClusterError;
use crate::vectors::VectorSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Load word embeddings from a file at `path`.
pub fn load_embeddings<P: AsRef<Path>>(path: P) -> io::Result<VectorSet> {
    let reader = BufReader::new(File::open(path)?);
    parse_embeddings(reader)
}

/// Parse word embeddings from any buffered reader.
///
/// The first well-formed row establishes the dimensionality; later rows of
/// a different length are skipped as malformed. The returned set may be
/// empty, which the engine rejects at cluster time.
pub fn parse_embeddings<R: BufRead>(reader: R) -> io::Result<VectorSet> {
    let mut pairs: Vec<(String, Vec<f32>)> = Vec::new();
    let mut dimensions: Option<usize> = None;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut tokens = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty());

        let word = match tokens.next() {
            Some(w) => w.to_string(),
            None => continue,
        };

        let vector: Result<Vec<f32>, _> = tokens.map(str::parse::<f32>).collect();
        let vector = match vector {
            Ok(v) if !v.is_empty() => v,
            _ => {
                eprintln!("Skipping malformed line: {}", line);
                continue;
            }
        };

        match dimensions {
            None => dimensions = Some(vector.len()),
            Some(d) if vector.len() != d => {
                eprintln!(
                    "Skipping line with {} components (expected {}): {}",
                    vector.len(),
                    d,
                    word
                );
                continue;
            }
            Some(_) => {}
        }

        pairs.push((word, vector));
    }

    // Rows were filtered to a single dimensionality above, so this only
    // fails on internal inconsistency
    VectorSet::from_pairs(pairs).map_err(into_io_error)
}

fn into_io_error(e: ClusterError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, e.to_string())
}
