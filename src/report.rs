//! Result writer: renders a [`ClusteringResult`] as a human-readable
//! report. Formatting only, no clustering logic.

use crate::kmeans::ClusteringResult;
use ndarray::ArrayView1;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write the clustering report to any writer.
///
/// Clusters are numbered from 1 for readability; members are listed in
/// vector-enumeration order with 6-decimal distances, followed by each
/// cluster's final centroid as a bracketed comma-separated vector.
pub fn write_report<W: Write>(out: &mut W, result: &ClusteringResult) -> io::Result<()> {
    writeln!(out, "Clustering results:")?;
    for (i, members) in result.clusters().iter().enumerate() {
        writeln!(out, "- Cluster {}:", i + 1)?;
        for member in members {
            writeln!(
                out,
                "  - {} (Distance: {:.6})",
                member.word, member.distance
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Cluster centroids:")?;
    for i in 0..result.k() {
        writeln!(
            out,
            "- Cluster {} Centroid (average vector): {}",
            i + 1,
            format_vector(&result.centroid(i))
        )?;
    }

    Ok(())
}

/// Write the clustering report to a file at `path`, creating or truncating
/// it.
pub fn write_report_to_file<P: AsRef<Path>>(path: P, result: &ClusteringResult) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_report(&mut writer, result)?;
    writer.flush()
}

/// Format a vector as `[c0, c1, ...]` with 6-decimal components
pub fn format_vector(vector: &ArrayView1<f32>) -> String {
    let components: Vec<String> = vector.iter().map(|c| format!("{:.6}", c)).collect();
    format!("[{}]", components.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClusterConfig;
    use crate::kmeans::cluster;
    use crate::vectors::VectorSet;
    use ndarray::array;

    #[test]
    fn test_format_vector() {
        let v = array![0.5f32, -1.0, 0.125];
        assert_eq!(format_vector(&v.view()), "[0.500000, -1.000000, 0.125000]");
    }

    #[test]
    fn test_format_empty_vector() {
        let v = ndarray::Array1::<f32>::zeros(0);
        assert_eq!(format_vector(&v.view()), "[]");
    }

    #[test]
    fn test_write_report() {
        let vectors = VectorSet::from_pairs(vec![
            ("up".to_string(), vec![1.0, 1.0]),
            ("down".to_string(), vec![1.0, 1.0]),
        ])
        .unwrap();
        let result = cluster(&vectors, &ClusterConfig::new(1).with_seed(0)).unwrap();

        let mut buffer = Vec::new();
        write_report(&mut buffer, &result).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("Clustering results:\n"));
        assert!(text.contains("- Cluster 1:"));
        assert!(text.contains("  - up (Distance: 0.000000)"));
        assert!(text.contains("  - down (Distance: 0.000000)"));
        assert!(text.contains("- Cluster 1 Centroid (average vector): [1.000000, 1.000000]"));
    }
}
