//! # wordclust
//!
//! Parallel k-means clustering for word embeddings.
//!
//! ## Features
//!
//! - **Lloyd's algorithm**: iterated nearest-centroid assignment and
//!   centroid recomputation over Euclidean distance
//! - **Parallel assignment stage**: per-vector fan-out across a rayon
//!   worker pool, with a race-free reassignment-flag reduction
//! - **Two convergence policies**: centroid displacement below epsilon
//!   (the default) or zero-reassignment stability, both bounded by an
//!   iteration cap
//! - **Deterministic runs**: seedable ChaCha8 centroid initialization
//! - **Embedding-file glue**: a text-format loader and a report writer
//!   around the core engine
//!
//! ## Example
//!
//! ```rust
//! use wordclust::{cluster, ClusterConfig, VectorSet};
//!
//! let vectors = VectorSet::from_pairs(vec![
//!     ("cold".to_string(), vec![0.0, 0.1]),
//!     ("icy".to_string(), vec![0.1, 0.0]),
//!     ("hot".to_string(), vec![9.9, 10.0]),
//!     ("warm".to_string(), vec![10.0, 9.9]),
//! ])
//! .unwrap();
//!
//! let config = ClusterConfig::new(2).with_seed(42);
//! let result = cluster(&vectors, &config).unwrap();
//!
//! assert_eq!(result.k(), 2);
//! assert_eq!(result.total_members(), 4);
//! ```
//!
//! ## Custom configuration
//!
//! ```rust
//! use wordclust::{cluster, ClusterConfig, ConvergencePolicy, VectorSet};
//!
//! let vectors = VectorSet::from_pairs(
//!     (0..20).map(|i| (format!("w{i}"), vec![i as f32, (i % 5) as f32])),
//! )
//! .unwrap();
//!
//! let config = ClusterConfig::new(4)
//!     .with_seed(7)
//!     .with_max_iterations(50)
//!     .with_policy(ConvergencePolicy::Stability)
//!     .with_parallelism(2);
//!
//! let result = cluster(&vectors, &config).unwrap();
//! assert!(result.converged());
//! ```

mod algorithm;
mod config;
mod distance;
pub mod embeddings;
mod error;
mod kmeans;
pub mod report;
mod vectors;

pub use config::{ClusterConfig, ConvergencePolicy};
pub use error::ClusterError;
pub use kmeans::{cluster, ClusterMember, ClusteringResult};
pub use vectors::VectorSet;
