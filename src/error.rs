//! Error types for the reconstruction layer.
//!
//! Only contract violations are errors. Degenerate inputs (a point count
//! that cannot form full rows, an empty candidate list, a vertical edge)
//! are ordinary result values; callers inspect the returned structure.

use std::path::PathBuf;
use thiserror::Error;

/// Contract violations raised by the reconstruction operations.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// A required point collection was absent (`None`). An empty collection
    /// is valid input and is never reported through this variant.
    #[error("points collection is required")]
    MissingPoints,
}

/// Failures while loading analyzer parameters from disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
