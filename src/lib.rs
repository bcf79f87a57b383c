#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod analyzer;
pub mod config;
pub mod error;
pub mod types;

// Stage modules – public for callers that drive the stages directly.
pub mod aggregate;
pub mod blobs;
pub mod edge;
pub mod grid;

// --- High-level re-exports -------------------------------------------------

// Main entry points: facade + per-frame results.
pub use crate::analyzer::{
    AnalysisReport, AnalyzerParams, FeatureExtractor, FrameFeatures, PatternAnalyzer,
};
pub use crate::error::{AnalyzeError, ConfigError};

// Stage-level operations, usable without the facade.
pub use crate::aggregate::average_point;
pub use crate::blobs::{centroids, filter_by_area, AreaBand};
pub use crate::edge::{consolidate_edges, ConsolidatedEdge, ConsolidationPolicy, Slope};
pub use crate::grid::{reconstruct_grid, Grid, RowPoints};

// Value types.
pub use crate::types::{Blob, LineSegment, Point, Rect};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use dotgrid::prelude::*;
///
/// let dots: Vec<Point> = (1..=10).map(|i| Point::new(10.0 * i as f32, 25.0)).collect();
/// let grid = reconstruct_grid(Some(&dots)).unwrap();
/// assert_eq!((grid.rows(), grid.columns()), (1, 2));
/// ```
pub mod prelude {
    pub use crate::analyzer::{FrameFeatures, PatternAnalyzer};
    pub use crate::edge::{consolidate_edges, ConsolidationPolicy};
    pub use crate::grid::reconstruct_grid;
    pub use crate::types::{Blob, LineSegment, Point};
}
