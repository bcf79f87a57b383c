//! High-level facade tying the reconstruction stages together.
//!
//! [`PatternAnalyzer`] runs the full dataflow for one captured frame: blob
//! area filtering → centroid extraction → grid reconstruction, and candidate
//! edge consolidation, reporting the structured results plus timing. The
//! pixel-level detector stays behind the [`FeatureExtractor`] seam; the
//! analyzer never inspects an image itself.
//!
//! Every stage is pure and operates on caller-supplied snapshots, so
//! independent frames are analyzed fully in parallel by
//! [`PatternAnalyzer::analyze_frames`].

use crate::blobs::{centroids, filter_by_area, AreaBand};
use crate::edge::{consolidate_edges, ConsolidatedEdge, ConsolidationPolicy};
use crate::grid::{self, Grid};
use crate::types::{Blob, LineSegment, Point};
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Boundary to the pixel-level detector backend.
///
/// Implementations own the image format, color handling and detection
/// thresholds; the analyzer only consumes the primitives they report.
pub trait FeatureExtractor {
    /// Opaque image type of the backend.
    type Image: ?Sized;

    /// Detects blobs whose pixel area falls in `[min_area, max_area]`.
    fn detect_blobs(&mut self, image: &Self::Image, min_area: u32, max_area: u32) -> Vec<Blob>;

    /// Detects raw candidate boundary lines.
    fn detect_candidate_edges(&mut self, image: &Self::Image) -> Vec<LineSegment>;
}

/// Analyzer-wide parameters.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AnalyzerParams {
    /// Accepted blob area band.
    pub area: AreaBand,
    /// Edge consolidation strategy.
    pub edge_policy: ConsolidationPolicy,
}

/// Primitives extracted from one captured frame.
#[derive(Clone, Debug, Default)]
pub struct FrameFeatures {
    pub blobs: Vec<Blob>,
    pub candidate_edges: Vec<LineSegment>,
}

/// Structured result for one analyzed frame.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Whether the dots formed a full-row grid.
    pub grid_found: bool,
    /// Whether any boundary candidate survived consolidation.
    pub edge_found: bool,
    pub grid: Grid,
    pub edge: Option<ConsolidatedEdge>,
    /// Mean center of each grid cell, row-major.
    pub cell_centers: Vec<Point>,
    /// Number of blobs inside the area band.
    pub dots_used: usize,
    pub latency_ms: f64,
}

/// Stateless frame analyzer configured once with [`AnalyzerParams`].
#[derive(Clone, Debug, Default)]
pub struct PatternAnalyzer {
    params: AnalyzerParams,
}

impl PatternAnalyzer {
    pub fn new(params: AnalyzerParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &AnalyzerParams {
        &self.params
    }

    /// Analyzes already-extracted primitives of one frame.
    pub fn analyze(&self, features: FrameFeatures) -> AnalysisReport {
        let t0 = Instant::now();

        let dots = filter_by_area(
            features.blobs,
            self.params.area.min_area,
            self.params.area.max_area,
        );
        let grid = grid::reconstruct(&centroids(&dots));
        let edge = consolidate_edges(&features.candidate_edges, self.params.edge_policy);

        let latency_ms = t0.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "analyzer: {} dots -> {}x{} grid, edge found: {}, {:.3} ms",
            dots.len(),
            grid.rows(),
            grid.columns(),
            edge.is_some(),
            latency_ms
        );

        AnalysisReport {
            grid_found: !grid.is_empty(),
            edge_found: edge.is_some(),
            cell_centers: grid.cell_centers(),
            grid,
            edge,
            dots_used: dots.len(),
            latency_ms,
        }
    }

    /// Runs the extractor backend on `image` and analyzes what it reports.
    pub fn process<E: FeatureExtractor>(
        &self,
        extractor: &mut E,
        image: &E::Image,
    ) -> AnalysisReport {
        let blobs = extractor.detect_blobs(image, self.params.area.min_area, self.params.area.max_area);
        let candidate_edges = extractor.detect_candidate_edges(image);
        self.analyze(FrameFeatures {
            blobs,
            candidate_edges,
        })
    }

    /// Analyzes independent frames in parallel, preserving input order.
    pub fn analyze_frames(&self, frames: Vec<FrameFeatures>) -> Vec<AnalysisReport> {
        frames
            .into_par_iter()
            .map(|features| self.analyze(features))
            .collect()
    }
}
