mod common;

use common::synthetic_pattern::{synthetic_frame, SyntheticFrame};
use dotgrid::{
    AnalyzerParams, Blob, FeatureExtractor, FrameFeatures, LineSegment, PatternAnalyzer, Slope,
};

/// Stand-in for a pixel-level detector backend: "detects" exactly the
/// primitives baked into the synthetic frame.
struct SyntheticExtractor;

impl FeatureExtractor for SyntheticExtractor {
    type Image = SyntheticFrame;

    fn detect_blobs(&mut self, image: &SyntheticFrame, min_area: u32, max_area: u32) -> Vec<Blob> {
        image
            .blobs
            .iter()
            .filter(|b| min_area <= b.area && b.area <= max_area)
            .cloned()
            .collect()
    }

    fn detect_candidate_edges(&mut self, image: &SyntheticFrame) -> Vec<LineSegment> {
        image.edges.clone()
    }
}

#[test]
fn synthetic_capture_is_fully_structured() {
    let frame = synthetic_frame(3, 0.02, 99);
    let analyzer = PatternAnalyzer::new(AnalyzerParams::default());

    let report = analyzer.process(&mut SyntheticExtractor, &frame);

    assert!(report.grid_found, "expected the dots to form a grid");
    assert_eq!((report.grid.rows(), report.grid.columns()), (3, 2));
    assert_eq!(report.dots_used, 30, "noise blobs must not reach the grid");

    // Rows must ascend in Y and column 0 must sit left of column 1.
    let centers = &report.cell_centers;
    assert_eq!(centers.len(), 6);
    for row in 0..3 {
        let left = centers[row * 2];
        let right = centers[row * 2 + 1];
        assert!(
            left.x < right.x,
            "row {row}: left column center {left:?} not left of {right:?}"
        );
    }
    for row in 1..3 {
        assert!(
            centers[row * 2].y > centers[(row - 1) * 2].y,
            "rows must ascend in y"
        );
    }

    // The consolidated edge spans the outermost fragment endpoints and
    // reproduces the generated slope.
    let edge = report.edge.expect("edge must be found");
    assert_eq!(edge.line.start.x, 20.0);
    assert_eq!(edge.line.end.x, 470.0);
    match edge.slope {
        Slope::Finite(s) => assert!(
            (s - frame.edge_slope).abs() < 1e-4,
            "slope {s} deviates from generated {}",
            frame.edge_slope
        ),
        Slope::Vertical => panic!("a near-horizontal edge must have a finite slope"),
    }
}

#[test]
fn repeated_analysis_is_identical() {
    let frame = synthetic_frame(2, -0.01, 5);
    let analyzer = PatternAnalyzer::default();

    let features = FrameFeatures {
        blobs: frame.blobs.clone(),
        candidate_edges: frame.edges.clone(),
    };
    let first = analyzer.analyze(features.clone());
    let second = analyzer.analyze(features);

    assert_eq!(first.cell_centers, second.cell_centers);
    assert_eq!(first.edge, second.edge);
    assert_eq!(first.dots_used, second.dots_used);
}

#[test]
fn batch_analysis_preserves_frame_order() {
    let analyzer = PatternAnalyzer::default();
    let frames: Vec<FrameFeatures> = (0..4)
        .map(|i| {
            let frame = synthetic_frame(i % 3 + 1, 0.01, 1000 + i as u64);
            FrameFeatures {
                blobs: frame.blobs,
                candidate_edges: frame.edges,
            }
        })
        .collect();

    let reports = analyzer.analyze_frames(frames);
    assert_eq!(reports.len(), 4);
    for (i, report) in reports.iter().enumerate() {
        assert_eq!(report.grid.rows(), i % 3 + 1, "frame {i} row count");
    }
}
