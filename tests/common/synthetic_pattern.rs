use dotgrid::{Blob, LineSegment, Point, Rect};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Primitives a detector backend would report for one synthetic capture.
pub struct SyntheticFrame {
    pub blobs: Vec<Blob>,
    pub edges: Vec<LineSegment>,
    /// Slope the fragmented edge was generated with.
    pub edge_slope: f32,
}

const DOT_PITCH: f32 = 40.0;
const ROW_PITCH: f32 = 60.0;

fn dot_blob(center: Point, area: u32) -> Blob {
    let radius = (area as f32 / std::f32::consts::PI).sqrt();
    let bounding_box = Rect {
        x: center.x - radius,
        y: center.y - radius,
        width: 2.0 * radius,
        height: 2.0 * radius,
    };
    // A coarse octagonal contour is enough for a synthetic blob.
    let contour = (0..8)
        .map(|i| {
            let a = i as f32 * std::f32::consts::FRAC_PI_4;
            Point::new(center.x + radius * a.cos(), center.y + radius * a.sin())
        })
        .collect();
    Blob::new(center, area, bounding_box, contour)
}

/// Generates a full alignment capture: `rows` rows of ten jittered dots in
/// scrambled order, a handful of out-of-band noise blobs, and a sheet edge
/// of the given slope broken into overlapping fragments.
pub fn synthetic_frame(rows: usize, edge_slope: f32, seed: u64) -> SyntheticFrame {
    assert!(rows > 0, "a synthetic capture needs at least one row");
    let mut rng = StdRng::seed_from_u64(seed);

    let mut blobs = Vec::with_capacity(rows * 10 + 4);
    for row in 0..rows {
        for i in 0..10 {
            let x = 50.0 + i as f32 * DOT_PITCH + rng.gen_range(-2.0..2.0);
            let y = 100.0 + row as f32 * ROW_PITCH + rng.gen_range(-2.0..2.0);
            let area = rng.gen_range(3000..4000);
            blobs.push(dot_blob(Point::new(x, y), area));
        }
    }
    // Noise: specks and a merged-dot smear, all outside the area band.
    blobs.push(dot_blob(Point::new(13.0, 17.0), 80));
    blobs.push(dot_blob(Point::new(610.0, 20.0), 150));
    blobs.push(dot_blob(Point::new(320.0, 450.0), 9500));
    blobs.shuffle(&mut rng);

    // The sheet edge runs across the full width; the detector reports it as
    // overlapping fragments in arbitrary order.
    let edge_at = |x: f32| Point::new(x, 60.0 + edge_slope * x);
    let mut edges = vec![
        LineSegment::new(edge_at(180.0), edge_at(300.0)),
        LineSegment::new(edge_at(20.0), edge_at(200.0)),
        LineSegment::new(edge_at(290.0), edge_at(470.0)),
    ];
    edges.shuffle(&mut rng);

    SyntheticFrame {
        blobs,
        edges,
        edge_slope,
    }
}
