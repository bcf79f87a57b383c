//! Arithmetic-mean point over a point collection.

use crate::error::AnalyzeError;
use crate::types::Point;

/// Computes the arithmetic-mean point of `points`.
///
/// `None` fails with [`AnalyzeError::MissingPoints`] before any processing.
/// An empty collection returns the origin; callers that need to distinguish
/// "no data" from "centroid at the origin" must check emptiness themselves.
pub fn average_point(points: Option<&[Point]>) -> Result<Point, AnalyzeError> {
    let points = points.ok_or(AnalyzeError::MissingPoints)?;
    Ok(mean_point(points))
}

/// Mean over a collection known to be present. Empty input yields the origin.
pub(crate) fn mean_point(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::default();
    }
    let mut sum_x = 0.0f32;
    let mut sum_y = 0.0f32;
    for p in points {
        sum_x += p.x;
        sum_y += p.y;
    }
    let count = points.len() as f32;
    Point::new(sum_x / count, sum_y / count)
}
