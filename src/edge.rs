//! Consolidation of fragmentary boundary-line detections.
//!
//! A Hough-style detector rarely reports the sheet edge as one segment; it
//! emits several partial detections of the same physical boundary, broken
//! up by occlusion, dot interference and threshold jitter. Consolidation
//! reduces those candidates to one representative line plus its slope.
//!
//! Two policies are supported:
//!
//! - [`ConsolidationPolicy::ExtremalEndpoints`] (default): span the
//!   minimum-X and maximum-X endpoints found across all candidates. The
//!   result is invariant to how the edge happens to be fragmented and to
//!   the order candidates arrive in.
//! - [`ConsolidationPolicy::LongestSegment`]: keep the single longest
//!   candidate, ties resolved to the first encountered. Simpler, but a
//!   split dominant edge loses against an unrelated long detection.
//!
//! Ties in both policies use strict comparisons, so the first-encountered
//! candidate wins and a fixed input order gives a fixed result.

use crate::types::{LineSegment, Point};
use log::debug;
use serde::{Deserialize, Serialize};

/// Slope of a consolidated edge. A vertical edge has no finite quotient and
/// is reported as its own variant rather than an infinity or NaN.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Slope {
    Finite(f32),
    Vertical,
}

impl Slope {
    /// Slope of the line through `start` and `end`.
    pub fn between(start: Point, end: Point) -> Self {
        let dx = end.x - start.x;
        if dx == 0.0 {
            Slope::Vertical
        } else {
            Slope::Finite((end.y - start.y) / dx)
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Slope::Vertical)
    }

    /// The finite value, if any.
    pub fn value(&self) -> Option<f32> {
        match *self {
            Slope::Finite(v) => Some(v),
            Slope::Vertical => None,
        }
    }
}

/// The single representative line chosen to stand for the physical boundary.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ConsolidatedEdge {
    pub line: LineSegment,
    pub slope: Slope,
}

impl ConsolidatedEdge {
    fn from_endpoints(start: Point, end: Point) -> Self {
        Self {
            line: LineSegment::new(start, end),
            slope: Slope::between(start, end),
        }
    }
}

/// Strategy for reducing candidate detections to one edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsolidationPolicy {
    /// Span the extremal-X endpoints over all candidates.
    #[default]
    ExtremalEndpoints,
    /// Keep the longest single candidate.
    LongestSegment,
}

/// Reduces `candidates` to one representative edge under `policy`.
///
/// Returns `None` when there are no candidates to consolidate.
pub fn consolidate_edges(
    candidates: &[LineSegment],
    policy: ConsolidationPolicy,
) -> Option<ConsolidatedEdge> {
    if candidates.is_empty() {
        debug!("edge: no candidates to consolidate");
        return None;
    }
    let edge = match policy {
        ConsolidationPolicy::ExtremalEndpoints => span_extremal_endpoints(candidates),
        ConsolidationPolicy::LongestSegment => keep_longest(candidates),
    };
    debug!(
        "edge: consolidated {} candidates via {:?}, slope {:?}",
        candidates.len(),
        policy,
        edge.slope
    );
    Some(edge)
}

fn span_extremal_endpoints(candidates: &[LineSegment]) -> ConsolidatedEdge {
    let first = &candidates[0];
    let mut min_x = first.start;
    let mut max_x = first.start;
    let endpoints = candidates
        .iter()
        .flat_map(|seg| [seg.start, seg.end].into_iter());
    for p in endpoints {
        if p.x < min_x.x {
            min_x = p;
        }
        if p.x > max_x.x {
            max_x = p;
        }
    }
    ConsolidatedEdge::from_endpoints(min_x, max_x)
}

fn keep_longest(candidates: &[LineSegment]) -> ConsolidatedEdge {
    let mut best = &candidates[0];
    let mut best_len = best.length();
    for seg in &candidates[1..] {
        let len = seg.length();
        if len > best_len {
            best = seg;
            best_len = len;
        }
    }
    ConsolidatedEdge::from_endpoints(best.start, best.end)
}
