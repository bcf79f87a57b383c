//! Blob filtering ahead of grid reconstruction.
//!
//! The extractor backend reports every blob it can find; only those whose
//! pixel area sits in the plausible alignment-dot band are worth ordering
//! into a grid. Too small is sensor noise, too large is merged dots or
//! smudges.

use crate::types::{Blob, Point};
use serde::Deserialize;

/// Inclusive pixel-area band accepted by [`filter_by_area`].
///
/// The alignment dots of the reference pattern average roughly 3500 px² at
/// the expected capture distance; the default band brackets that with room
/// for focus and threshold variation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct AreaBand {
    pub min_area: u32,
    pub max_area: u32,
}

impl Default for AreaBand {
    fn default() -> Self {
        Self {
            min_area: 2000,
            max_area: 5000,
        }
    }
}

impl AreaBand {
    #[inline]
    pub fn contains(&self, area: u32) -> bool {
        self.min_area <= area && area <= self.max_area
    }
}

/// Keeps the blobs whose area lies in `[min_area, max_area]`, both ends
/// inclusive, preserving relative input order.
pub fn filter_by_area(mut blobs: Vec<Blob>, min_area: u32, max_area: u32) -> Vec<Blob> {
    let band = AreaBand { min_area, max_area };
    blobs.retain(|b| band.contains(b.area));
    blobs
}

/// Projects blobs down to their centroids, in input order.
pub fn centroids(blobs: &[Blob]) -> Vec<Point> {
    blobs.iter().map(|b| b.centroid).collect()
}
