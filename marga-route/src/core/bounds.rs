//! Axis-aligned bounding box for layout filtering.
//!
//! A floor plan may declare the drawable layout area; waypoints digitized
//! outside of it (stray artwork, legend markers) can be excluded before a
//! graph build.

use serde::{Deserialize, Serialize};

use super::point::Point2D;

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum corner (smallest x and y values).
    pub min: Point2D,
    /// Maximum corner (largest x and y values).
    pub max: Point2D,
}

impl Bounds {
    /// Create a new bounding box from min and max corners.
    #[inline]
    pub const fn new(min: Point2D, max: Point2D) -> Self {
        Self { min, max }
    }

    /// Check if a point is inside the bounding box (edges inclusive).
    #[inline]
    pub fn contains(&self, point: Point2D) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}
