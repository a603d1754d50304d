//! Wall segments.

use serde::{Deserialize, Serialize};

use super::point::Point2D;

/// An impassable straight line of wall geometry.
///
/// Zero-length segments are accepted as-is; the obstruction test never
/// reports them as crossing anything.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WallSegment {
    /// First endpoint
    pub p1: Point2D,
    /// Second endpoint
    pub p2: Point2D,
}

impl WallSegment {
    /// Create a new wall segment
    #[inline]
    pub const fn new(p1: Point2D, p2: Point2D) -> Self {
        Self { p1, p2 }
    }

    /// Create from raw coordinates
    #[inline]
    pub const fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point2D::new(x1, y1), Point2D::new(x2, y2))
    }

    /// Horizontal wall at `y` spanning `x1..x2`
    #[inline]
    pub const fn horizontal(y: f64, x1: f64, x2: f64) -> Self {
        Self::from_coords(x1, y, x2, y)
    }

    /// Vertical wall at `x` spanning `y1..y2`
    #[inline]
    pub const fn vertical(x: f64, y1: f64, y2: f64) -> Self {
        Self::from_coords(x, y1, x, y2)
    }

    /// True if both endpoints coincide
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p2
    }
}
