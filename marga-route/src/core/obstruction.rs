//! Wall obstruction testing.
//!
//! Decides whether the straight walk between two waypoints crosses wall
//! geometry. Only proper crossings count: an endpoint resting on a wall,
//! two segments sharing an endpoint, and collinear overlap are all treated
//! as unobstructed. Curated floor plans rely on this when waypoints are
//! digitized exactly on door jambs.

use super::point::Point2D;
use super::segment::WallSegment;

/// Sign of the cross product `(b - a) x (c - a)`: 1, -1 or 0.
#[inline]
fn orientation(a: Point2D, b: Point2D, c: Point2D) -> i8 {
    let cross = (b - a).cross(&(c - a));
    if cross > 0.0 {
        1
    } else if cross < 0.0 {
        -1
    } else {
        0
    }
}

/// Check if segment `a1`-`a2` properly crosses segment `b1`-`b2`.
///
/// Zero-length segments never intersect anything.
#[inline]
pub fn segments_intersect(a1: Point2D, a2: Point2D, b1: Point2D, b2: Point2D) -> bool {
    let d1 = orientation(b1, b2, a1);
    let d2 = orientation(b1, b2, a2);
    let d3 = orientation(a1, a2, b1);
    let d4 = orientation(a1, a2, b2);

    d1 * d2 < 0 && d3 * d4 < 0
}

/// Index of the first wall crossed by the walk from `from` to `to`.
///
/// Degenerate walls are skipped.
///
/// # Returns
/// `None` if no wall is crossed.
pub fn first_obstruction(from: Point2D, to: Point2D, walls: &[WallSegment]) -> Option<usize> {
    walls.iter().position(|wall| {
        !wall.is_degenerate() && segments_intersect(from, to, wall.p1, wall.p2)
    })
}

/// Check if any wall blocks the straight walk between two points.
#[inline]
pub fn is_blocked(from: Point2D, to: Point2D, walls: &[WallSegment]) -> bool {
    first_obstruction(from, to, walls).is_some()
}
