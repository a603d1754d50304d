//! Core geometric types for floor-plan routing.
//!
//! - [`Point2D`]: A position in floor-plan coordinate space
//! - [`Bounds`]: Axis-aligned layout bounding box
//! - [`WallSegment`]: Impassable line segment extracted from floor-plan artwork
//! - [`segments_intersect`], [`is_blocked`]: Obstruction testing

mod bounds;
mod obstruction;
mod point;
mod segment;

pub use bounds::Bounds;
pub use obstruction::{first_obstruction, is_blocked, segments_intersect};
pub use point::Point2D;
pub use segment::WallSegment;
