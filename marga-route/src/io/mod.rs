//! Floor plan input.
//!
//! A floor plan is the declarative description of one floor: its curated
//! waypoints, the corridor connections somebody vouched for, and the wall
//! segments already extracted from the floor-plan artwork.

mod floor_plan;

pub use floor_plan::{FloorPlan, FloorPlanError};
