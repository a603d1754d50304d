//! Configuration for the structural graph builder.

use serde::{Deserialize, Serialize};

use crate::core::Bounds;

/// Configuration for [`StructuralGraphBuilder`](super::StructuralGraphBuilder).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Radius for emergency links to isolated waypoints (floor-plan units).
    /// Default: 700.0
    pub emergency_radius: f64,

    /// Cap on emergency links per isolated waypoint.
    /// `None` links every unobstructed waypoint within the radius;
    /// `Some(k)` links only the k nearest.
    /// Default: None
    pub emergency_max_links: Option<usize>,

    /// Declared layout area. Waypoints outside it are left out of the build.
    /// Default: None (keep everything)
    pub layout_bounds: Option<Bounds>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            emergency_radius: 700.0,
            emergency_max_links: None,
            layout_bounds: None,
        }
    }
}

impl BuilderConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the emergency radius.
    pub fn with_emergency_radius(mut self, radius: f64) -> Self {
        self.emergency_radius = radius;
        self
    }

    /// Builder-style setter for the emergency link cap.
    pub fn with_emergency_max_links(mut self, max_links: usize) -> Self {
        self.emergency_max_links = Some(max_links);
        self
    }

    /// Builder-style setter for the layout bounds.
    pub fn with_layout_bounds(mut self, bounds: Bounds) -> Self {
        self.layout_bounds = Some(bounds);
        self
    }
}
