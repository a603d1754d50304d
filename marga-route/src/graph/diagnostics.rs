//! Build diagnostics.
//!
//! Everything the builder skipped, repaired, or could not repair. A build
//! always completes; callers inspect these to judge data quality.

use serde::Serialize;

use super::curated::CuratedEdge;

/// One build-time anomaly or repair.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BuildDiagnostic {
    /// Waypoint lies outside the declared layout bounds and was left out.
    ExcludedOutOfBounds {
        /// Excluded node id
        node: String,
    },
    /// Curated edge names an id that is not in the registry.
    UnknownReference {
        /// The offending edge
        edge: CuratedEdge,
        /// The id that could not be resolved
        missing: String,
    },
    /// Curated edge connects a node to itself.
    SelfLoop {
        /// Node id
        node: String,
    },
    /// Curated edge crosses a wall and was rejected.
    BlockedByWall {
        /// The rejected edge
        edge: CuratedEdge,
        /// Index of the first wall crossed
        wall: usize,
    },
    /// Edge added by the emergency pass.
    EmergencyLink {
        /// The isolated node being repaired
        from: String,
        /// The node it was linked to
        to: String,
        /// Edge weight
        distance: f64,
    },
    /// Node still has no neighbors after the emergency pass.
    StillIsolated {
        /// Node id
        node: String,
    },
}

/// Accumulated diagnostics of one build.
#[derive(Clone, Debug, Default, Serialize)]
pub struct BuildDiagnostics {
    entries: Vec<BuildDiagnostic>,
    /// Curated edges inserted (first insertion only).
    pub curated_edges_created: usize,
    /// Edges inserted by the emergency pass.
    pub emergency_edges_created: usize,
}

impl BuildDiagnostics {
    /// Create an empty diagnostics list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic.
    pub fn push(&mut self, diagnostic: BuildDiagnostic) {
        self.entries.push(diagnostic);
    }

    /// All diagnostics in the order they were recorded.
    pub fn entries(&self) -> &[BuildDiagnostic] {
        &self.entries
    }

    /// Number of diagnostics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Curated edges that referenced unknown ids.
    pub fn unknown_references(&self) -> impl Iterator<Item = (&CuratedEdge, &str)> {
        self.entries.iter().filter_map(|d| match d {
            BuildDiagnostic::UnknownReference { edge, missing } => Some((edge, missing.as_str())),
            _ => None,
        })
    }

    /// Curated edges rejected by walls, with the blocking wall index.
    pub fn blocked_edges(&self) -> impl Iterator<Item = (&CuratedEdge, usize)> {
        self.entries.iter().filter_map(|d| match d {
            BuildDiagnostic::BlockedByWall { edge, wall } => Some((edge, *wall)),
            _ => None,
        })
    }

    /// Emergency links as `(isolated, linked, distance)`.
    pub fn emergency_links(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.entries.iter().filter_map(|d| match d {
            BuildDiagnostic::EmergencyLink { from, to, distance } => {
                Some((from.as_str(), to.as_str(), *distance))
            }
            _ => None,
        })
    }

    /// Nodes left without any neighbor.
    pub fn isolated_nodes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|d| match d {
            BuildDiagnostic::StillIsolated { node } => Some(node.as_str()),
            _ => None,
        })
    }

    /// Nodes dropped by the layout filter.
    pub fn excluded_nodes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|d| match d {
            BuildDiagnostic::ExcludedOutOfBounds { node } => Some(node.as_str()),
            _ => None,
        })
    }

    /// True if some node could not be connected at all.
    pub fn has_residual_disconnection(&self) -> bool {
        self.isolated_nodes().next().is_some()
    }
}
