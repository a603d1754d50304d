//! Curated corridor connections.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An intended corridor connection between two waypoint ids.
///
/// Serialized as a two-element array: `["class_1", "invisible_1"]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CuratedEdge(pub String, pub String);

impl CuratedEdge {
    /// Create a curated edge.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self(from.into(), to.into())
    }

    /// First endpoint id.
    #[inline]
    pub fn first(&self) -> &str {
        &self.0
    }

    /// Second endpoint id.
    #[inline]
    pub fn second(&self) -> &str {
        &self.1
    }
}

impl fmt::Display for CuratedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.0, self.1)
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B)> for CuratedEdge {
    fn from((from, to): (A, B)) -> Self {
        Self::new(from, to)
    }
}
