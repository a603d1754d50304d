//! Path search over built graph snapshots.
//!
//! A* with a straight-line heuristic. The heuristic never overestimates
//! because every edge weight is the Euclidean distance between its ends,
//! so the result is the same shortest path Dijkstra would find.
//!
//! # Example
//!
//! ```rust
//! use marga_route::graph::{CuratedEdge, StructuralGraphBuilder};
//! use marga_route::registry::{Node, NodeCategory, NodeRegistry};
//! use marga_route::search::find_path;
//!
//! let registry = NodeRegistry::new(vec![
//!     Node::new("A", 0.0, 0.0, NodeCategory::Class),
//!     Node::new("B", 3.0, 4.0, NodeCategory::Junction),
//!     Node::new("C", 6.0, 8.0, NodeCategory::Class),
//! ])
//! .unwrap();
//! let edges = vec![CuratedEdge::new("A", "B"), CuratedEdge::new("B", "C")];
//! let output = StructuralGraphBuilder::with_defaults().build(&registry, &edges, &[]);
//!
//! let result = find_path(&output.snapshot, "A", "C").unwrap();
//! assert_eq!(result.path, vec!["A", "B", "C"]);
//! assert!((result.cost - 10.0).abs() < 1e-9);
//! ```

mod planner;
mod types;

pub use planner::PathSearch;
pub use types::{Heuristic, PathFailure, PathResult, SearchConfig, SearchError};

use crate::graph::GraphSnapshot;

/// Find a path with the default configuration.
pub fn find_path(
    snapshot: &GraphSnapshot,
    start: &str,
    goal: &str,
) -> Result<PathResult, SearchError> {
    PathSearch::with_defaults(snapshot).find_path(start, goal)
}

/// Check whether `goal` is reachable from `start`.
pub fn path_exists(snapshot: &GraphSnapshot, start: &str, goal: &str) -> Result<bool, SearchError> {
    Ok(find_path(snapshot, start, goal)?.success)
}
