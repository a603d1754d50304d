//! A* search over a graph snapshot.

use std::collections::BinaryHeap;

use log::{debug, trace};

use super::types::{Heuristic, OpenEntry, PathFailure, PathResult, SearchConfig, SearchError};
use crate::core::Point2D;
use crate::graph::GraphSnapshot;

/// Shortest-path search over one snapshot.
///
/// Each call keeps its own score vectors, so any number of searches may run
/// against the same snapshot at once.
pub struct PathSearch<'a> {
    snapshot: &'a GraphSnapshot,
    config: SearchConfig,
}

impl<'a> PathSearch<'a> {
    /// Create a new search
    pub fn new(snapshot: &'a GraphSnapshot, config: SearchConfig) -> Self {
        Self { snapshot, config }
    }

    /// Create with default configuration (A*, unbounded)
    pub fn with_defaults(snapshot: &'a GraphSnapshot) -> Self {
        Self::new(snapshot, SearchConfig::default())
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find the cheapest path from `start` to `goal`.
    ///
    /// # Errors
    /// [`SearchError::ReferenceNotFound`] if either id is not in the snapshot.
    /// An unreachable goal is not an error: the result carries
    /// [`PathFailure::NoPath`].
    pub fn find_path(&self, start: &str, goal: &str) -> Result<PathResult, SearchError> {
        trace!("[Search] find_path: {} -> {}", start, goal);

        let start_idx = self.lookup(start)?;
        let goal_idx = self.lookup(goal)?;

        if start_idx == goal_idx {
            return Ok(PathResult {
                path: vec![start.to_string()],
                cost: 0.0,
                nodes_expanded: 0,
                success: true,
                failure_reason: None,
            });
        }

        let registry = self.snapshot.registry();
        let goal_pos = registry.node_at(goal_idx).position();
        let n = self.snapshot.node_count();

        let mut g_score = vec![f64::INFINITY; n];
        let mut came_from: Vec<Option<usize>> = vec![None; n];
        let mut closed = vec![false; n];
        let mut open = BinaryHeap::new();
        let mut nodes_expanded = 0;

        g_score[start_idx] = 0.0;
        open.push(OpenEntry {
            f_score: self.heuristic(registry.node_at(start_idx).position(), goal_pos),
            node: start_idx,
        });

        while let Some(OpenEntry { node: current, .. }) = open.pop() {
            // Stale entry for a node already settled with a better score
            if closed[current] {
                continue;
            }

            if self
                .config
                .max_expansions
                .is_some_and(|max| nodes_expanded >= max)
            {
                debug!(
                    "[Search] FAILED: MaxExpansionsExceeded after {} expansions ({} -> {})",
                    nodes_expanded, start, goal
                );
                return Ok(PathResult::failed(
                    PathFailure::MaxExpansionsExceeded,
                    nodes_expanded,
                ));
            }

            closed[current] = true;
            nodes_expanded += 1;

            if current == goal_idx {
                return Ok(self.reconstruct(
                    &came_from,
                    start_idx,
                    goal_idx,
                    g_score[goal_idx],
                    nodes_expanded,
                ));
            }

            for &(neighbor, weight) in self.snapshot.adjacency_at(current) {
                if closed[neighbor] {
                    continue;
                }
                let tentative = g_score[current] + weight;
                if tentative < g_score[neighbor] {
                    g_score[neighbor] = tentative;
                    came_from[neighbor] = Some(current);
                    open.push(OpenEntry {
                        f_score: tentative
                            + self.heuristic(registry.node_at(neighbor).position(), goal_pos),
                        node: neighbor,
                    });
                }
            }
        }

        debug!(
            "[Search] FAILED: NoPath {} -> {} ({} nodes expanded)",
            start, goal, nodes_expanded
        );
        Ok(PathResult::failed(PathFailure::NoPath, nodes_expanded))
    }

    fn lookup(&self, id: &str) -> Result<usize, SearchError> {
        self.snapshot
            .index_of(id)
            .ok_or_else(|| SearchError::ReferenceNotFound(id.to_string()))
    }

    #[inline]
    fn heuristic(&self, from: Point2D, goal: Point2D) -> f64 {
        match self.config.heuristic {
            Heuristic::Euclidean => from.distance(&goal),
            Heuristic::Zero => 0.0,
        }
    }

    /// Walk predecessors back from the goal.
    fn reconstruct(
        &self,
        came_from: &[Option<usize>],
        start: usize,
        goal: usize,
        cost: f64,
        nodes_expanded: usize,
    ) -> PathResult {
        let mut indices = vec![goal];
        let mut current = goal;
        while let Some(prev) = came_from[current] {
            indices.push(prev);
            current = prev;
        }
        indices.reverse();

        if indices.first() != Some(&start) {
            debug!("[Search] FAILED: predecessor chain does not reach start");
            return PathResult::failed(PathFailure::NoPath, nodes_expanded);
        }

        let registry = self.snapshot.registry();
        let path: Vec<String> = indices
            .into_iter()
            .map(|idx| registry.node_at(idx).id.clone())
            .collect();

        debug!(
            "[Search] SUCCESS: {} hops, cost {:.2}, {} nodes expanded",
            path.len() - 1,
            cost,
            nodes_expanded
        );

        PathResult {
            path,
            cost,
            nodes_expanded,
            success: true,
            failure_reason: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{CuratedEdge, StructuralGraphBuilder};
    use crate::registry::{Node, NodeCategory, NodeRegistry};
    use approx::assert_relative_eq;

    fn build(nodes: &[(&str, f64, f64)], pairs: &[(&str, &str)]) -> GraphSnapshot {
        let registry = NodeRegistry::new(
            nodes
                .iter()
                .map(|&(id, x, y)| Node::new(id, x, y, NodeCategory::Junction))
                .collect(),
        )
        .unwrap();
        let edges: Vec<CuratedEdge> = pairs.iter().map(|&(a, b)| CuratedEdge::new(a, b)).collect();
        StructuralGraphBuilder::with_defaults()
            .build(&registry, &edges, &[])
            .snapshot
    }

    fn abc() -> GraphSnapshot {
        build(
            &[("A", 0.0, 0.0), ("B", 3.0, 4.0), ("C", 6.0, 8.0), ("D", 1000.0, 1000.0)],
            &[("A", "B"), ("B", "C")],
        )
    }

    #[test]
    fn test_straight_corridor() {
        let snapshot = abc();
        let result = PathSearch::with_defaults(&snapshot).find_path("A", "C").unwrap();

        assert!(result.success);
        assert_eq!(result.path, vec!["A", "B", "C"]);
        assert_relative_eq!(result.cost, 10.0, epsilon = 1e-9);
        assert_eq!(result.hops(), 2);
    }

    #[test]
    fn test_isolated_node_no_path() {
        let snapshot = abc();
        assert_eq!(snapshot.degree("D"), Some(0));

        let result = PathSearch::with_defaults(&snapshot).find_path("D", "A").unwrap();
        assert!(!result.success);
        assert_eq!(result.failure_reason, Some(PathFailure::NoPath));
        assert!(result.path.is_empty());
        assert_eq!(result.nodes_expanded, 1);
    }

    #[test]
    fn test_unknown_id() {
        let snapshot = abc();
        let search = PathSearch::with_defaults(&snapshot);
        assert_eq!(
            search.find_path("A", "unknown_id"),
            Err(SearchError::ReferenceNotFound("unknown_id".to_string()))
        );
        assert_eq!(
            search.find_path("nowhere", "A"),
            Err(SearchError::ReferenceNotFound("nowhere".to_string()))
        );
    }

    #[test]
    fn test_same_start_and_goal() {
        let snapshot = abc();
        let result = PathSearch::with_defaults(&snapshot).find_path("D", "D").unwrap();
        assert!(result.success);
        assert_eq!(result.path, vec!["D"]);
        assert_eq!(result.cost, 0.0);
    }

    #[test]
    fn test_prefers_cheaper_detour() {
        // Two routes to g; the one through m is shorter
        let snapshot = build(
            &[("s", 0.0, 0.0), ("m", 5.0, 1.0), ("far", 5.0, 50.0), ("g", 10.0, 0.0)],
            &[("s", "m"), ("m", "g"), ("s", "far"), ("far", "g")],
        );
        let result = PathSearch::with_defaults(&snapshot).find_path("s", "g").unwrap();
        assert_eq!(result.path, vec!["s", "m", "g"]);
        assert_relative_eq!(result.cost, 2.0 * 26.0_f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn test_dijkstra_matches_astar_cost() {
        let snapshot = build(
            &[
                ("a", 0.0, 0.0),
                ("b", 10.0, 0.0),
                ("c", 10.0, 10.0),
                ("d", 0.0, 10.0),
                ("e", 20.0, 5.0),
            ],
            &[("a", "b"), ("b", "c"), ("c", "d"), ("d", "a"), ("b", "e"), ("c", "e")],
        );
        for (start, goal) in [("a", "e"), ("d", "e"), ("e", "a"), ("a", "c")] {
            let astar = PathSearch::with_defaults(&snapshot).find_path(start, goal).unwrap();
            let dijkstra = PathSearch::new(&snapshot, SearchConfig::dijkstra())
                .find_path(start, goal)
                .unwrap();
            assert!(astar.success && dijkstra.success);
            assert_relative_eq!(astar.cost, dijkstra.cost, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_max_expansions() {
        let snapshot = build(
            &[
                ("n0", 0.0, 0.0),
                ("n1", 1.0, 0.0),
                ("n2", 2.0, 0.0),
                ("n3", 3.0, 0.0),
                ("n4", 4.0, 0.0),
            ],
            &[("n0", "n1"), ("n1", "n2"), ("n2", "n3"), ("n3", "n4")],
        );

        let limited = PathSearch::new(&snapshot, SearchConfig::new().with_max_expansions(2))
            .find_path("n0", "n4")
            .unwrap();
        assert!(!limited.success);
        assert_eq!(limited.failure_reason, Some(PathFailure::MaxExpansionsExceeded));
        assert_eq!(limited.nodes_expanded, 2);

        let enough = PathSearch::new(&snapshot, SearchConfig::new().with_max_expansions(5))
            .find_path("n0", "n4")
            .unwrap();
        assert!(enough.success);
        assert_eq!(enough.path.len(), 5);
    }

    #[test]
    fn test_equal_cost_tie_is_deterministic() {
        // Two mirror-image routes of equal cost
        let snapshot = build(
            &[("s", 0.0, 0.0), ("up", 5.0, 5.0), ("down", 5.0, -5.0), ("g", 10.0, 0.0)],
            &[("s", "up"), ("up", "g"), ("s", "down"), ("down", "g")],
        );
        let first = PathSearch::with_defaults(&snapshot).find_path("s", "g").unwrap();
        for _ in 0..10 {
            let again = PathSearch::with_defaults(&snapshot).find_path("s", "g").unwrap();
            assert_eq!(again.path, first.path);
        }
        assert_eq!(first.path.len(), 3);
    }

    #[test]
    fn test_path_cost_agrees_with_result() {
        let snapshot = abc();
        let result = PathSearch::with_defaults(&snapshot).find_path("C", "A").unwrap();
        assert_eq!(result.path, vec!["C", "B", "A"]);
        assert_relative_eq!(snapshot.path_cost(&result.path).unwrap(), result.cost, epsilon = 1e-9);
    }
}
