//! Structural graph builder.
//!
//! Builds the walkable adjacency of one floor from curated intent rather
//! than raw proximity: only corridor connections somebody declared are
//! used, and each one must be free of walls. Waypoints left without any
//! connection get emergency links to nearby unobstructed waypoints.

use std::collections::BTreeMap;

use log::{debug, info, warn};

use super::config::BuilderConfig;
use super::curated::CuratedEdge;
use super::diagnostics::{BuildDiagnostic, BuildDiagnostics};
use super::snapshot::GraphSnapshot;
use crate::core::{WallSegment, first_obstruction, is_blocked};
use crate::io::{FloorPlan, FloorPlanError};
use crate::registry::NodeRegistry;

/// Result of one build.
#[derive(Clone, Debug)]
pub struct BuildOutput {
    /// The built graph.
    pub snapshot: GraphSnapshot,
    /// Skipped edges, repairs, and residual isolation.
    pub diagnostics: BuildDiagnostics,
}

/// Builds [`GraphSnapshot`]s from curated floor data.
///
/// # Example
///
/// ```rust
/// use marga_route::core::WallSegment;
/// use marga_route::graph::{CuratedEdge, StructuralGraphBuilder};
/// use marga_route::registry::{Node, NodeCategory, NodeRegistry};
///
/// let registry = NodeRegistry::new(vec![
///     Node::new("a", 0.0, 0.0, NodeCategory::Class),
///     Node::new("b", 3.0, 4.0, NodeCategory::Junction),
/// ])
/// .unwrap();
/// let edges = vec![CuratedEdge::new("a", "b")];
/// let walls: Vec<WallSegment> = Vec::new();
///
/// let output = StructuralGraphBuilder::with_defaults().build(&registry, &edges, &walls);
/// assert_eq!(output.snapshot.weight("a", "b"), Some(5.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StructuralGraphBuilder {
    config: BuilderConfig,
}

/// Neighbor maps during construction, keyed by registry index.
type WorkingAdjacency = Vec<BTreeMap<usize, f64>>;

impl StructuralGraphBuilder {
    /// Create a builder with the given configuration.
    pub fn new(config: BuilderConfig) -> Self {
        Self { config }
    }

    /// Create a builder with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(BuilderConfig::default())
    }

    /// Get the configuration.
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Build a snapshot from a loaded floor plan.
    pub fn build_floor(&self, plan: &FloorPlan) -> Result<BuildOutput, FloorPlanError> {
        let registry = plan.registry()?;
        Ok(self.build(&registry, &plan.edges, &plan.walls))
    }

    /// Build a snapshot.
    ///
    /// Never fails: unknown ids, self-loops, and wall-blocked edges are
    /// skipped and recorded in the returned diagnostics.
    pub fn build(
        &self,
        registry: &NodeRegistry,
        edges: &[CuratedEdge],
        walls: &[WallSegment],
    ) -> BuildOutput {
        let mut diagnostics = BuildDiagnostics::new();

        let registry = match &self.config.layout_bounds {
            Some(bounds) => {
                let (kept, excluded) = registry.retain_within(bounds);
                for node in excluded {
                    debug!("[Builder] excluded {} (outside layout bounds)", node);
                    diagnostics.push(BuildDiagnostic::ExcludedOutOfBounds { node });
                }
                kept
            }
            None => registry.clone(),
        };

        let mut adjacency: WorkingAdjacency = vec![BTreeMap::new(); registry.len()];

        self.add_curated_edges(&registry, edges, walls, &mut adjacency, &mut diagnostics);
        self.add_emergency_links(&registry, walls, &mut adjacency, &mut diagnostics);

        let adjacency: Vec<Vec<(usize, f64)>> = adjacency
            .into_iter()
            .map(|neighbors| neighbors.into_iter().collect())
            .collect();
        let snapshot = GraphSnapshot::from_parts(registry, adjacency);

        info!(
            "[Builder] graph built: {} nodes, {} edges ({} curated, {} emergency), {} diagnostics",
            snapshot.node_count(),
            snapshot.edge_count(),
            diagnostics.curated_edges_created,
            diagnostics.emergency_edges_created,
            diagnostics.len()
        );

        BuildOutput {
            snapshot,
            diagnostics,
        }
    }

    /// Insert every resolvable, unobstructed curated edge.
    fn add_curated_edges(
        &self,
        registry: &NodeRegistry,
        edges: &[CuratedEdge],
        walls: &[WallSegment],
        adjacency: &mut WorkingAdjacency,
        diagnostics: &mut BuildDiagnostics,
    ) {
        for edge in edges {
            let (Some(a), Some(b)) = (
                registry.index_of(edge.first()),
                registry.index_of(edge.second()),
            ) else {
                let missing = if registry.contains(edge.first()) {
                    edge.second()
                } else {
                    edge.first()
                };
                warn!("[Builder] skipped {}: unknown node {}", edge, missing);
                diagnostics.push(BuildDiagnostic::UnknownReference {
                    edge: edge.clone(),
                    missing: missing.to_string(),
                });
                continue;
            };

            if a == b {
                warn!("[Builder] skipped self-loop on {}", edge.first());
                diagnostics.push(BuildDiagnostic::SelfLoop {
                    node: edge.first().to_string(),
                });
                continue;
            }

            let from = registry.node_at(a);
            let to = registry.node_at(b);

            if let Some(wall) = first_obstruction(from.position(), to.position(), walls) {
                warn!("[Builder] blocked by wall #{}: {}", wall, edge);
                diagnostics.push(BuildDiagnostic::BlockedByWall {
                    edge: edge.clone(),
                    wall,
                });
                continue;
            }

            let distance = from.distance(to);
            if insert_symmetric(adjacency, a, b, distance) {
                diagnostics.curated_edges_created += 1;
                debug!("[Builder] curated edge {} ({:.1})", edge, distance);
            }
        }
    }

    /// Link each isolated node to unobstructed nodes within the emergency radius.
    ///
    /// Nodes are visited in registry order and isolation is judged when a
    /// node is reached, so a node linked while repairing an earlier one is
    /// not repaired again.
    fn add_emergency_links(
        &self,
        registry: &NodeRegistry,
        walls: &[WallSegment],
        adjacency: &mut WorkingAdjacency,
        diagnostics: &mut BuildDiagnostics,
    ) {
        let radius = self.config.emergency_radius;

        for i in 0..registry.len() {
            if !adjacency[i].is_empty() {
                continue;
            }
            let node = registry.node_at(i);

            let mut candidates: Vec<(usize, f64)> = registry
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .filter_map(|(j, other)| {
                    let distance = node.distance(other);
                    (distance <= radius && !is_blocked(node.position(), other.position(), walls))
                        .then_some((j, distance))
                })
                .collect();

            if let Some(max_links) = self.config.emergency_max_links {
                // Stable sort keeps registry order among equal distances
                candidates.sort_by(|a, b| a.1.total_cmp(&b.1));
                candidates.truncate(max_links);
            }

            for (j, distance) in candidates {
                if insert_symmetric(adjacency, i, j, distance) {
                    diagnostics.emergency_edges_created += 1;
                }
                let other = registry.node_at(j);
                info!(
                    "[Builder] emergency link {} <-> {} ({:.1})",
                    node.id, other.id, distance
                );
                diagnostics.push(BuildDiagnostic::EmergencyLink {
                    from: node.id.clone(),
                    to: other.id.clone(),
                    distance,
                });
            }

            if adjacency[i].is_empty() {
                warn!(
                    "[Builder] {} remains isolated: no unobstructed node within {:.1}",
                    node.id, radius
                );
                diagnostics.push(BuildDiagnostic::StillIsolated {
                    node: node.id.clone(),
                });
            }
        }
    }
}

/// Insert `a <-> b`. Returns false if the edge already existed.
fn insert_symmetric(adjacency: &mut WorkingAdjacency, a: usize, b: usize, weight: f64) -> bool {
    let fresh = adjacency[a].insert(b, weight).is_none();
    adjacency[b].insert(a, weight);
    fresh
}
