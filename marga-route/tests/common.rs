//! Test utilities for marga-route integration tests.
//!
//! Builders for small hand-made floors and access to the shipped
//! second-floor fixture.

#![allow(dead_code)]

use std::path::PathBuf;

use marga_route::core::WallSegment;
use marga_route::graph::{BuildOutput, BuilderConfig, CuratedEdge, StructuralGraphBuilder};
use marga_route::io::FloorPlan;
use marga_route::registry::{Node, NodeCategory, NodeRegistry};

/// Route the crate's log output through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Path of the shipped second-floor plan.
pub fn second_floor_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("floors/second_floor.toml")
}

/// Load the shipped second-floor plan.
pub fn second_floor() -> FloorPlan {
    FloorPlan::load(&second_floor_path()).expect("second floor fixture should load")
}

/// Registry of junction nodes.
pub fn registry(nodes: &[(&str, f64, f64)]) -> NodeRegistry {
    NodeRegistry::new(
        nodes
            .iter()
            .map(|&(id, x, y)| Node::new(id, x, y, NodeCategory::Junction))
            .collect(),
    )
    .expect("test nodes should be valid")
}

/// Curated edges from id pairs.
pub fn edges(pairs: &[(&str, &str)]) -> Vec<CuratedEdge> {
    pairs.iter().map(|&(a, b)| CuratedEdge::new(a, b)).collect()
}

/// Build with the default configuration.
pub fn build(
    nodes: &[(&str, f64, f64)],
    pairs: &[(&str, &str)],
    walls: &[WallSegment],
) -> BuildOutput {
    build_with(BuilderConfig::default(), nodes, pairs, walls)
}

/// Build with a custom configuration.
pub fn build_with(
    config: BuilderConfig,
    nodes: &[(&str, f64, f64)],
    pairs: &[(&str, &str)],
    walls: &[WallSegment],
) -> BuildOutput {
    StructuralGraphBuilder::new(config).build(&registry(nodes), &edges(pairs), walls)
}

/// A, B, C on one straight corridor plus a far-away D.
pub const CORRIDOR: &[(&str, f64, f64)] = &[
    ("A", 0.0, 0.0),
    ("B", 3.0, 4.0),
    ("C", 6.0, 8.0),
    ("D", 1000.0, 1000.0),
];
