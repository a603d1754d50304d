//! # Marga-Route: Structural Indoor Routing
//!
//! Turns curated floor-plan waypoints into a wall-aware walking graph and
//! answers shortest-route queries over it.
//!
//! ## Features
//!
//! - **Curated topology**: Only corridor connections that somebody declared
//!   become edges, so routes never cut through rooms or between corridors
//! - **Wall obstruction**: Declared connections that cross wall geometry are
//!   rejected and reported
//! - **Emergency connectivity**: Waypoints left without any connection are
//!   linked to nearby unobstructed waypoints
//! - **A* search**: Euclidean heuristic over Euclidean weights, with a
//!   Dijkstra variant and an optional expansion budget
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_route::graph::StructuralGraphBuilder;
//! use marga_route::io::FloorPlan;
//! use marga_route::search::{PathSearch, SearchConfig};
//!
//! let plan = FloorPlan::from_toml(r#"
//!     edges = [["lobby", "hall"], ["hall", "lab"]]
//!
//!     [[nodes]]
//!     id = "lobby"
//!     x = 0.0
//!     y = 0.0
//!     type = "entrance"
//!
//!     [[nodes]]
//!     id = "hall"
//!     x = 3.0
//!     y = 4.0
//!     type = "intersection"
//!
//!     [[nodes]]
//!     id = "lab"
//!     x = 6.0
//!     y = 8.0
//!     type = "class"
//!     searchable = true
//! "#).unwrap();
//!
//! let output = StructuralGraphBuilder::with_defaults().build_floor(&plan).unwrap();
//! assert!(output.diagnostics.is_empty());
//!
//! let search = PathSearch::new(&output.snapshot, SearchConfig::default());
//! let route = search.find_path("lobby", "lab").unwrap();
//! assert_eq!(route.path, vec!["lobby", "hall", "lab"]);
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Geometric types and the wall obstruction test
//! - [`registry`]: Waypoints and the id-indexed registry
//! - [`io`]: Floor plan documents (TOML / JSON)
//! - [`graph`]: Graph builder, immutable snapshots, publishing, validation
//! - [`search`]: A* / Dijkstra path search
//! - [`config`]: TOML configuration
//!
//! ## Data Flow
//!
//! ```text
//!     ┌──────────────────┐
//!     │    FloorPlan     │  nodes, curated edges, walls
//!     └────────┬─────────┘
//!              │ registry()
//!              ▼
//!     ┌──────────────────┐      ┌──────────────────┐
//!     │   NodeRegistry   │─────▶│ StructuralGraph  │  curated edges
//!     └──────────────────┘      │     Builder      │  + emergency pass
//!                               └────────┬─────────┘
//!                                        │ BuildOutput
//!              ┌─────────────────────────┼──────────────────────┐
//!              ▼                         ▼                      ▼
//!     ┌──────────────────┐      ┌──────────────────┐   ┌──────────────────┐
//!     │ BuildDiagnostics │      │  GraphSnapshot   │──▶│  SnapshotStore   │
//!     └──────────────────┘      │   (immutable)    │   │ (Arc swap-on-    │
//!                               └────────┬─────────┘   │  write)          │
//!                                        │             └──────────────────┘
//!                                        ▼
//!                               ┌──────────────────┐
//!                               │    PathSearch    │──▶ PathResult
//!                               └──────────────────┘
//! ```
//!
//! ## Coordinate Frame
//!
//! Coordinates are floor-plan artwork units. Y grows downward in plans
//! digitized from SVG; nothing here depends on the axis direction.

pub mod config;
pub mod core;
pub mod graph;
pub mod io;
pub mod registry;
pub mod search;

pub use config::{ConfigLoadError, RoutingConfig};
pub use crate::core::{Bounds, Point2D, WallSegment};
pub use graph::{
    BuildDiagnostic, BuildDiagnostics, BuildOutput, BuilderConfig, ConnectivityReport,
    CuratedEdge, GraphSnapshot, SnapshotError, SnapshotStore, StructuralGraphBuilder,
};
pub use io::{FloorPlan, FloorPlanError};
pub use registry::{Node, NodeCategory, NodeRegistry, RegistryError};
pub use search::{
    Heuristic, PathFailure, PathResult, PathSearch, SearchConfig, SearchError, find_path,
};
