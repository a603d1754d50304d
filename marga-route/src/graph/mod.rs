//! Structural graph construction.
//!
//! Turns a waypoint registry, a curated list of intended corridor
//! connections, and wall geometry into an immutable weighted graph snapshot.
//!
//! # Algorithm Overview
//!
//! 1. **Layout filter** (optional): drop waypoints outside the layout bounds
//! 2. **Curated edges**: insert every curated pair whose straight walk
//!    crosses no wall, weighted by Euclidean distance
//! 3. **Emergency pass**: link each still-isolated waypoint to unobstructed
//!    waypoints within the emergency radius
//!
//! Anomalies (unknown ids, wall-blocked edges, residual isolation) are
//! collected in [`BuildDiagnostics`]; a build never fails on them.
//!
//! # Publishing
//!
//! [`GraphSnapshot`] is never mutated after a build. [`SnapshotStore`]
//! publishes a new snapshot by swapping an `Arc`, so readers in flight keep
//! the graph they started with.

pub mod builder;
pub mod config;
pub mod curated;
pub mod diagnostics;
pub mod snapshot;
pub mod store;
pub mod validation;

pub use builder::{BuildOutput, StructuralGraphBuilder};
pub use config::BuilderConfig;
pub use curated::CuratedEdge;
pub use diagnostics::{BuildDiagnostic, BuildDiagnostics};
pub use snapshot::{GraphSnapshot, SnapshotDocument, SnapshotError};
pub use store::SnapshotStore;
pub use validation::{ConnectivityReport, InvariantViolation, check_invariants, unreachable_pairs};
