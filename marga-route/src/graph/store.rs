//! Publication point for the current graph snapshot.
//!
//! Readers take an `Arc` to the snapshot and release the lock right away,
//! so a rebuild never blocks a search that is already running and a search
//! never sees a half-built graph.

use std::sync::Arc;

use log::info;
use parking_lot::RwLock;

use super::builder::StructuralGraphBuilder;
use super::diagnostics::BuildDiagnostics;
use super::snapshot::GraphSnapshot;
use crate::io::{FloorPlan, FloorPlanError};

struct Published {
    snapshot: Arc<GraphSnapshot>,
    generation: u64,
}

/// Holds the snapshot that new searches should use.
pub struct SnapshotStore {
    inner: RwLock<Published>,
}

impl SnapshotStore {
    /// Create a store publishing `snapshot` as generation 0.
    pub fn new(snapshot: GraphSnapshot) -> Self {
        Self {
            inner: RwLock::new(Published {
                snapshot: Arc::new(snapshot),
                generation: 0,
            }),
        }
    }

    /// The current snapshot.
    pub fn current(&self) -> Arc<GraphSnapshot> {
        Arc::clone(&self.inner.read().snapshot)
    }

    /// Number of snapshots published after the initial one.
    pub fn generation(&self) -> u64 {
        self.inner.read().generation
    }

    /// Replace the current snapshot, returning the one it replaced.
    pub fn publish(&self, snapshot: GraphSnapshot) -> Arc<GraphSnapshot> {
        let snapshot = Arc::new(snapshot);
        let mut inner = self.inner.write();
        inner.generation += 1;
        info!(
            "[Store] published generation {} ({} nodes, {} edges)",
            inner.generation,
            snapshot.node_count(),
            snapshot.edge_count()
        );
        std::mem::replace(&mut inner.snapshot, snapshot)
    }

    /// Build a fresh snapshot from `plan` and publish it.
    ///
    /// The build runs without holding the lock. On error the current
    /// snapshot stays published.
    pub fn rebuild(
        &self,
        builder: &StructuralGraphBuilder,
        plan: &FloorPlan,
    ) -> Result<BuildDiagnostics, FloorPlanError> {
        let output = builder.build_floor(plan)?;
        self.publish(output.snapshot);
        Ok(output.diagnostics)
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new(GraphSnapshot::default())
    }
}
