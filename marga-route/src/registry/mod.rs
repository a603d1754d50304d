//! Waypoint registry.
//!
//! The registry is the curated set of waypoints for one floor. It keeps
//! registry (insertion) order, which the graph builder and the search use
//! for deterministic iteration, and an id index for O(1) lookups.

mod index;
mod node;

pub use index::{NodeRegistry, RegistryError};
pub use node::{Node, NodeCategory};
