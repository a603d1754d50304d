//! Configuration loading for the routing core.
//!
//! Loads builder and search settings from a single TOML file with
//! defaults for everything left out.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use marga_route::config::RoutingConfig;
//!
//! // Load from default path (configs/routing.toml)
//! let config = RoutingConfig::load_default()?;
//!
//! // Convert to runtime configs
//! let builder = StructuralGraphBuilder::new(config.to_builder_config());
//! let search = PathSearch::new(&snapshot, config.to_search_config());
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`BuilderSection`] | Emergency radius, link cap, layout bounds |
//! | [`SearchSection`] | Heuristic, expansion budget |
//!
//! ## Example TOML
//!
//! ```toml
//! [builder]
//! emergency_radius = 700.0
//! emergency_max_links = 3
//!
//! [builder.layout_bounds]
//! min = { x = 0.0, y = 0.0 }
//! max = { x = 6000.0, y = 2500.0 }
//!
//! [search]
//! heuristic = "euclidean"   # or "zero" for Dijkstra
//! max_expansions = 10000
//! ```

mod defaults;
mod error;
mod routing;

pub use error::ConfigLoadError;
pub use routing::{BuilderSection, RoutingConfig, SearchSection};
