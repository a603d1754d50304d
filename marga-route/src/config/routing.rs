//! RoutingConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use super::error::ConfigLoadError;
use crate::core::Bounds;
use crate::graph::BuilderConfig;
use crate::search::{Heuristic, SearchConfig};

/// Full routing configuration loaded from TOML
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Graph builder settings
    #[serde(default)]
    pub builder: BuilderSection,

    /// Path search settings
    #[serde(default)]
    pub search: SearchSection,
}

/// `[builder]` section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuilderSection {
    /// Emergency link radius in floor-plan units (default: 700.0)
    #[serde(default = "defaults::emergency_radius")]
    pub emergency_radius: f64,

    /// Maximum emergency links per isolated node (default: unlimited)
    #[serde(default)]
    pub emergency_max_links: Option<usize>,

    /// Layout area; nodes outside are excluded (default: none)
    #[serde(default)]
    pub layout_bounds: Option<Bounds>,
}

impl Default for BuilderSection {
    fn default() -> Self {
        Self {
            emergency_radius: defaults::emergency_radius(),
            emergency_max_links: None,
            layout_bounds: None,
        }
    }
}

/// `[search]` section
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchSection {
    /// `euclidean` (A*) or `zero` (Dijkstra)
    #[serde(default)]
    pub heuristic: Heuristic,

    /// Expansion budget per search (default: unlimited)
    #[serde(default)]
    pub max_expansions: Option<usize>,
}

impl RoutingConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Load from default config path (configs/routing.toml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/routing.toml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from TOML string
    pub fn from_toml(toml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self = toml::from_str(toml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        let radius = self.builder.emergency_radius;
        if !radius.is_finite() || radius < 0.0 {
            return Err(ConfigLoadError::Parse(format!(
                "builder.emergency_radius must be a non-negative number, got {}",
                radius
            )));
        }
        Ok(())
    }

    /// Convert to BuilderConfig for StructuralGraphBuilder
    pub fn to_builder_config(&self) -> BuilderConfig {
        BuilderConfig {
            emergency_radius: self.builder.emergency_radius,
            emergency_max_links: self.builder.emergency_max_links,
            layout_bounds: self.builder.layout_bounds,
        }
    }

    /// Convert to SearchConfig for PathSearch
    pub fn to_search_config(&self) -> SearchConfig {
        SearchConfig {
            heuristic: self.search.heuristic,
            max_expansions: self.search.max_expansions,
        }
    }
}
