//! Floor plan documents (TOML or JSON).
//!
//! ```toml
//! name = "second-floor"
//! edges = [["class_1", "invisible_1"], ["invisible_1", "invisible_3"]]
//!
//! [[nodes]]
//! id = "class_1"
//! x = 5500.0
//! y = 1900.0
//! type = "class"
//! label = "Class 1"
//! searchable = true
//!
//! [[walls]]
//! p1 = { x = 0.0, y = 0.0 }
//! p2 = { x = 0.0, y = 2500.0 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::WallSegment;
use crate::graph::CuratedEdge;
use crate::registry::{Node, NodeRegistry, RegistryError};

/// Floor plan loading errors.
#[derive(Error, Debug)]
pub enum FloorPlanError {
    /// File could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TOML.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Malformed JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Node list is invalid.
    #[error("invalid node list: {0}")]
    Registry(#[from] RegistryError),

    /// File extension is neither `.toml` nor `.json`.
    #[error("unsupported floor plan format: {0}")]
    UnsupportedFormat(String),
}

/// Curated data for one floor.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FloorPlan {
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Waypoints in registry order
    pub nodes: Vec<Node>,
    /// Intended corridor connections
    #[serde(default)]
    pub edges: Vec<CuratedEdge>,
    /// Extracted wall segments
    #[serde(default)]
    pub walls: Vec<WallSegment>,
}

impl FloorPlan {
    /// Parse a TOML floor plan.
    pub fn from_toml(toml: &str) -> Result<Self, FloorPlanError> {
        Ok(toml::from_str(toml)?)
    }

    /// Parse a JSON floor plan.
    pub fn from_json(json: &str) -> Result<Self, FloorPlanError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a floor plan, picking the format from the file extension.
    pub fn load(path: &Path) -> Result<Self, FloorPlanError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let plan = match extension.as_deref() {
            Some("toml") => Self::from_toml(&fs::read_to_string(path)?)?,
            Some("json") => Self::from_json(&fs::read_to_string(path)?)?,
            _ => {
                return Err(FloorPlanError::UnsupportedFormat(
                    path.display().to_string(),
                ));
            }
        };

        log::debug!(
            "[FloorPlan] loaded {}: {} nodes, {} edges, {} walls",
            path.display(),
            plan.nodes.len(),
            plan.edges.len(),
            plan.walls.len()
        );
        Ok(plan)
    }

    /// Build the node registry.
    pub fn registry(&self) -> Result<NodeRegistry, RegistryError> {
        NodeRegistry::new(self.nodes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::NodeCategory;
    use std::io::Write;

    const SAMPLE: &str = r#"
        name = "annex"
        edges = [["lobby", "lab"], ["lab", "stairs"]]

        [[nodes]]
        id = "lobby"
        x = 0.0
        y = 0.0
        type = "entrance"
        searchable = true

        [[nodes]]
        id = "lab"
        x = 30.0
        y = 40.0
        type = "class"
        label = "Robotics Lab"
        searchable = true
        cluster_size = 3

        [[nodes]]
        id = "stairs"
        x = 60.0
        y = 80.0
        type = "stairway"

        [[walls]]
        p1 = { x = 100.0, y = 0.0 }
        p2 = { x = 100.0, y = 100.0 }
    "#;

    #[test]
    fn test_from_toml() {
        let plan = FloorPlan::from_toml(SAMPLE).unwrap();
        assert_eq!(plan.name.as_deref(), Some("annex"));
        assert_eq!(plan.nodes.len(), 3);
        assert_eq!(plan.edges[1], CuratedEdge::new("lab", "stairs"));
        assert_eq!(plan.walls.len(), 1);

        let lab = &plan.nodes[1];
        assert_eq!(lab.category, NodeCategory::Class);
        assert_eq!(lab.label, "Robotics Lab");
        assert_eq!(lab.cluster_size, 3);
        assert!(!plan.nodes[2].searchable);
    }

    #[test]
    fn test_registry_fills_labels() {
        let plan = FloorPlan::from_toml(SAMPLE).unwrap();
        let registry = plan.registry().unwrap();
        assert_eq!(registry.get("lobby").unwrap().label, "lobby");
        assert_eq!(registry.get("stairs").unwrap().cluster_size, 1);
    }

    #[test]
    fn test_from_json() {
        let plan = FloorPlan::from_json(
            r#"{
                "nodes": [
                    {"id": "a", "x": 0, "y": 0, "type": "junction"},
                    {"id": "b", "x": 1, "y": 0, "type": "lift"}
                ],
                "edges": [["a", "b"]]
            }"#,
        )
        .unwrap();
        assert_eq!(plan.name, None);
        assert_eq!(plan.nodes[1].category, NodeCategory::Other("lift".to_string()));
        assert!(plan.walls.is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let plan = FloorPlan {
            nodes: vec![
                Node::new("a", 0.0, 0.0, NodeCategory::Class),
                Node::new("a", 1.0, 1.0, NodeCategory::Class),
            ],
            ..Default::default()
        };
        assert_eq!(
            plan.registry().unwrap_err(),
            RegistryError::DuplicateId("a".to_string())
        );
    }

    #[test]
    fn test_load_by_extension() {
        let mut toml_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        toml_file.write_all(SAMPLE.as_bytes()).unwrap();
        let plan = FloorPlan::load(toml_file.path()).unwrap();
        assert_eq!(plan.nodes.len(), 3);

        let mut json_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        json_file
            .write_all(serde_json::to_string(&plan).unwrap().as_bytes())
            .unwrap();
        assert_eq!(FloorPlan::load(json_file.path()).unwrap(), plan);

        let yaml_file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        assert!(matches!(
            FloorPlan::load(yaml_file.path()),
            Err(FloorPlanError::UnsupportedFormat(_))
        ));
    }
}
