use serde::{Deserialize, Serialize};
use wayfarer_core::model::graph::EdgeClass;

/// settings for connected component analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentsConfig {
    /// edge classes that do not connect vertices
    pub forbidden_edge_classes: Vec<EdgeClass>,
}
