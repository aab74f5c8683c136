use serde::{Deserialize, Serialize};
use wayfarer_core::model::graph::VertexId;

/// offline landmark artifact. unreached distances are written as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkExport {
    pub n_vertices: usize,
    pub landmarks: Vec<LandmarkRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkRecord {
    pub vertex_id: VertexId,
    pub distances: Vec<Option<f64>>,
}
