use std::path::PathBuf;

use super::{EdgeId, VertexId};

#[derive(thiserror::Error, Debug)]
pub enum GraphError {
    #[error("vertex {0} does not exist in the graph")]
    VertexNotFound(VertexId),
    #[error("edge {0} does not exist in the graph")]
    EdgeNotFound(EdgeId),
    #[error("vertex at index {index} has id {found}, vertex ids must match their index")]
    VertexIndexMismatch { index: usize, found: VertexId },
    #[error("edge at index {index} has id {found}, edge ids must match their index")]
    EdgeIndexMismatch { index: usize, found: EdgeId },
    #[error("edge {edge_id} has invalid distance {distance}, must be finite and non-negative")]
    InvalidDistance { edge_id: EdgeId, distance: f64 },
    #[error("edge {edge_id} references missing vertex {vertex_id}")]
    DanglingEdge { edge_id: EdgeId, vertex_id: VertexId },
    #[error("Error reading from '{path}': {message}")]
    ReadError { path: PathBuf, message: String },
    #[error("failure deserializing graph document: {0}")]
    DeserializeError(String),
}
