use std::path::PathBuf;

use wayfarer_core::model::graph::{GraphError, VertexId};

#[derive(thiserror::Error, Debug)]
pub enum EstimatorError {
    #[error("precomputation aborted")]
    Aborted,
    #[error("vertex {0} is not in the graph")]
    InvalidVertex(VertexId),
    #[error("no landmark candidates could be found: {0}")]
    NoCandidates(String),
    #[error("landmark export is invalid: {0}")]
    InvalidExport(String),
    #[error("failure reading '{path}': {message}")]
    ReadError { path: PathBuf, message: String },
    #[error("failure writing '{path}': {message}")]
    WriteError { path: PathBuf, message: String },
    #[error(transparent)]
    GraphError(#[from] GraphError),
}
