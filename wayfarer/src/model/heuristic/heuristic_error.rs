use std::path::PathBuf;

use wayfarer_core::model::graph::VertexId;

use crate::model::estimator::EstimatorError;

#[derive(thiserror::Error, Debug)]
pub enum HeuristicError {
    #[error("heuristic '{heuristic}' requires {artifact}, which was not loaded")]
    MissingArtifact {
        heuristic: String,
        artifact: String,
    },
    #[error("vertex {0} is not in the graph")]
    InvalidVertex(VertexId),
    #[error("heuristic precomputation aborted")]
    Aborted,
    #[error("invalid connection matrix data: {0}")]
    InvalidData(String),
    #[error("failure reading '{path}': {message}")]
    ReadError { path: PathBuf, message: String },
    #[error(transparent)]
    EstimatorError(#[from] EstimatorError),
}
