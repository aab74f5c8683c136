use std::path::PathBuf;

use wayfarer_core::model::graph::GraphError;

use crate::model::{estimator::EstimatorError, heuristic::HeuristicError};

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    InvalidUserInput(String),
    #[error("failure writing '{path}': {message}")]
    WriteError { path: PathBuf, message: String },
    #[error("{violations} of {checked} sampled vertex pairs have a landmark estimate above the exact distance")]
    AdmissibilityViolations { violations: usize, checked: usize },
    #[error(transparent)]
    GraphError(#[from] GraphError),
    #[error(transparent)]
    EstimatorError(#[from] EstimatorError),
    #[error(transparent)]
    HeuristicError(#[from] HeuristicError),
}
