use wayfarer_core::model::state::StateError;

use crate::model::{heuristic::HeuristicError, profile::ProfileError};

#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    #[error("no zero-weight origin among {0} consumed states, replanning requires a prior run")]
    MissingOrigin(usize),
    #[error("search aborted")]
    Aborted,
    #[error(transparent)]
    HeuristicError(#[from] HeuristicError),
    #[error(transparent)]
    ProfileError(#[from] ProfileError),
    #[error(transparent)]
    StateError(#[from] StateError),
}
