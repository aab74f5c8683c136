use crate::model::heuristic::HeuristicError;

#[derive(thiserror::Error, Debug)]
pub enum ProfileError {
    #[error("cannot build the {strategy} profile: {source}")]
    MissingArtifact {
        strategy: String,
        source: HeuristicError,
    },
    #[error(transparent)]
    HeuristicError(#[from] HeuristicError),
}
