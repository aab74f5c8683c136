use wayfarer_core::model::request::{HeuristicType, SearchDirection};

use super::{
    connection_matrix::{
        ConnectionMatrixRemainingWeightHeuristic, ConnectionMatrixShortestPathTreeHeuristic,
    },
    EuclideanRemainingWeightHeuristic, HeuristicError, InterleavedBidirectionalHeuristic,
    LandmarkRemainingWeightHeuristic, RemainingWeightHeuristic, TrivialRemainingWeightHeuristic,
};
use crate::model::context::RoutingContext;

/// builds an uninitialized heuristic of the given type for searches in
/// `direction`. fails when the heuristic needs an artifact the context does
/// not carry.
pub fn build_heuristic(
    heuristic_type: HeuristicType,
    context: &RoutingContext,
    direction: SearchDirection,
) -> Result<Box<dyn RemainingWeightHeuristic>, HeuristicError> {
    let graph = context.graph.clone();
    let heuristic: Box<dyn RemainingWeightHeuristic> = match heuristic_type {
        HeuristicType::Trivial => Box::new(TrivialRemainingWeightHeuristic),
        HeuristicType::Euclidean => Box::new(EuclideanRemainingWeightHeuristic::new(graph)),
        HeuristicType::Landmark => {
            let estimator = context
                .landmark_estimator
                .clone()
                .ok_or_else(|| missing(heuristic_type, "a landmark set"))?;
            Box::new(LandmarkRemainingWeightHeuristic::new(graph, estimator))
        }
        HeuristicType::InterleavedBidirectional => {
            Box::new(InterleavedBidirectionalHeuristic::new(graph, direction))
        }
        HeuristicType::ConnectionMatrix => {
            let data = context
                .connection_matrix
                .clone()
                .ok_or_else(|| missing(heuristic_type, "connection matrix data"))?;
            Box::new(ConnectionMatrixRemainingWeightHeuristic::new(
                graph, data, direction,
            ))
        }
        HeuristicType::ConnectionMatrixTree => {
            let data = context
                .connection_matrix
                .clone()
                .ok_or_else(|| missing(heuristic_type, "connection matrix data"))?;
            Box::new(ConnectionMatrixShortestPathTreeHeuristic::new(
                graph, data, direction,
            ))
        }
    };
    Ok(heuristic)
}

fn missing(heuristic_type: HeuristicType, artifact: &str) -> HeuristicError {
    HeuristicError::MissingArtifact {
        heuristic: heuristic_type.to_string(),
        artifact: artifact.to_string(),
    }
}
