use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// what a search minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationStrategy {
    #[default]
    Weight,
    Price,
    Multimodal,
}

impl Display for OptimizationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OptimizationStrategy::Weight => "weight",
            OptimizationStrategy::Price => "price",
            OptimizationStrategy::Multimodal => "multimodal",
        };
        write!(f, "{s}")
    }
}

/// the strategy-specific ordering used when two states on the same plane
/// compete at a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DominanceStrategy {
    MinimumWeight,
    EarliestArrival,
    LeastWalk,
    Pareto,
}

/// remaining-weight heuristic selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicType {
    Trivial,
    #[default]
    Euclidean,
    Landmark,
    InterleavedBidirectional,
    /// per-query grid search over the directional cost grid
    ConnectionMatrix,
    /// single precomputed grid search from the destination cell
    ConnectionMatrixTree,
}

impl Display for HeuristicType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HeuristicType::Trivial => "trivial",
            HeuristicType::Euclidean => "euclidean",
            HeuristicType::Landmark => "landmark",
            HeuristicType::InterleavedBidirectional => "interleaved_bidirectional",
            HeuristicType::ConnectionMatrix => "connection_matrix",
            HeuristicType::ConnectionMatrixTree => "connection_matrix_tree",
        };
        write!(f, "{s}")
    }
}
