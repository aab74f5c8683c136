pub mod connection_matrix;
mod distance_weight_bound;
mod euclidean_remaining_weight_heuristic;
mod heuristic_error;
pub mod heuristic_ops;
mod interleaved_bidirectional_heuristic;
mod landmark_remaining_weight_heuristic;
mod remaining_weight_heuristic;
mod trivial_remaining_weight_heuristic;

pub use distance_weight_bound::DistanceWeightBound;
pub use euclidean_remaining_weight_heuristic::EuclideanRemainingWeightHeuristic;
pub use heuristic_error::HeuristicError;
pub use interleaved_bidirectional_heuristic::InterleavedBidirectionalHeuristic;
pub use landmark_remaining_weight_heuristic::LandmarkRemainingWeightHeuristic;
pub use remaining_weight_heuristic::RemainingWeightHeuristic;
pub use trivial_remaining_weight_heuristic::TrivialRemainingWeightHeuristic;
