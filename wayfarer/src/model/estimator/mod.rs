pub mod dijkstra_ops;
mod distance_estimator;
mod estimator_error;
mod euclidean_distance_estimator;
mod exact_distance_estimator;
pub mod landmark;

pub use distance_estimator::DistanceEstimator;
pub use estimator_error::EstimatorError;
pub use euclidean_distance_estimator::EuclideanDistanceEstimator;
pub use exact_distance_estimator::ExactDistanceEstimator;
