mod landmark;
mod landmark_config;
mod landmark_distance_estimator;
mod landmark_export;
pub mod landmark_selection_ops;
mod landmark_set;

pub use landmark::Landmark;
pub use landmark_config::LandmarkConfig;
pub use landmark_distance_estimator::LandmarkDistanceEstimator;
pub use landmark_export::{LandmarkExport, LandmarkRecord};
pub use landmark_set::LandmarkSet;
