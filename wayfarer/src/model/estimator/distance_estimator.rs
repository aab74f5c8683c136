use wayfarer_core::model::graph::VertexId;

/// a scalar distance estimate in meters between two vertices. estimators
/// never fail; unknown vertices degrade to a weaker estimate.
pub trait DistanceEstimator: Send + Sync {
    fn estimate_distance_meters(&self, from: VertexId, to: VertexId) -> f64;
}
