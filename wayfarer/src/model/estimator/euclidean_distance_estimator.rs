use std::sync::Arc;

use wayfarer_core::model::graph::{Graph, VertexId};
use wayfarer_core::util::geo_utils;

use super::DistanceEstimator;

/// straight-line (great-circle) distance between two vertices.
pub struct EuclideanDistanceEstimator {
    graph: Arc<Graph>,
}

impl EuclideanDistanceEstimator {
    pub fn new(graph: Arc<Graph>) -> EuclideanDistanceEstimator {
        EuclideanDistanceEstimator { graph }
    }
}

impl DistanceEstimator for EuclideanDistanceEstimator {
    fn estimate_distance_meters(&self, from: VertexId, to: VertexId) -> f64 {
        match (self.graph.get_vertex(from), self.graph.get_vertex(to)) {
            (Some(a), Some(b)) => geo_utils::vertex_distance_meters(a, b),
            _ => 0.0,
        }
    }
}
