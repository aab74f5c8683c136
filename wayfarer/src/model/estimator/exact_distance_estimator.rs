use std::sync::Arc;

use wayfarer_core::model::graph::{Graph, VertexId};

use super::{dijkstra_ops, DistanceEstimator};

/// shortest network distance over the undirected view of the graph. one
/// dijkstra per query, so this is meant for validation and small graphs.
pub struct ExactDistanceEstimator {
    graph: Arc<Graph>,
}

impl ExactDistanceEstimator {
    pub fn new(graph: Arc<Graph>) -> ExactDistanceEstimator {
        ExactDistanceEstimator { graph }
    }
}

impl DistanceEstimator for ExactDistanceEstimator {
    fn estimate_distance_meters(&self, from: VertexId, to: VertexId) -> f64 {
        dijkstra_ops::undirected_distance(&self.graph, from, to)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::{grid_graph, two_islands};

    #[test]
    fn test_grid_manhattan_distance() {
        let estimator = ExactDistanceEstimator::new(Arc::new(grid_graph(3, 3, 100.0)));
        let d = estimator.estimate_distance_meters(VertexId(0), VertexId(8));
        assert!((d - 400.0).abs() < 2.0, "{d}");
    }

    #[test]
    fn test_disconnected_is_infinite() {
        let estimator = ExactDistanceEstimator::new(Arc::new(two_islands()));
        let d = estimator.estimate_distance_meters(VertexId(0), VertexId(5));
        assert!(d.is_infinite());
    }
}
