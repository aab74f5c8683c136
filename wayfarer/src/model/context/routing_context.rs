use std::sync::Arc;

use wayfarer_core::model::graph::Graph;

use crate::model::{
    component::GraphComponentInfo,
    estimator::landmark::{LandmarkConfig, LandmarkDistanceEstimator, LandmarkSet},
    heuristic::connection_matrix::ConnectionMatrixHeuristicData,
};

/// the immutable artifacts a search may use. cloning is cheap and every
/// clone shares the same artifacts.
#[derive(Clone)]
pub struct RoutingContext {
    pub graph: Arc<Graph>,
    pub components: Option<Arc<GraphComponentInfo>>,
    pub landmark_estimator: Option<Arc<LandmarkDistanceEstimator>>,
    pub connection_matrix: Option<Arc<ConnectionMatrixHeuristicData>>,
}

impl RoutingContext {
    pub fn new(graph: Arc<Graph>) -> RoutingContext {
        RoutingContext {
            graph,
            components: None,
            landmark_estimator: None,
            connection_matrix: None,
        }
    }

    pub fn with_components(mut self, components: Arc<GraphComponentInfo>) -> RoutingContext {
        self.components = Some(components);
        self
    }

    /// attaches landmarks. the estimator uses the components already
    /// attached for its component check.
    pub fn with_landmarks(
        mut self,
        landmarks: Arc<LandmarkSet>,
        config: &LandmarkConfig,
    ) -> RoutingContext {
        let estimator = LandmarkDistanceEstimator::new(
            self.graph.clone(),
            landmarks,
            self.components.clone(),
            config,
        );
        self.landmark_estimator = Some(Arc::new(estimator));
        self
    }

    pub fn with_connection_matrix(
        mut self,
        data: Arc<ConnectionMatrixHeuristicData>,
    ) -> RoutingContext {
        self.connection_matrix = Some(data);
        self
    }
}
