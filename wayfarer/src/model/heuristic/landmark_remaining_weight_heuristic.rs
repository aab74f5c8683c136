use std::sync::Arc;

use wayfarer_core::{
    model::{
        graph::{Graph, VertexId},
        request::RoutingRequest,
        state::State,
    },
    util::AbortSignal,
};

use super::{DistanceWeightBound, HeuristicError, RemainingWeightHeuristic};
use crate::model::estimator::{landmark::LandmarkDistanceEstimator, DistanceEstimator};

/// landmark (ALT) distance to the target converted to weight with
/// [`DistanceWeightBound`].
pub struct LandmarkRemainingWeightHeuristic {
    estimator: Arc<LandmarkDistanceEstimator>,
    graph: Arc<Graph>,
    target: Option<(VertexId, DistanceWeightBound)>,
}

impl LandmarkRemainingWeightHeuristic {
    pub fn new(
        graph: Arc<Graph>,
        estimator: Arc<LandmarkDistanceEstimator>,
    ) -> LandmarkRemainingWeightHeuristic {
        LandmarkRemainingWeightHeuristic {
            estimator,
            graph,
            target: None,
        }
    }
}

impl RemainingWeightHeuristic for LandmarkRemainingWeightHeuristic {
    fn initialize(
        &mut self,
        request: &RoutingRequest,
        _abort: &AbortSignal,
    ) -> Result<(), HeuristicError> {
        let target = request.target_vertex();
        if self.graph.get_vertex(target).is_none() {
            return Err(HeuristicError::InvalidVertex(target));
        }
        let bound = DistanceWeightBound::new(request, &self.graph, target);
        self.target = Some((target, bound));
        Ok(())
    }

    fn estimate_remaining_weight(&self, state: &State) -> f64 {
        match &self.target {
            Some((target, bound)) => bound
                .weight_lower_bound(self.estimator.estimate_distance_meters(state.vertex_id, *target)),
            None => 0.0,
        }
    }

    fn reset(&mut self) {
        self.target = None;
    }
}
