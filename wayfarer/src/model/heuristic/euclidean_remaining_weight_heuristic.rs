use std::sync::Arc;

use wayfarer_core::{
    model::{
        graph::{Graph, Vertex},
        request::RoutingRequest,
        state::State,
    },
    util::{geo_utils, AbortSignal},
};

use super::{DistanceWeightBound, HeuristicError, RemainingWeightHeuristic};

/// straight-line distance to the target converted to weight with
/// [`DistanceWeightBound`].
pub struct EuclideanRemainingWeightHeuristic {
    graph: Arc<Graph>,
    target: Option<(Vertex, DistanceWeightBound)>,
}

impl EuclideanRemainingWeightHeuristic {
    pub fn new(graph: Arc<Graph>) -> EuclideanRemainingWeightHeuristic {
        EuclideanRemainingWeightHeuristic {
            graph,
            target: None,
        }
    }
}

impl RemainingWeightHeuristic for EuclideanRemainingWeightHeuristic {
    fn initialize(
        &mut self,
        request: &RoutingRequest,
        _abort: &AbortSignal,
    ) -> Result<(), HeuristicError> {
        let target_id = request.target_vertex();
        let target = self
            .graph
            .get_vertex(target_id)
            .ok_or(HeuristicError::InvalidVertex(target_id))?
            .clone();
        let bound = DistanceWeightBound::new(request, &self.graph, target_id);
        self.target = Some((target, bound));
        Ok(())
    }

    fn estimate_remaining_weight(&self, state: &State) -> f64 {
        let Some((target, bound)) = &self.target else {
            return 0.0;
        };
        match self.graph.get_vertex(state.vertex_id) {
            Some(vertex) => {
                bound.weight_lower_bound(geo_utils::vertex_distance_meters(vertex, target))
            }
            None => 0.0,
        }
    }

    fn reset(&mut self) {
        self.target = None;
    }
}
