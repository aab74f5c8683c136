use wayfarer_core::{
    model::{request::RoutingRequest, state::State},
    util::AbortSignal,
};

use super::{HeuristicError, RemainingWeightHeuristic};

/// no guidance: the search degrades to dijkstra.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrivialRemainingWeightHeuristic;

impl RemainingWeightHeuristic for TrivialRemainingWeightHeuristic {
    fn initialize(
        &mut self,
        _request: &RoutingRequest,
        _abort: &AbortSignal,
    ) -> Result<(), HeuristicError> {
        Ok(())
    }

    fn estimate_remaining_weight(&self, _state: &State) -> f64 {
        0.0
    }
}
