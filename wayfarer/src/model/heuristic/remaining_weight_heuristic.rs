use wayfarer_core::{
    model::{request::RoutingRequest, state::State},
    util::AbortSignal,
};

use super::HeuristicError;

/// a lower bound (ideally) on the weight still needed to reach the target of
/// a search from a state. forward searches target the destination, reverse
/// searches target the origin.
pub trait RemainingWeightHeuristic: Send {
    /// prepares the heuristic for one search. called once before the first
    /// estimate.
    fn initialize(
        &mut self,
        request: &RoutingRequest,
        abort: &AbortSignal,
    ) -> Result<(), HeuristicError>;

    fn estimate_remaining_weight(&self, state: &State) -> f64;

    /// drops per-search data so the heuristic can be initialized again.
    fn reset(&mut self) {}

    /// incremental work the search loop may schedule between expansions.
    fn do_some_work(&mut self, _abort: &AbortSignal) -> Result<(), HeuristicError> {
        Ok(())
    }
}
