use wayfarer_core::{
    model::{
        request::{RoutingRequest, SearchDirection},
        state::{State, StateId, StateStore},
    },
    util::AbortSignal,
};

use super::{ForbiddenFeature, ForbiddenStatesSelector, Frontier, SearchError};
use crate::model::{
    cost::CostFunction, heuristic::RemainingWeightHeuristic, profile::OptimizationProfile,
    spt::ShortestPathTree,
};

/// outcome of [`RunState::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inserted {
    pub state_id: StateId,
    /// true when the shortest path tree kept the state and it was queued
    pub accepted: bool,
}

/// the mutable working set of one search: the state arena, the shortest
/// path tree, the frontier, and the ordered logs of generated and consumed
/// states that replanning reuses.
///
/// the search loop that expands states lives outside of this type. it pops
/// states with [`RunState::pop`] and hands successors to
/// [`RunState::insert`].
pub struct RunState {
    request: RoutingRequest,
    direction: SearchDirection,
    heuristic: Box<dyn RemainingWeightHeuristic>,
    heuristic_enabled: bool,
    cost_function: CostFunction,
    abort: AbortSignal,
    store: StateStore,
    spt: ShortestPathTree,
    frontier: Frontier,
    generated: Vec<StateId>,
    consumed: Vec<StateId>,
}

impl RunState {
    /// initializes the heuristic for the request's search direction and
    /// queues the origin state.
    pub fn new(
        request: RoutingRequest,
        profile: OptimizationProfile,
        abort: AbortSignal,
    ) -> Result<RunState, SearchError> {
        let direction = request.search_direction();
        let (dominance, mut heuristic, cost_function) = profile.into_search_parts(direction);
        let heuristic_enabled = !request.disable_remaining_weight_heuristic;
        if heuristic_enabled {
            heuristic.initialize(&request, &abort)?;
        }
        let origin = State::origin(request.origin_vertex(), request.initial_mode());
        let mut run = RunState {
            request,
            direction,
            heuristic,
            heuristic_enabled,
            cost_function,
            abort,
            store: StateStore::new(),
            spt: ShortestPathTree::new(dominance),
            frontier: Frontier::new(),
            generated: vec![],
            consumed: vec![],
        };
        run.insert(origin);
        Ok(run)
    }

    pub fn request(&self) -> &RoutingRequest {
        &self.request
    }

    pub fn direction(&self) -> SearchDirection {
        self.direction
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn spt(&self) -> &ShortestPathTree {
        &self.spt
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// every state handed to [`RunState::insert`], in order
    pub fn generated(&self) -> &[StateId] {
        &self.generated
    }

    /// every state returned by [`RunState::pop`], in order
    pub fn consumed(&self) -> &[StateId] {
        &self.consumed
    }

    /// frontier priority of `state`: its cost plus the weighted heuristic
    /// estimate. a zero heuristic weight leaves the cost alone, including
    /// for states the heuristic rates unreachable.
    pub fn priority(&self, state: &State) -> f64 {
        let cost = self.cost_function.cost(state);
        if !self.heuristic_enabled || self.request.heuristic_weight == 0.0 {
            return cost;
        }
        cost + self.heuristic.estimate_remaining_weight(state) * self.request.heuristic_weight
    }

    /// logs `state` as generated and offers it to the shortest path tree.
    /// accepted states are queued.
    pub fn insert(&mut self, state: State) -> Inserted {
        let state_id = self.store.push(state);
        self.generated.push(state_id);
        let accepted = self.spt.add(&self.store, state_id);
        if accepted {
            self.enqueue(state_id);
        }
        Inserted { state_id, accepted }
    }

    fn enqueue(&mut self, state_id: StateId) {
        let state = &self.store[state_id];
        let priority = self.priority(state);
        let cost = self.cost_function.cost(state);
        self.frontier.push(state_id, priority, cost);
    }

    /// the next state to expand. entries pruned from the tree after they
    /// were queued are skipped. the returned state is logged as consumed.
    pub fn pop(&mut self) -> Result<Option<StateId>, SearchError> {
        if self.abort.is_aborted() {
            return Err(SearchError::Aborted);
        }
        if self.heuristic_enabled {
            self.heuristic.do_some_work(&self.abort)?;
        }
        while let Some(state_id) = self.frontier.pop() {
            if !self.spt.visit(&self.store, state_id) {
                continue;
            }
            self.consumed.push(state_id);
            return Ok(Some(state_id));
        }
        Ok(None)
    }

    /// the best state reached at the target of the search so far.
    pub fn best_target_state(&self) -> Option<&State> {
        self.spt
            .get_state(&self.store, self.request.target_vertex())
    }

    /// restarts the search surface without the branches that have `feature`.
    ///
    /// the shortest path tree is rebuilt from the clean consumed states and
    /// the allowed states (generated, never consumed, feature-free). allowed
    /// states the tree keeps are queued with recomputed priorities. the
    /// generated log becomes the allowed states and the consumed log the
    /// clean consumed states, so consumed states are never expanded again.
    /// the origin is kept in the consumed log and the tree even when it has
    /// `feature` itself, so a later reset still finds it.
    /// returns the new frontier size.
    pub fn reset_state(&mut self, feature: &ForbiddenFeature) -> Result<usize, SearchError> {
        let selector =
            ForbiddenStatesSelector::new(&self.store, &self.generated, &self.consumed, feature);
        let origin = selector.origin()?;
        let allowed = selector.allowed_states();
        let mut clean_consumed = selector.clean_consumed_states();
        if !clean_consumed.contains(&origin) {
            clean_consumed.insert(0, origin);
        }
        let n_forbidden = selector.forbidden_states().len();

        let mut spt = ShortestPathTree::new(self.spt.dominance().clone());
        for state_id in clean_consumed.iter() {
            spt.add(&self.store, *state_id);
        }
        self.spt = spt;
        self.frontier.clear();
        for state_id in allowed.iter() {
            if self.spt.add(&self.store, *state_id) {
                self.enqueue(*state_id);
            }
        }
        log::debug!(
            "reset search state: {} allowed, {n_forbidden} forbidden, {} consumed states kept, frontier {}",
            allowed.len(),
            clean_consumed.len(),
            self.frontier.len()
        );
        self.generated = allowed;
        self.consumed = clean_consumed;
        Ok(self.frontier.len())
    }
}
