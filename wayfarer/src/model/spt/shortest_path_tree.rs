use std::collections::HashMap;

use wayfarer_core::model::{
    graph::VertexId,
    state::{State, StateId, StateStore},
};

use crate::model::dominance::DominanceFunction;

/// per-vertex set of surviving states. membership is governed by the
/// dominance function: a state is present only if no state already at its
/// vertex dominated it when it was added.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    dominance: DominanceFunction,
    states: HashMap<VertexId, Vec<StateId>>,
    n_states: usize,
}

impl ShortestPathTree {
    pub fn new(dominance: DominanceFunction) -> ShortestPathTree {
        ShortestPathTree {
            dominance,
            states: HashMap::new(),
            n_states: 0,
        }
    }

    pub fn dominance(&self) -> &DominanceFunction {
        &self.dominance
    }

    /// attempts to add the state `state_id`. returns false when an existing
    /// state at the vertex is at least as good and comparable (ties keep the
    /// existing state). existing states dominated by the new one are removed.
    pub fn add(&mut self, store: &StateStore, state_id: StateId) -> bool {
        let Some(new_state) = store.get(state_id) else {
            return false;
        };
        let existing = self.states.entry(new_state.vertex_id).or_default();
        let dominated = existing.iter().any(|id| {
            store
                .get(*id)
                .map(|old| self.dominance.better_or_equal_and_comparable(old, new_state))
                .unwrap_or_default()
        });
        if dominated {
            return false;
        }
        let before = existing.len();
        existing.retain(|id| match store.get(*id) {
            Some(old) => !self.dominance.better_or_equal_and_comparable(new_state, old),
            None => false,
        });
        let removed = before - existing.len();
        existing.push(state_id);
        self.n_states = self.n_states + 1 - removed;
        true
    }

    /// true when `state_id` is still in the tree. the search loop calls this
    /// on pop to skip states that were pruned after they were queued.
    pub fn visit(&self, store: &StateStore, state_id: StateId) -> bool {
        match store.get(state_id) {
            Some(state) => self
                .states
                .get(&state.vertex_id)
                .map(|ids| ids.contains(&state_id))
                .unwrap_or_default(),
            None => false,
        }
    }

    pub fn get_states(&self, vertex_id: VertexId) -> &[StateId] {
        self.states
            .get(&vertex_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// the lowest-weight surviving state at `vertex_id`.
    pub fn get_state<'a>(&self, store: &'a StateStore, vertex_id: VertexId) -> Option<&'a State> {
        self.get_states(vertex_id)
            .iter()
            .filter_map(|id| store.get(*id))
            .min_by(|a, b| a.weight.total_cmp(&b.weight))
    }

    pub fn n_states(&self) -> usize {
        self.n_states
    }

    pub fn vertex_count(&self) -> usize {
        self.states.values().filter(|s| !s.is_empty()).count()
    }
}
