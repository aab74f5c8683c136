use std::ops::Index;

use super::{State, StateError, StateId};

/// append-only arena owning every state of a search. states are addressed by
/// [`StateId`] and live as long as the store.
#[derive(Debug, Clone, Default)]
pub struct StateStore {
    states: Vec<State>,
}

impl StateStore {
    pub fn new() -> StateStore {
        StateStore::default()
    }

    pub fn push(&mut self, state: State) -> StateId {
        let id = StateId(self.states.len());
        self.states.push(state);
        id
    }

    pub fn get(&self, state_id: StateId) -> Option<&State> {
        self.states.get(state_id.0)
    }

    pub fn state(&self, state_id: StateId) -> Result<&State, StateError> {
        self.get(state_id).ok_or(StateError::StateNotFound(state_id))
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StateId, &State)> + '_ {
        self.states.iter().enumerate().map(|(i, s)| (StateId(i), s))
    }

    /// walks the back-reference chain from `state_id` to its origin,
    /// starting with `state_id` itself.
    pub fn path(&self, state_id: StateId) -> Vec<StateId> {
        let mut path = vec![];
        let mut current = Some(state_id);
        while let Some(id) = current {
            match self.get(id) {
                Some(state) => {
                    path.push(id);
                    current = state.back_state;
                }
                None => break,
            }
        }
        path
    }
}

impl Index<StateId> for StateStore {
    type Output = State;

    fn index(&self, index: StateId) -> &Self::Output {
        &self.states[index.0]
    }
}
