use itertools::Itertools;
use wayfarer_core::model::state::{StateId, StateStore};

use super::{ForbiddenFeature, SearchError};

/// classifies the states of a finished or interrupted search by whether
/// their branch has a forbidden feature.
///
/// a state has the feature when it exhibits it or its back state has it.
/// classification walks back-reference chains iteratively and memoizes every
/// state it passes in a table indexed by [`StateId`], so no ancestry is
/// walked twice.
pub struct ForbiddenStatesSelector<'a> {
    store: &'a StateStore,
    generated: &'a [StateId],
    consumed: &'a [StateId],
    is_consumed: Vec<bool>,
    has_feature: Vec<Option<bool>>,
    n_walked: usize,
}

impl<'a> ForbiddenStatesSelector<'a> {
    pub fn new(
        store: &'a StateStore,
        generated: &'a [StateId],
        consumed: &'a [StateId],
        feature: &ForbiddenFeature,
    ) -> ForbiddenStatesSelector<'a> {
        let mut is_consumed = vec![false; store.len()];
        for id in consumed.iter() {
            if let Some(flag) = is_consumed.get_mut(id.0) {
                *flag = true;
            }
        }
        let mut selector = ForbiddenStatesSelector {
            store,
            generated,
            consumed,
            is_consumed,
            has_feature: vec![None; store.len()],
            n_walked: 0,
        };
        for id in generated.iter().chain(consumed.iter()) {
            selector.classify(*id, feature);
        }
        selector
    }

    fn classify(&mut self, state_id: StateId, feature: &ForbiddenFeature) -> bool {
        let mut chain = vec![];
        let mut current = Some(state_id);
        let result = loop {
            let Some(id) = current else {
                break false;
            };
            let (Some(known), Some(state)) = (self.has_feature.get(id.0), self.store.get(id))
            else {
                break false;
            };
            if let Some(known) = known {
                break *known;
            }
            self.n_walked += 1;
            if feature.exhibited_by(state) {
                self.has_feature[id.0] = Some(true);
                break true;
            }
            chain.push(id);
            current = state.back_state;
        };
        for id in chain {
            self.has_feature[id.0] = Some(result);
        }
        result
    }

    pub fn has_feature(&self, state_id: StateId) -> bool {
        self.has_feature
            .get(state_id.0)
            .copied()
            .flatten()
            .unwrap_or_default()
    }

    fn is_consumed(&self, state_id: StateId) -> bool {
        self.is_consumed.get(state_id.0).copied().unwrap_or_default()
    }

    /// generated states that were never consumed and are feature-free, in
    /// generation order.
    pub fn allowed_states(&self) -> Vec<StateId> {
        self.generated
            .iter()
            .filter(|id| !self.is_consumed(**id) && !self.has_feature(**id))
            .unique()
            .copied()
            .collect()
    }

    /// generated or consumed states whose branch has the feature.
    pub fn forbidden_states(&self) -> Vec<StateId> {
        self.generated
            .iter()
            .chain(self.consumed.iter())
            .filter(|id| self.has_feature(**id))
            .unique()
            .copied()
            .collect()
    }

    /// consumed states that are feature-free, in consumption order.
    pub fn clean_consumed_states(&self) -> Vec<StateId> {
        self.consumed
            .iter()
            .filter(|id| !self.has_feature(**id))
            .copied()
            .collect()
    }

    /// the zero-weight root of the search among the consumed states.
    pub fn origin(&self) -> Result<StateId, SearchError> {
        self.consumed
            .iter()
            .find(|id| self.store.get(**id).map(|s| s.is_origin()).unwrap_or_default())
            .copied()
            .ok_or(SearchError::MissingOrigin(self.consumed.len()))
    }

    /// number of states examined while classifying
    pub fn n_walked(&self) -> usize {
        self.n_walked
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use wayfarer_core::model::{
        graph::{Edge, VertexId},
        state::{State, StateEditor, TraverseMode},
    };

    fn push_child(store: &mut StateStore, parent: StateId, dst: usize) -> StateId {
        let src = store[parent].vertex_id.0;
        let edge = Edge::new(store.len(), src, dst, 100.0);
        let mut editor = StateEditor::new(&store[parent], parent, &edge);
        editor.increment_weight(1.0);
        let state = editor.make_state().expect("test invariant failed");
        store.push(state)
    }

    /// an origin and ten downstream states. the state at vertex 3 and its two
    /// children (at vertices 7 and 8) belong to the branch through vertex 3.
    fn ten_state_tree() -> (StateStore, Vec<StateId>, StateId) {
        let mut store = StateStore::new();
        let origin = store.push(State::origin(VertexId(0), TraverseMode::Walk));
        let mut generated = vec![origin];
        let mut by_vertex = vec![origin];
        for (parent_vertex, dst) in [(0, 1), (0, 2), (0, 3), (1, 4), (1, 5), (2, 6), (3, 7), (3, 8), (4, 9), (6, 10)] {
            let id = push_child(&mut store, by_vertex[parent_vertex], dst);
            by_vertex.push(id);
            generated.push(id);
        }
        (store, generated, origin)
    }

    #[test]
    fn test_seven_of_ten_allowed() {
        let (store, generated, origin) = ten_state_tree();
        let consumed = vec![origin];
        let feature = ForbiddenFeature::Vertex(VertexId(3));
        let selector = ForbiddenStatesSelector::new(&store, &generated, &consumed, &feature);
        let allowed = selector.allowed_states();
        assert_eq!(allowed.len(), 7);
        let vertices: Vec<_> = allowed.iter().map(|id| store[*id].vertex_id.0).collect();
        assert_eq!(vertices, vec![1, 2, 4, 5, 6, 9, 10]);
        let forbidden: Vec<_> = selector
            .forbidden_states()
            .iter()
            .map(|id| store[*id].vertex_id.0)
            .collect();
        assert_eq!(forbidden, vec![3, 7, 8]);
        assert_eq!(selector.origin().expect("test failed"), origin);
    }

    #[test]
    fn test_consumed_states_are_not_allowed() {
        let (store, generated, origin) = ten_state_tree();
        // the states at vertices 1 and 3 were expanded
        let consumed = vec![origin, generated[1], generated[3]];
        let feature = ForbiddenFeature::Vertex(VertexId(3));
        let selector = ForbiddenStatesSelector::new(&store, &generated, &consumed, &feature);
        assert_eq!(selector.allowed_states().len(), 6);
        assert_eq!(selector.clean_consumed_states(), vec![origin, generated[1]]);
    }

    #[test]
    fn test_each_ancestry_walked_once() {
        let mut store = StateStore::new();
        let origin = store.push(State::origin(VertexId(0), TraverseMode::Walk));
        let mut generated = vec![origin];
        let mut last = origin;
        for v in 1..=5000 {
            last = push_child(&mut store, last, v);
            generated.push(last);
        }
        let consumed = vec![origin];
        let feature = ForbiddenFeature::Vertex(VertexId(usize::MAX));
        let selector = ForbiddenStatesSelector::new(&store, &generated, &consumed, &feature);
        assert_eq!(selector.n_walked(), store.len());
        assert_eq!(selector.allowed_states().len(), 5000);
    }

    #[test]
    fn test_missing_origin() {
        let (store, generated, _) = ten_state_tree();
        let consumed = vec![generated[2]];
        let feature = ForbiddenFeature::TransitBoarding;
        let selector = ForbiddenStatesSelector::new(&store, &generated, &consumed, &feature);
        assert!(matches!(
            selector.origin(),
            Err(SearchError::MissingOrigin(1))
        ));
    }
}
