use std::{cmp::Reverse, collections::BinaryHeap};

use ordered_float::OrderedFloat;
use wayfarer_core::model::state::StateId;

/// min-priority queue of states. ties on priority pop the state with the
/// least cost first, then the earliest generated.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<(OrderedFloat<f64>, OrderedFloat<f64>, StateId)>>,
}

impl Frontier {
    pub fn new() -> Frontier {
        Frontier::default()
    }

    pub fn push(&mut self, state_id: StateId, priority: f64, cost: f64) {
        self.heap
            .push(Reverse((OrderedFloat(priority), OrderedFloat(cost), state_id)));
    }

    pub fn pop(&mut self) -> Option<StateId> {
        self.heap.pop().map(|Reverse((_, _, id))| id)
    }

    /// priority of the next state to pop
    pub fn peek_priority(&self) -> Option<f64> {
        self.heap.peek().map(|Reverse((p, _, _))| p.0)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
