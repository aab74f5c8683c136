use std::{cmp::Reverse, collections::BinaryHeap, sync::Arc};

use ordered_float::OrderedFloat;
use wayfarer_core::{
    model::{
        graph::{Edge, Graph, VertexId},
        request::{RoutingRequest, SearchDirection},
        state::State,
    },
    util::AbortSignal,
};

use super::{DistanceWeightBound, HeuristicError, RemainingWeightHeuristic};

pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// a dijkstra growing outward from the target, interleaved with the main
/// search.
///
/// the search runs against edge direction for forward searches (and along it
/// for reverse searches) in weight lower-bound units. settled vertices answer
/// with their exact lower bound. unsettled vertices answer with the current
/// search radius, which no unsettled vertex can beat. once the search is
/// exhausted, unsettled vertices cannot reach the target and answer
/// `f64::INFINITY`.
pub struct InterleavedBidirectionalHeuristic {
    graph: Arc<Graph>,
    direction: SearchDirection,
    batch_size: usize,
    search: Option<TargetSearch>,
}

struct TargetSearch {
    bound: DistanceWeightBound,
    weights: Vec<f64>,
    settled: Vec<bool>,
    frontier: BinaryHeap<Reverse<(OrderedFloat<f64>, VertexId)>>,
    radius: f64,
}

impl InterleavedBidirectionalHeuristic {
    pub fn new(graph: Arc<Graph>, direction: SearchDirection) -> InterleavedBidirectionalHeuristic {
        InterleavedBidirectionalHeuristic {
            graph,
            direction,
            batch_size: DEFAULT_BATCH_SIZE,
            search: None,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> InterleavedBidirectionalHeuristic {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn is_exhausted(&self) -> bool {
        self.search
            .as_ref()
            .map(|s| s.frontier.is_empty())
            .unwrap_or_default()
    }

    /// edges stepping toward the target, paired with the vertex they come
    /// from (which the target search reaches next).
    fn edges_toward<'a>(
        graph: &'a Graph,
        direction: SearchDirection,
        vertex_id: VertexId,
    ) -> Box<dyn Iterator<Item = (VertexId, &'a Edge)> + 'a> {
        match direction {
            SearchDirection::Forward => {
                Box::new(graph.in_edges(vertex_id).map(|e| (e.src_vertex_id, e)))
            }
            SearchDirection::Reverse => {
                Box::new(graph.out_edges(vertex_id).map(|e| (e.dst_vertex_id, e)))
            }
        }
    }
}

impl TargetSearch {
    fn settle_batch(
        &mut self,
        graph: &Graph,
        direction: SearchDirection,
        batch_size: usize,
    ) -> usize {
        let mut n_settled = 0;
        while n_settled < batch_size {
            let Some(Reverse((OrderedFloat(weight), vertex_id))) = self.frontier.pop() else {
                break;
            };
            if self.settled[vertex_id.0] {
                continue;
            }
            self.settled[vertex_id.0] = true;
            self.radius = weight;
            n_settled += 1;
            for (next, edge) in
                InterleavedBidirectionalHeuristic::edges_toward(graph, direction, vertex_id)
            {
                let Some(edge_weight) = self.bound.edge_lower_bound(edge) else {
                    continue;
                };
                let candidate = weight + edge_weight;
                if candidate < self.weights[next.0] {
                    self.weights[next.0] = candidate;
                    self.frontier.push(Reverse((OrderedFloat(candidate), next)));
                }
            }
        }
        n_settled
    }
}

impl RemainingWeightHeuristic for InterleavedBidirectionalHeuristic {
    fn initialize(
        &mut self,
        request: &RoutingRequest,
        abort: &AbortSignal,
    ) -> Result<(), HeuristicError> {
        let target = request.target_vertex();
        if self.graph.get_vertex(target).is_none() {
            return Err(HeuristicError::InvalidVertex(target));
        }
        let n = self.graph.n_vertices();
        let mut search = TargetSearch {
            bound: DistanceWeightBound::new(request, &self.graph, target),
            weights: vec![f64::INFINITY; n],
            settled: vec![false; n],
            frontier: BinaryHeap::new(),
            radius: 0.0,
        };
        search.weights[target.0] = 0.0;
        search.frontier.push(Reverse((OrderedFloat(0.0), target)));
        self.search = Some(search);
        self.do_some_work(abort)
    }

    fn estimate_remaining_weight(&self, state: &State) -> f64 {
        let Some(search) = &self.search else {
            return 0.0;
        };
        let idx = state.vertex_id.0;
        if search.settled.get(idx).copied().unwrap_or_default() {
            return search.weights[idx];
        }
        if search.frontier.is_empty() && idx < search.settled.len() {
            return f64::INFINITY;
        }
        search.radius
    }

    fn reset(&mut self) {
        self.search = None;
    }

    fn do_some_work(&mut self, abort: &AbortSignal) -> Result<(), HeuristicError> {
        if abort.is_aborted() {
            return Err(HeuristicError::Aborted);
        }
        if let Some(search) = self.search.as_mut() {
            let n = search.settle_batch(&self.graph, self.direction, self.batch_size);
            log::debug!(
                "target search settled {n} vertices, radius {:.2}",
                search.radius
            );
        }
        Ok(())
    }
}
