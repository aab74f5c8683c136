use std::sync::Arc;

use wayfarer_core::{
    model::{
        graph::{Graph, VertexId},
        request::{RoutingRequest, SearchDirection},
        state::State,
    },
    util::AbortSignal,
};

use super::{grid_dijkstra_ops, ConnectionMatrixHeuristicData};
use crate::model::heuristic::{
    EuclideanRemainingWeightHeuristic, HeuristicError, RemainingWeightHeuristic,
};

/// one grid search from the target cell per request, then constant-time
/// lookups. states outside the grid, targets outside the grid and cells the
/// grid search did not reach are answered by the euclidean fallback.
pub struct ConnectionMatrixShortestPathTreeHeuristic {
    graph: Arc<Graph>,
    data: Arc<ConnectionMatrixHeuristicData>,
    direction: SearchDirection,
    fallback: EuclideanRemainingWeightHeuristic,
    tree: Option<Vec<f64>>,
}

impl ConnectionMatrixShortestPathTreeHeuristic {
    pub fn new(
        graph: Arc<Graph>,
        data: Arc<ConnectionMatrixHeuristicData>,
        direction: SearchDirection,
    ) -> ConnectionMatrixShortestPathTreeHeuristic {
        let fallback = EuclideanRemainingWeightHeuristic::new(graph.clone());
        ConnectionMatrixShortestPathTreeHeuristic {
            graph,
            data,
            direction,
            fallback,
            tree: None,
        }
    }

    fn lookup(&self, vertex_id: VertexId) -> Option<f64> {
        let tree = self.tree.as_ref()?;
        let vertex = self.graph.get_vertex(vertex_id)?;
        let cell = self.data.cell_of(vertex.lat(), vertex.lon())?;
        let idx = self.data.boundaries().index_of(cell)?;
        tree.get(idx).copied().filter(|w| w.is_finite())
    }
}

impl RemainingWeightHeuristic for ConnectionMatrixShortestPathTreeHeuristic {
    fn initialize(
        &mut self,
        request: &RoutingRequest,
        abort: &AbortSignal,
    ) -> Result<(), HeuristicError> {
        self.fallback.initialize(request, abort)?;
        let target = request.target_vertex();
        let target_cell = self
            .graph
            .get_vertex(target)
            .and_then(|v| self.data.cell_of(v.lat(), v.lon()));
        let Some(target_cell) = target_cell else {
            log::debug!("target vertex {target} is outside of the connection matrix");
            self.tree = None;
            return Ok(());
        };
        // estimates run toward the target, so the tree runs away from it
        let tree_direction = self.direction.flip();
        let tree =
            grid_dijkstra_ops::grid_search(&self.data, target_cell, None, tree_direction, abort)?;
        log::debug!(
            "connection matrix tree from cell ({}, {}) reached {} of {} cells",
            target_cell.x,
            target_cell.y,
            tree.iter().filter(|w| w.is_finite()).count(),
            tree.len()
        );
        self.tree = Some(tree);
        Ok(())
    }

    fn estimate_remaining_weight(&self, state: &State) -> f64 {
        match self.lookup(state.vertex_id) {
            Some(weight) => weight,
            None => self.fallback.estimate_remaining_weight(state),
        }
    }

    fn reset(&mut self) {
        self.tree = None;
        self.fallback.reset();
    }
}
