use std::sync::Arc;

use wayfarer_core::{
    model::{
        graph::{Graph, VertexId},
        request::{RoutingRequest, SearchDirection},
        state::State,
    },
    util::AbortSignal,
};

use super::{grid_dijkstra_ops, ConnectionMatrixHeuristicData, GridPoint};
use crate::model::heuristic::{HeuristicError, RemainingWeightHeuristic};

/// runs a fresh grid search for every estimate, from the state's cell to the
/// target cell (or the reverse for arrive-by searches).
///
/// estimates are 0 when either cell is outside the grid or no grid path
/// exists. [`super::ConnectionMatrixShortestPathTreeHeuristic`] answers the
/// same question with one search per request and is preferred.
pub struct ConnectionMatrixRemainingWeightHeuristic {
    graph: Arc<Graph>,
    data: Arc<ConnectionMatrixHeuristicData>,
    direction: SearchDirection,
    target_cell: Option<GridPoint>,
}

impl ConnectionMatrixRemainingWeightHeuristic {
    pub fn new(
        graph: Arc<Graph>,
        data: Arc<ConnectionMatrixHeuristicData>,
        direction: SearchDirection,
    ) -> ConnectionMatrixRemainingWeightHeuristic {
        ConnectionMatrixRemainingWeightHeuristic {
            graph,
            data,
            direction,
            target_cell: None,
        }
    }

    fn vertex_cell(&self, vertex_id: VertexId) -> Option<GridPoint> {
        let vertex = self.graph.get_vertex(vertex_id)?;
        self.data.cell_of(vertex.lat(), vertex.lon())
    }
}

impl RemainingWeightHeuristic for ConnectionMatrixRemainingWeightHeuristic {
    fn initialize(
        &mut self,
        request: &RoutingRequest,
        _abort: &AbortSignal,
    ) -> Result<(), HeuristicError> {
        let target = request.target_vertex();
        if self.graph.get_vertex(target).is_none() {
            return Err(HeuristicError::InvalidVertex(target));
        }
        self.target_cell = self.vertex_cell(target);
        if self.target_cell.is_none() {
            log::debug!("target vertex {target} is outside of the connection matrix");
        }
        Ok(())
    }

    fn estimate_remaining_weight(&self, state: &State) -> f64 {
        let (Some(target), Some(cell)) = (self.target_cell, self.vertex_cell(state.vertex_id))
        else {
            return 0.0;
        };
        let (from, to) = match self.direction {
            SearchDirection::Forward => (cell, target),
            SearchDirection::Reverse => (target, cell),
        };
        match grid_dijkstra_ops::grid_path_weight(&self.data, from, to, &AbortSignal::none()) {
            Ok(Some(weight)) => weight,
            Ok(None) => 0.0,
            Err(e) => {
                log::warn!("connection matrix search failed: {e}");
                0.0
            }
        }
    }

    fn reset(&mut self) {
        self.target_cell = None;
    }
}
