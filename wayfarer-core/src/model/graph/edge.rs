use super::{EdgeClass, VertexId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct EdgeId(pub usize);

impl Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// a directed connection between two vertices.
///
/// `distance_meters` is the physical length used by distance estimators; it
/// is independent of the time-based weight assigned during search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub edge_id: EdgeId,
    pub src_vertex_id: VertexId,
    pub dst_vertex_id: VertexId,
    pub distance_meters: f64,
    #[serde(default)]
    pub edge_class: EdgeClass,
    /// true when any turn restriction starts on this edge
    #[serde(default)]
    pub turn_restricted: bool,
}

impl Edge {
    pub fn new(edge_id: usize, src: usize, dst: usize, distance_meters: f64) -> Edge {
        Edge {
            edge_id: EdgeId(edge_id),
            src_vertex_id: VertexId(src),
            dst_vertex_id: VertexId(dst),
            distance_meters,
            edge_class: EdgeClass::Street,
            turn_restricted: false,
        }
    }

    pub fn with_class(mut self, edge_class: EdgeClass) -> Edge {
        self.edge_class = edge_class;
        self
    }

    pub fn with_turn_restriction(mut self) -> Edge {
        self.turn_restricted = true;
        self
    }

    /// the vertex at the other end of this edge, if `vertex_id` is an endpoint.
    pub fn opposite(&self, vertex_id: VertexId) -> Option<VertexId> {
        if self.src_vertex_id == vertex_id {
            Some(self.dst_vertex_id)
        } else if self.dst_vertex_id == vertex_id {
            Some(self.src_vertex_id)
        } else {
            None
        }
    }
}
