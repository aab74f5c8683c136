use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// dense, stable index of a vertex in a [`super::Graph`]. `VertexId(i)` is
/// the i-th vertex of the graph.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct VertexId(pub usize);

impl Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// what a vertex represents in the multimodal network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VertexKind {
    #[default]
    Street,
    TransitStop,
    /// temporary or split vertex created after import (for example, to link a
    /// query origin into the street network). never a landmark candidate.
    Synthetic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub vertex_id: VertexId,
    /// longitude
    pub x: f64,
    /// latitude
    pub y: f64,
    #[serde(default)]
    pub kind: VertexKind,
}

impl Vertex {
    pub fn new(vertex_id: usize, x: f64, y: f64) -> Vertex {
        Vertex {
            vertex_id: VertexId(vertex_id),
            x,
            y,
            kind: VertexKind::Street,
        }
    }

    pub fn with_kind(mut self, kind: VertexKind) -> Vertex {
        self.kind = kind;
        self
    }

    pub fn lat(&self) -> f64 {
        self.y
    }

    pub fn lon(&self) -> f64 {
        self.x
    }

    pub fn is_synthetic(&self) -> bool {
        self.kind == VertexKind::Synthetic
    }

    pub fn is_transit_stop(&self) -> bool {
        self.kind == VertexKind::TransitStop
    }

    pub fn point(&self) -> geo::Point<f64> {
        geo::Point::new(self.x, self.y)
    }
}
