use serde::{Deserialize, Serialize};

use super::{Edge, Vertex};

/// serialized form of a [`super::Graph`], as written by the graph build
/// subsystem.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct GraphFile {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
}
