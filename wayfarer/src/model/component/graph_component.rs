use serde::{Deserialize, Serialize};

/// one connected component of the graph under a forbidden-edge-class
/// filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphComponent {
    pub id: i64,
    pub size: usize,
}

impl GraphComponent {
    /// stand-in for a vertex that could not be connected to any classified
    /// vertex.
    pub const SINGLETON: GraphComponent = GraphComponent { id: -1, size: 1 };

    pub fn is_singleton(&self) -> bool {
        self.id < 0
    }
}
