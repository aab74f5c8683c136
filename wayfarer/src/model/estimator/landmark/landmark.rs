use wayfarer_core::model::graph::VertexId;

/// a landmark vertex and the shortest undirected network distance in meters
/// from it to every vertex index. unreached vertices hold `f64::INFINITY`.
#[derive(Debug, Clone, PartialEq)]
pub struct Landmark {
    pub vertex_id: VertexId,
    pub distances: Vec<f64>,
}

impl Landmark {
    pub fn new(vertex_id: VertexId, distances: Vec<f64>) -> Landmark {
        Landmark {
            vertex_id,
            distances,
        }
    }

    /// the precomputed distance to `vertex_id`, if it was reached.
    pub fn known_distance(&self, vertex_id: VertexId) -> Option<f64> {
        self.distances
            .get(vertex_id.0)
            .copied()
            .filter(|d| d.is_finite())
    }

    pub fn n_reached(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }
}
