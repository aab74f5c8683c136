use std::{fs::File, io::BufReader, path::Path};

use super::{Edge, EdgeClass, EdgeId, GraphError, GraphFile, Vertex, VertexId, VertexKind};

/// the routing graph: vertices, directed edges and their incoming/outgoing
/// adjacency. vertex and edge ids are dense indices into this structure.
///
/// precomputed artifacts (components, landmarks, directional grids) are not
/// stored here; they are built from a finished graph and handed to searches
/// alongside it.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    outgoing: Vec<Vec<EdgeId>>,
    incoming: Vec<Vec<EdgeId>>,
}

impl Graph {
    /// builds a graph, validating that ids match their index and that every
    /// edge references existing vertices with a valid distance.
    pub fn new(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Result<Graph, GraphError> {
        for (index, vertex) in vertices.iter().enumerate() {
            if vertex.vertex_id.0 != index {
                return Err(GraphError::VertexIndexMismatch {
                    index,
                    found: vertex.vertex_id,
                });
            }
        }
        let mut graph = Graph {
            outgoing: vec![vec![]; vertices.len()],
            incoming: vec![vec![]; vertices.len()],
            vertices,
            edges: Vec::with_capacity(edges.len()),
        };
        for (index, edge) in edges.into_iter().enumerate() {
            if edge.edge_id.0 != index {
                return Err(GraphError::EdgeIndexMismatch {
                    index,
                    found: edge.edge_id,
                });
            }
            graph.insert_edge(edge)?;
        }
        log::debug!(
            "built graph with {} vertices and {} edges",
            graph.vertices.len(),
            graph.edges.len()
        );
        Ok(graph)
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    /// one past the largest vertex index. arrays indexed by vertex should
    /// have this length.
    pub fn max_vertex_index(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn get_vertex(&self, vertex_id: VertexId) -> Option<&Vertex> {
        self.vertices.get(vertex_id.0)
    }

    pub fn vertex(&self, vertex_id: VertexId) -> Result<&Vertex, GraphError> {
        self.get_vertex(vertex_id)
            .ok_or(GraphError::VertexNotFound(vertex_id))
    }

    pub fn get_edge(&self, edge_id: EdgeId) -> Option<&Edge> {
        self.edges.get(edge_id.0)
    }

    pub fn edge(&self, edge_id: EdgeId) -> Result<&Edge, GraphError> {
        self.get_edge(edge_id).ok_or(GraphError::EdgeNotFound(edge_id))
    }

    /// edges leaving `vertex_id`. empty for unknown vertices.
    pub fn out_edges(&self, vertex_id: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.outgoing
            .get(vertex_id.0)
            .into_iter()
            .flatten()
            .filter_map(|e| self.edges.get(e.0))
    }

    /// edges arriving at `vertex_id`. empty for unknown vertices.
    pub fn in_edges(&self, vertex_id: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.incoming
            .get(vertex_id.0)
            .into_iter()
            .flatten()
            .filter_map(|e| self.edges.get(e.0))
    }

    /// the undirected view of the adjacency of `vertex_id`: every outgoing and
    /// incoming edge paired with the vertex at its other end.
    pub fn incident_edges(
        &self,
        vertex_id: VertexId,
    ) -> impl Iterator<Item = (VertexId, &Edge)> + '_ {
        let out = self.out_edges(vertex_id).map(|e| (e.dst_vertex_id, e));
        let inc = self.in_edges(vertex_id).map(|e| (e.src_vertex_id, e));
        out.chain(inc)
    }

    /// incident edges, skipping any edge whose class is in `forbidden`.
    pub fn incident_edges_excluding<'a>(
        &'a self,
        vertex_id: VertexId,
        forbidden: &'a [EdgeClass],
    ) -> impl Iterator<Item = (VertexId, &'a Edge)> + 'a {
        self.incident_edges(vertex_id)
            .filter(move |(_, e)| !forbidden.contains(&e.edge_class))
    }

    pub fn in_degree(&self, vertex_id: VertexId) -> usize {
        self.incoming.get(vertex_id.0).map(Vec::len).unwrap_or_default()
    }

    /// appends a vertex after the graph was built, returning its id.
    pub fn add_vertex(&mut self, x: f64, y: f64, kind: VertexKind) -> VertexId {
        let vertex_id = VertexId(self.vertices.len());
        self.vertices.push(Vertex {
            vertex_id,
            x,
            y,
            kind,
        });
        self.outgoing.push(vec![]);
        self.incoming.push(vec![]);
        vertex_id
    }

    /// appends an edge after the graph was built, returning its id.
    pub fn add_edge(
        &mut self,
        src: VertexId,
        dst: VertexId,
        distance_meters: f64,
        edge_class: EdgeClass,
    ) -> Result<EdgeId, GraphError> {
        let edge_id = EdgeId(self.edges.len());
        let edge = Edge {
            edge_id,
            src_vertex_id: src,
            dst_vertex_id: dst,
            distance_meters,
            edge_class,
            turn_restricted: false,
        };
        self.insert_edge(edge)?;
        Ok(edge_id)
    }

    fn insert_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        if !edge.distance_meters.is_finite() || edge.distance_meters < 0.0 {
            return Err(GraphError::InvalidDistance {
                edge_id: edge.edge_id,
                distance: edge.distance_meters,
            });
        }
        for vertex_id in [edge.src_vertex_id, edge.dst_vertex_id] {
            if vertex_id.0 >= self.vertices.len() {
                return Err(GraphError::DanglingEdge {
                    edge_id: edge.edge_id,
                    vertex_id,
                });
            }
        }
        self.outgoing[edge.src_vertex_id.0].push(edge.edge_id);
        self.incoming[edge.dst_vertex_id.0].push(edge.edge_id);
        self.edges.push(edge);
        Ok(())
    }
}

impl TryFrom<GraphFile> for Graph {
    type Error = GraphError;

    fn try_from(value: GraphFile) -> Result<Self, Self::Error> {
        Graph::new(value.vertices, value.edges)
    }
}

impl TryFrom<&Path> for Graph {
    type Error = GraphError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let file = File::open(path).map_err(|e| GraphError::ReadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let reader = BufReader::new(file);
        let graph_file: GraphFile = serde_json::from_reader(reader)
            .map_err(|e| GraphError::DeserializeError(format!("{}: {e}", path.display())))?;
        Graph::try_from(graph_file)
    }
}
