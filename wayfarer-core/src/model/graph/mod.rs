mod edge;
mod edge_class;
mod graph_error;
mod graph_file;
mod routing_graph;
mod vertex;

pub use edge::{Edge, EdgeId};
pub use edge_class::EdgeClass;
pub use graph_error::GraphError;
pub use graph_file::GraphFile;
pub use routing_graph::Graph;
pub use vertex::{Vertex, VertexId, VertexKind};
