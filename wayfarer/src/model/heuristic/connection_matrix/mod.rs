mod boundaries;
pub(crate) mod connection_matrix_data;
mod connection_matrix_remaining_weight_heuristic;
mod connection_matrix_shortest_path_tree_heuristic;
mod direction;
pub mod grid_dijkstra_ops;

pub use boundaries::{Boundaries, GridPoint};
pub use connection_matrix_data::{ConnectionMatrixFile, ConnectionMatrixHeuristicData};
pub use connection_matrix_remaining_weight_heuristic::ConnectionMatrixRemainingWeightHeuristic;
pub use connection_matrix_shortest_path_tree_heuristic::ConnectionMatrixShortestPathTreeHeuristic;
pub use direction::Direction;
