mod shortest_path_tree;

pub use shortest_path_tree::ShortestPathTree;
