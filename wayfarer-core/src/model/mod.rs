pub mod graph;
pub mod request;
pub mod state;
