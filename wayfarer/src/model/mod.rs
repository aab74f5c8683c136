pub mod component;
pub mod context;
pub mod cost;
pub mod dominance;
pub mod estimator;
pub mod heuristic;
pub mod profile;
pub mod search;
pub mod spt;
