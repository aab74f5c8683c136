pub mod comparability_ops;
mod dominance_function;

pub use dominance_function::DominanceFunction;
