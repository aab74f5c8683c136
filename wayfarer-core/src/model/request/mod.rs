mod dominance_rules;
mod routing_request;
mod search_direction;
mod strategy;

pub use dominance_rules::DominanceRules;
pub use routing_request::RoutingRequest;
pub use search_direction::SearchDirection;
pub use strategy::{DominanceStrategy, HeuristicType, OptimizationStrategy};
