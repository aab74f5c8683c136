mod routing_context;

pub use routing_context::RoutingContext;
