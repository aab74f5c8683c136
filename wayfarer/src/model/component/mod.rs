mod graph_component;
mod graph_component_info;

pub use graph_component::GraphComponent;
pub use graph_component_info::GraphComponentInfo;
