use serde::{Deserialize, Serialize};
use wayfarer_core::model::graph::Graph;

use super::ComponentsConfig;
use crate::model::component::GraphComponentInfo;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentsSummary {
    pub n_vertices: usize,
    pub n_components: usize,
    pub largest_component_size: usize,
    /// components holding a single vertex
    pub n_isolated_vertices: usize,
}

pub fn run(graph: &Graph, config: &ComponentsConfig) -> ComponentsSummary {
    let info = GraphComponentInfo::build(graph, &config.forbidden_edge_classes);
    ComponentsSummary {
        n_vertices: graph.n_vertices(),
        n_components: info.n_components(),
        largest_component_size: info.largest_component().map(|c| c.size).unwrap_or_default(),
        n_isolated_vertices: info.components().iter().filter(|c| c.size == 1).count(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::two_islands;
    use wayfarer_core::model::graph::{EdgeClass, VertexKind};

    #[test]
    fn test_summary() {
        let mut graph = two_islands();
        graph.add_vertex(0.0, 0.5, VertexKind::Street);
        let summary = run(&graph, &ComponentsConfig::default());
        assert_eq!(
            summary,
            ComponentsSummary {
                n_vertices: 7,
                n_components: 3,
                largest_component_size: 4,
                n_isolated_vertices: 1,
            }
        );
        let config = ComponentsConfig {
            forbidden_edge_classes: vec![EdgeClass::Street],
        };
        assert_eq!(run(&graph, &config).n_components, 7);
    }
}
