use std::collections::{HashSet, VecDeque};

use kdam::{tqdm, BarExt};
use wayfarer_core::model::graph::{EdgeClass, Graph, VertexId};

use super::GraphComponent;

/// connected components of a graph, ignoring edges of the forbidden classes
/// and edge direction.
///
/// the table is built eagerly and is read-only afterward. vertices added to
/// the graph after the build are answered by a lazy search (see
/// [`GraphComponentInfo::get_graph_component`]) until [`GraphComponentInfo::extend`]
/// classifies them.
#[derive(Debug, Clone)]
pub struct GraphComponentInfo {
    forbidden_edge_classes: Vec<EdgeClass>,
    /// component index per vertex, None for vertices added after the build
    assignments: Vec<Option<usize>>,
    components: Vec<GraphComponent>,
}

impl GraphComponentInfo {
    pub fn build(graph: &Graph, forbidden_edge_classes: &[EdgeClass]) -> GraphComponentInfo {
        let mut info = GraphComponentInfo {
            forbidden_edge_classes: forbidden_edge_classes.to_vec(),
            assignments: vec![None; graph.n_vertices()],
            components: vec![],
        };

        let mut pb = tqdm!(
            total = graph.n_vertices(),
            desc = "computing connected components"
        );
        for vertex in graph.vertices() {
            if info.assignments[vertex.vertex_id.0].is_none() {
                let classified = info.classify_from(graph, vertex.vertex_id);
                if let Err(e) = pb.update(classified) {
                    log::warn!("error during update of progress bar: {e}")
                }
            }
        }
        eprintln!();

        log::info!(
            "found {} connected components over {} vertices (largest: {})",
            info.components.len(),
            graph.n_vertices(),
            info.largest_component().map(|c| c.size).unwrap_or_default()
        );
        info
    }

    pub fn n_components(&self) -> usize {
        self.components.len()
    }

    pub fn components(&self) -> &[GraphComponent] {
        &self.components
    }

    pub fn largest_component(&self) -> Option<GraphComponent> {
        self.components.iter().max_by_key(|c| c.size).copied()
    }

    /// the cached component of a classified vertex.
    pub fn component_of(&self, vertex_id: VertexId) -> Option<GraphComponent> {
        self.assignments
            .get(vertex_id.0)
            .copied()
            .flatten()
            .and_then(|idx| self.components.get(idx).copied())
    }

    /// the component of `vertex_id`.
    ///
    /// classified vertices answer in constant time. for an unclassified
    /// vertex, a breadth-first search runs outward and returns the component
    /// of the first classified vertex it meets, or [`GraphComponent::SINGLETON`]
    /// when it meets none. when several components are reachable within the
    /// same search, the one found first wins. the search has no bound and can
    /// walk a large share of the graph for a vertex attached to an
    /// unclassified region.
    pub fn get_graph_component(&self, graph: &Graph, vertex_id: VertexId) -> GraphComponent {
        if let Some(component) = self.component_of(vertex_id) {
            return component;
        }
        self.find_classified_neighbor(graph, vertex_id)
            .and_then(|idx| self.components.get(idx).copied())
            .unwrap_or(GraphComponent::SINGLETON)
    }

    /// true when both vertices are classified into the same component.
    pub fn same_component(&self, a: VertexId, b: VertexId) -> bool {
        match (self.component_of(a), self.component_of(b)) {
            (Some(ca), Some(cb)) => ca.id == cb.id,
            _ => false,
        }
    }

    /// classifies every vertex added to `graph` since the table was built.
    /// a new vertex joins the component of the first classified vertex its
    /// lazy search meets; new vertices reaching no classified vertex form new
    /// components among themselves. previously classified vertices keep their
    /// component. returns the number of newly classified vertices.
    pub fn extend(&mut self, graph: &Graph) -> usize {
        let start = self.assignments.len();
        if graph.n_vertices() <= start {
            return 0;
        }
        self.assignments.resize(graph.n_vertices(), None);

        let mut isolated = vec![];
        for idx in start..graph.n_vertices() {
            let vertex_id = VertexId(idx);
            if self.assignments[idx].is_some() {
                continue;
            }
            match self.find_classified_neighbor(graph, vertex_id) {
                Some(component_idx) => {
                    self.assignments[idx] = Some(component_idx);
                    self.components[component_idx].size += 1;
                }
                None => isolated.push(vertex_id),
            }
        }
        for vertex_id in isolated {
            if self.assignments[vertex_id.0].is_none() {
                self.classify_from(graph, vertex_id);
            }
        }
        log::debug!(
            "classified {} vertices added after build, {} components total",
            graph.n_vertices() - start,
            self.components.len()
        );
        graph.n_vertices() - start
    }

    /// assigns a new component to every unclassified vertex reachable from
    /// `source`, returning the component size.
    fn classify_from(&mut self, graph: &Graph, source: VertexId) -> usize {
        let component_idx = self.components.len();
        let mut queue = VecDeque::from([source]);
        self.assignments[source.0] = Some(component_idx);
        let mut size = 0;
        while let Some(vertex_id) = queue.pop_front() {
            size += 1;
            for (next, _) in graph.incident_edges_excluding(vertex_id, &self.forbidden_edge_classes)
            {
                if let Some(slot) = self.assignments.get_mut(next.0) {
                    if slot.is_none() {
                        *slot = Some(component_idx);
                        queue.push_back(next);
                    }
                }
            }
        }
        self.components.push(GraphComponent {
            id: component_idx as i64,
            size,
        });
        size
    }

    fn find_classified_neighbor(&self, graph: &Graph, source: VertexId) -> Option<usize> {
        let mut visited = HashSet::from([source]);
        let mut queue = VecDeque::from([source]);
        while let Some(vertex_id) = queue.pop_front() {
            for (next, _) in graph.incident_edges_excluding(vertex_id, &self.forbidden_edge_classes)
            {
                if let Some(idx) = self.assignments.get(next.0).copied().flatten() {
                    return Some(idx);
                }
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::{grid_graph, two_islands};
    use wayfarer_core::model::graph::VertexKind;

    #[test]
    fn test_two_islands() {
        let graph = two_islands();
        let info = GraphComponentInfo::build(&graph, &[]);
        assert_eq!(info.n_components(), 2);
        let largest = info.largest_component().expect("test failed");
        assert_eq!(largest.size, 4);
        assert!(info.same_component(VertexId(0), VertexId(3)));
        assert!(!info.same_component(VertexId(0), VertexId(4)));
    }

    #[test]
    fn test_forbidden_classes_split_components() {
        let graph = two_islands();
        // the islands are joined only by a transit edge
        let mut joined = graph.clone();
        joined
            .add_edge(VertexId(3), VertexId(4), 500.0, EdgeClass::Transit)
            .expect("test invariant failed");
        assert_eq!(GraphComponentInfo::build(&joined, &[]).n_components(), 1);
        assert_eq!(
            GraphComponentInfo::build(&joined, &[EdgeClass::Transit]).n_components(),
            2
        );
    }

    #[test]
    fn test_component_stability() {
        let mut graph = two_islands();
        let info = GraphComponentInfo::build(&graph, &[]);
        let first = info.get_graph_component(&graph, VertexId(1));

        // query unrelated vertices, including ones added after the build
        let added = graph.add_vertex(0.5, 0.5, VertexKind::Synthetic);
        graph
            .add_edge(added, VertexId(5), 10.0, EdgeClass::Street)
            .expect("test invariant failed");
        let lonely = graph.add_vertex(9.0, 9.0, VertexKind::Synthetic);
        for v in [4, 5, 0, 2] {
            let _ = info.get_graph_component(&graph, VertexId(v));
        }
        let _ = info.get_graph_component(&graph, added);
        assert_eq!(info.get_graph_component(&graph, VertexId(1)), first);
        assert_eq!(info.get_graph_component(&graph, lonely), GraphComponent::SINGLETON);
    }

    #[test]
    fn test_lazy_lookup_and_extend() {
        let mut graph = two_islands();
        let mut info = GraphComponentInfo::build(&graph, &[]);
        let island = info.component_of(VertexId(4)).expect("test failed");
        let added = graph.add_vertex(0.5, 0.5, VertexKind::Synthetic);
        graph
            .add_edge(VertexId(5), added, 10.0, EdgeClass::Street)
            .expect("test invariant failed");
        assert_eq!(info.get_graph_component(&graph, added).id, island.id);
        assert!(info.component_of(added).is_none());

        let lonely = graph.add_vertex(9.0, 9.0, VertexKind::Synthetic);
        assert_eq!(info.extend(&graph), 2);
        assert_eq!(info.component_of(added).map(|c| c.id), Some(island.id));
        assert_eq!(info.component_of(VertexId(4)).map(|c| c.size), Some(island.size + 1));
        let lonely_component = info.component_of(lonely).expect("test failed");
        assert_eq!(lonely_component.size, 1);
        assert!(!lonely_component.is_singleton());
        assert_eq!(info.n_components(), 3);
    }

    #[test]
    fn test_grid_is_one_component() {
        let graph = grid_graph(4, 4, 100.0);
        let info = GraphComponentInfo::build(&graph, &[]);
        assert_eq!(info.n_components(), 1);
        assert_eq!(info.largest_component().map(|c| c.size), Some(16));
    }
}
