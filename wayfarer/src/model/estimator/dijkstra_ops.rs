use std::{cmp::Reverse, collections::BinaryHeap};

use ordered_float::OrderedFloat;
use wayfarer_core::{
    model::graph::{EdgeClass, Graph, VertexId},
    util::AbortSignal,
};

use super::EstimatorError;

/// how many settled vertices between abort checks
const ABORT_CHECK_INTERVAL: usize = 1024;

/// distances in meters from `source` to every vertex over the undirected view
/// of the graph, skipping edges of the forbidden classes. unreached vertices
/// hold `f64::INFINITY`.
pub fn undirected_single_source(
    graph: &Graph,
    source: VertexId,
    forbidden_edge_classes: &[EdgeClass],
    abort: &AbortSignal,
) -> Result<Vec<f64>, EstimatorError> {
    if graph.get_vertex(source).is_none() {
        return Err(EstimatorError::InvalidVertex(source));
    }
    let mut distances = vec![f64::INFINITY; graph.n_vertices()];
    let mut settled = vec![false; graph.n_vertices()];
    let mut frontier = BinaryHeap::new();
    distances[source.0] = 0.0;
    frontier.push(Reverse((OrderedFloat(0.0), source)));

    let mut n_settled = 0;
    while let Some(Reverse((OrderedFloat(distance), vertex_id))) = frontier.pop() {
        if settled[vertex_id.0] {
            continue;
        }
        settled[vertex_id.0] = true;
        n_settled += 1;
        if n_settled % ABORT_CHECK_INTERVAL == 0 && abort.is_aborted() {
            return Err(EstimatorError::Aborted);
        }
        for (next, edge) in graph.incident_edges_excluding(vertex_id, forbidden_edge_classes) {
            let candidate = distance + edge.distance_meters;
            if candidate < distances[next.0] {
                distances[next.0] = candidate;
                frontier.push(Reverse((OrderedFloat(candidate), next)));
            }
        }
    }
    Ok(distances)
}

/// shortest undirected distance from `from` to `to`, stopping once `to` is
/// settled. infinite when the two are disconnected or either is unknown.
pub fn undirected_distance(graph: &Graph, from: VertexId, to: VertexId) -> f64 {
    if graph.get_vertex(from).is_none() || graph.get_vertex(to).is_none() {
        return f64::INFINITY;
    }
    let mut distances = vec![f64::INFINITY; graph.n_vertices()];
    let mut frontier = BinaryHeap::new();
    distances[from.0] = 0.0;
    frontier.push(Reverse((OrderedFloat(0.0), from)));
    while let Some(Reverse((OrderedFloat(distance), vertex_id))) = frontier.pop() {
        if vertex_id == to {
            return distance;
        }
        if distance > distances[vertex_id.0] {
            continue;
        }
        for (next, edge) in graph.incident_edges(vertex_id) {
            let candidate = distance + edge.distance_meters;
            if candidate < distances[next.0] {
                distances[next.0] = candidate;
                frontier.push(Reverse((OrderedFloat(candidate), next)));
            }
        }
    }
    f64::INFINITY
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::{line_graph, two_islands};

    #[test]
    fn test_single_source_on_line() {
        let graph = line_graph(4, 100.0);
        let distances = undirected_single_source(&graph, VertexId(0), &[], &AbortSignal::none())
            .expect("test failed");
        assert_eq!(distances.len(), 4);
        assert_eq!(distances[0], 0.0);
        assert!((distances[3] - 300.0).abs() < 1e-6);
    }

    #[test]
    fn test_single_source_unreached() {
        let graph = two_islands();
        let distances = undirected_single_source(&graph, VertexId(0), &[], &AbortSignal::none())
            .expect("test failed");
        assert!(distances[4].is_infinite());
        assert!(distances[3].is_finite());
    }

    #[test]
    fn test_aborted() {
        let graph = crate::testing::grid_graph(40, 40, 10.0);
        let abort = AbortSignal::none();
        abort.abort();
        let result = undirected_single_source(&graph, VertexId(0), &[], &abort);
        assert!(matches!(result, Err(EstimatorError::Aborted)));
    }

    #[test]
    fn test_invalid_source() {
        let graph = line_graph(2, 100.0);
        let result = undirected_single_source(&graph, VertexId(7), &[], &AbortSignal::none());
        assert!(matches!(result, Err(EstimatorError::InvalidVertex(_))));
    }
}
