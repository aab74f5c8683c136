use std::{
    cell::OnceCell,
    collections::{HashSet, VecDeque},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use wayfarer_core::{
    model::graph::{Graph, VertexId},
    util::geo_utils,
};

use super::{Landmark, LandmarkConfig, LandmarkSet};
use crate::model::{
    component::{GraphComponent, GraphComponentInfo},
    estimator::DistanceEstimator,
};

/// ALT lower bound: the largest `|d_l(from) - d_l(to)|` over all landmarks.
///
/// vertices without a precomputed distance borrow the distance of a nearby
/// vertex found by a small local search, or fall back to the straight-line
/// distance to the landmark. fallbacks make the estimate inadmissible but
/// keep it finite; they are counted and logged every
/// `fallback_log_interval` occurrences.
pub struct LandmarkDistanceEstimator {
    graph: Arc<Graph>,
    landmarks: Arc<LandmarkSet>,
    components: Option<Arc<GraphComponentInfo>>,
    local_search_limit: usize,
    component_check: bool,
    fallback_log_interval: usize,
    local_search_hits: AtomicUsize,
    straight_line_fallbacks: AtomicUsize,
    component_searches: AtomicUsize,
}

impl LandmarkDistanceEstimator {
    pub fn new(
        graph: Arc<Graph>,
        landmarks: Arc<LandmarkSet>,
        components: Option<Arc<GraphComponentInfo>>,
        config: &LandmarkConfig,
    ) -> LandmarkDistanceEstimator {
        if landmarks.n_vertices() != graph.n_vertices() {
            log::warn!(
                "landmarks cover {} vertices but the graph has {}, new vertices will use fallbacks",
                landmarks.n_vertices(),
                graph.n_vertices()
            );
        }
        LandmarkDistanceEstimator {
            graph,
            landmarks,
            components,
            local_search_limit: config.local_search_limit,
            component_check: config.component_check,
            fallback_log_interval: config.fallback_log_interval,
            local_search_hits: AtomicUsize::new(0),
            straight_line_fallbacks: AtomicUsize::new(0),
            component_searches: AtomicUsize::new(0),
        }
    }

    /// distance from `landmark` to `vertex_id`, degrading as described on
    /// the type.
    pub fn distance_from_landmark(&self, landmark: &Landmark, vertex_id: VertexId) -> f64 {
        self.distance_with_component(landmark, vertex_id, &OnceCell::new())
    }

    /// (local search hits, straight-line fallbacks) since construction
    pub fn fallback_counts(&self) -> (usize, usize) {
        (
            self.local_search_hits.load(Ordering::Relaxed),
            self.straight_line_fallbacks.load(Ordering::Relaxed),
        )
    }

    /// component searches run for vertices missing from the component table
    /// since construction
    pub fn component_searches(&self) -> usize {
        self.component_searches.load(Ordering::Relaxed)
    }

    /// `component` holds the component of `vertex_id` once it was looked up,
    /// so one estimate searches for it at most once across all landmarks.
    fn distance_with_component(
        &self,
        landmark: &Landmark,
        vertex_id: VertexId,
        component: &OnceCell<GraphComponent>,
    ) -> f64 {
        if let Some(distance) = landmark.known_distance(vertex_id) {
            return distance;
        }
        if self.component_check && !self.in_landmark_component(landmark, vertex_id, component) {
            return self.straight_line_fallback(landmark, vertex_id);
        }
        match self.local_search(landmark, vertex_id) {
            Some(distance) => {
                self.local_search_hits.fetch_add(1, Ordering::Relaxed);
                distance
            }
            None => self.straight_line_fallback(landmark, vertex_id),
        }
    }

    fn in_landmark_component(
        &self,
        landmark: &Landmark,
        vertex_id: VertexId,
        component: &OnceCell<GraphComponent>,
    ) -> bool {
        let Some(components) = &self.components else {
            return true;
        };
        let b = component.get_or_init(|| match components.component_of(vertex_id) {
            Some(c) => c,
            None => {
                self.component_searches.fetch_add(1, Ordering::Relaxed);
                components.get_graph_component(&self.graph, vertex_id)
            }
        });
        let a = components.get_graph_component(&self.graph, landmark.vertex_id);
        !b.is_singleton() && a.id == b.id
    }

    /// breadth-first search over both edge directions for the first vertex
    /// with a known distance, visiting at most `local_search_limit` vertices.
    fn local_search(&self, landmark: &Landmark, source: VertexId) -> Option<f64> {
        let mut visited = HashSet::from([source]);
        let mut queue = VecDeque::from([source]);
        while let Some(vertex_id) = queue.pop_front() {
            for (next, _) in self.graph.incident_edges(vertex_id) {
                if !visited.insert(next) {
                    continue;
                }
                if let Some(distance) = landmark.known_distance(next) {
                    return Some(distance);
                }
                if visited.len() >= self.local_search_limit {
                    return None;
                }
                queue.push_back(next);
            }
        }
        None
    }

    fn straight_line_fallback(&self, landmark: &Landmark, vertex_id: VertexId) -> f64 {
        let n = self.straight_line_fallbacks.fetch_add(1, Ordering::Relaxed) + 1;
        if self.fallback_log_interval > 0 && n % self.fallback_log_interval == 0 {
            log::warn!(
                "landmark distance fell back to straight-line distance {n} times (latest: landmark {}, vertex {vertex_id}), check landmark selection and components",
                landmark.vertex_id
            );
        }
        match (
            self.graph.get_vertex(landmark.vertex_id),
            self.graph.get_vertex(vertex_id),
        ) {
            (Some(a), Some(b)) => geo_utils::vertex_distance_meters(a, b),
            _ => 0.0,
        }
    }
}

impl DistanceEstimator for LandmarkDistanceEstimator {
    fn estimate_distance_meters(&self, from: VertexId, to: VertexId) -> f64 {
        if from == to {
            return 0.0;
        }
        let (from_component, to_component) = (OnceCell::new(), OnceCell::new());
        self.landmarks
            .landmarks()
            .iter()
            .map(|l| {
                let d_from = self.distance_with_component(l, from, &from_component);
                let d_to = self.distance_with_component(l, to, &to_component);
                (d_from - d_to).abs()
            })
            .fold(0.0, f64::max)
    }
}
