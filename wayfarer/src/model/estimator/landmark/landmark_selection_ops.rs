use kdam::{tqdm, BarExt};
use rand::{rngs::StdRng, RngExt, SeedableRng};
use wayfarer_core::{
    model::graph::{Graph, VertexId},
    util::AbortSignal,
};

use super::{Landmark, LandmarkConfig};
use crate::model::{
    component::GraphComponentInfo,
    estimator::{dijkstra_ops, EstimatorError},
};

/// vertices eligible as landmarks: members of the largest component that
/// are part of the imported graph (not synthetic).
pub fn landmark_candidates(graph: &Graph, components: &GraphComponentInfo) -> Vec<VertexId> {
    let Some(largest) = components.largest_component() else {
        return vec![];
    };
    graph
        .vertices()
        .iter()
        .filter(|v| !v.is_synthetic())
        .filter(|v| components.component_of(v.vertex_id).map(|c| c.id) == Some(largest.id))
        .map(|v| v.vertex_id)
        .collect()
}

/// chooses up to `config.count` landmarks by farthest-point selection.
///
/// a seeded random candidate starts an exact search; the candidate farthest
/// from it becomes the first landmark. each following landmark is the
/// candidate maximizing the sum of its dampened distances (`d^α`) to the
/// landmarks chosen so far, considering only candidates every chosen
/// landmark reached. fewer landmarks are returned when candidates run out.
pub fn select_landmarks(
    graph: &Graph,
    components: &GraphComponentInfo,
    config: &LandmarkConfig,
    abort: &AbortSignal,
) -> Result<Vec<Landmark>, EstimatorError> {
    let candidates = landmark_candidates(graph, components);
    if candidates.is_empty() {
        return Err(EstimatorError::NoCandidates(String::from(
            "graph has no non-synthetic vertex in a connected component",
        )));
    }
    if config.count == 0 {
        return Ok(vec![]);
    }
    let forbidden = &config.forbidden_edge_classes;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let seed_vertex = candidates[rng.random_range(0..candidates.len())];
    let seed_distances =
        dijkstra_ops::undirected_single_source(graph, seed_vertex, forbidden, abort)?;
    let first = farthest(&candidates, &seed_distances).unwrap_or(seed_vertex);
    log::debug!("landmark seed vertex {seed_vertex}, first landmark {first}");

    let mut pb = tqdm!(total = config.count, desc = "selecting landmarks");
    let mut landmarks = vec![Landmark::new(
        first,
        dijkstra_ops::undirected_single_source(graph, first, forbidden, abort)?,
    )];
    if let Err(e) = pb.update(1) {
        log::warn!("error during update of progress bar: {e}")
    }

    let alpha = config.dampening_exponent;
    while landmarks.len() < config.count {
        if abort.is_aborted() {
            return Err(EstimatorError::Aborted);
        }
        let chosen: Vec<VertexId> = landmarks.iter().map(|l| l.vertex_id).collect();
        let next = candidates
            .iter()
            .filter(|v| !chosen.contains(v))
            .filter_map(|v| {
                let mut score = 0.0;
                for landmark in landmarks.iter() {
                    score += landmark.known_distance(*v)?.powf(alpha);
                }
                Some((*v, score))
            })
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(v, _)| v);
        let Some(next) = next else {
            log::warn!(
                "only {} of {} requested landmarks could be selected",
                landmarks.len(),
                config.count
            );
            break;
        };
        let distances = dijkstra_ops::undirected_single_source(graph, next, forbidden, abort)?;
        landmarks.push(Landmark::new(next, distances));
        if let Err(e) = pb.update(1) {
            log::warn!("error during update of progress bar: {e}")
        }
    }
    eprintln!();
    Ok(landmarks)
}

/// the candidate with the largest finite distance.
fn farthest(candidates: &[VertexId], distances: &[f64]) -> Option<VertexId> {
    candidates
        .iter()
        .filter_map(|v| {
            distances
                .get(v.0)
                .filter(|d| d.is_finite())
                .map(|d| (*v, *d))
        })
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(v, _)| v)
}
