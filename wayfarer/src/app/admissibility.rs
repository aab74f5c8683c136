use std::sync::Arc;

use kdam::{tqdm, BarExt};
use rand::{rngs::StdRng, RngExt, SeedableRng};
use serde::{Deserialize, Serialize};
use wayfarer_core::{
    model::graph::{Graph, VertexId},
    util::AbortSignal,
};

use super::AppError;
use crate::model::{
    component::GraphComponentInfo,
    estimator::{
        dijkstra_ops,
        landmark::{LandmarkConfig, LandmarkDistanceEstimator, LandmarkSet},
        DistanceEstimator,
    },
};

/// settings of one admissibility regression check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdmissibilityCheck {
    /// number of source vertices sampled
    pub samples: usize,
    /// targets sampled per source
    pub targets_per_sample: usize,
    /// meters an estimate may exceed the exact distance before it counts
    pub tolerance_meters: f64,
    pub seed: u64,
}

impl Default for AdmissibilityCheck {
    fn default() -> Self {
        AdmissibilityCheck {
            samples: 100,
            targets_per_sample: 10,
            tolerance_meters: 1e-6,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdmissibilityReport {
    /// sampled pairs with a finite exact distance
    pub checked: usize,
    /// sampled pairs in different components
    pub unreachable: usize,
    pub violations: usize,
    /// largest amount in meters by which an estimate exceeded the exact distance
    pub max_excess_meters: f64,
    pub local_search_fallbacks: usize,
    pub straight_line_fallbacks: usize,
}

/// compares landmark lower bounds against exact undirected distances on
/// randomly sampled vertex pairs.
pub fn run(
    graph: Arc<Graph>,
    landmarks: LandmarkSet,
    config: &LandmarkConfig,
    check: &AdmissibilityCheck,
) -> Result<AdmissibilityReport, AppError> {
    let n = graph.n_vertices();
    if n == 0 {
        return Err(AppError::InvalidUserInput(String::from(
            "cannot check admissibility on an empty graph",
        )));
    }
    let components = GraphComponentInfo::build(&graph, &config.forbidden_edge_classes);
    let estimator = LandmarkDistanceEstimator::new(
        graph.clone(),
        Arc::new(landmarks),
        Some(Arc::new(components)),
        config,
    );
    let mut rng = StdRng::seed_from_u64(check.seed);
    let mut report = AdmissibilityReport {
        checked: 0,
        unreachable: 0,
        violations: 0,
        max_excess_meters: 0.0,
        local_search_fallbacks: 0,
        straight_line_fallbacks: 0,
    };
    let mut pb = tqdm!(total = check.samples, desc = "admissibility check");
    for _ in 0..check.samples {
        let source = VertexId(rng.random_range(0..n));
        let exact = dijkstra_ops::undirected_single_source(
            &graph,
            source,
            &config.forbidden_edge_classes,
            &AbortSignal::none(),
        )?;
        for _ in 0..check.targets_per_sample {
            let target = VertexId(rng.random_range(0..n));
            let distance = exact[target.0];
            if !distance.is_finite() {
                report.unreachable += 1;
                continue;
            }
            report.checked += 1;
            let excess = estimator.estimate_distance_meters(source, target) - distance;
            if excess > check.tolerance_meters {
                report.violations += 1;
                log::debug!("estimate for ({source}, {target}) exceeds distance by {excess:.3}m");
            }
            report.max_excess_meters = report.max_excess_meters.max(excess);
        }
        if let Err(e) = pb.update(1) {
            log::warn!("error during update of progress bar: {e}")
        }
    }
    eprintln!();
    let (local, straight) = estimator.fallback_counts();
    report.local_search_fallbacks = local;
    report.straight_line_fallbacks = straight;
    Ok(report)
}
