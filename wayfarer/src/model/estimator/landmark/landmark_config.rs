use serde::{Deserialize, Serialize};
use wayfarer_core::model::graph::EdgeClass;

/// landmark selection and query settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandmarkConfig {
    /// number of landmarks to select
    pub count: usize,
    /// seed for the random starting vertex
    pub seed: u64,
    /// exponent (below 1) applied to each landmark distance when scoring
    /// candidates, so that one very distant landmark does not decide alone
    pub dampening_exponent: f64,
    /// vertices visited by the local search for a neighbor with a known
    /// distance
    pub local_search_limit: usize,
    /// fall back to straight-line distance when a vertex is not in the
    /// landmark's component
    pub component_check: bool,
    /// log a fallback summary every this many fallbacks
    pub fallback_log_interval: usize,
    /// edge classes ignored when computing landmark distances
    pub forbidden_edge_classes: Vec<EdgeClass>,
}

impl Default for LandmarkConfig {
    fn default() -> Self {
        LandmarkConfig {
            count: 8,
            seed: 0,
            dampening_exponent: 0.5,
            local_search_limit: 40,
            component_check: true,
            fallback_log_interval: 1000,
            forbidden_edge_classes: vec![],
        }
    }
}
