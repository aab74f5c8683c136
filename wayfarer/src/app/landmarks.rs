use std::path::Path;

use serde::{Deserialize, Serialize};
use wayfarer_core::{
    model::graph::{Graph, VertexId},
    util::AbortSignal,
};

use super::AppError;
use crate::model::{
    component::GraphComponentInfo,
    estimator::landmark::{LandmarkConfig, LandmarkSet},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarksSummary {
    pub landmarks: Vec<VertexId>,
    pub output_file: String,
}

/// selects landmarks for `graph` and writes the landmark export to
/// `output_file`.
pub fn run(
    graph: &Graph,
    config: &LandmarkConfig,
    output_file: &str,
) -> Result<LandmarksSummary, AppError> {
    let components = GraphComponentInfo::build(graph, &config.forbidden_edge_classes);
    let set = LandmarkSet::build(graph, &components, config, &AbortSignal::none())?;
    set.write(Path::new(output_file))?;
    log::info!("wrote {} landmarks to '{output_file}'", set.len());
    Ok(LandmarksSummary {
        landmarks: set.landmarks().iter().map(|l| l.vertex_id).collect(),
        output_file: output_file.to_string(),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{app::test_files::path_str, testing::grid_graph};

    #[test]
    fn test_writes_readable_export() {
        let dir = tempfile::tempdir().expect("test invariant failed");
        let output = path_str(&dir.path().join("landmarks.json"));
        let graph = grid_graph(4, 4, 100.0);
        let config = LandmarkConfig {
            count: 3,
            ..Default::default()
        };
        let summary = run(&graph, &config, &output).expect("test failed");
        assert_eq!(summary.landmarks.len(), 3);
        let loaded = LandmarkSet::try_from(Path::new(&output)).expect("test failed");
        assert_eq!(loaded.n_vertices(), 16);
        let ids: Vec<_> = loaded.landmarks().iter().map(|l| l.vertex_id).collect();
        assert_eq!(ids, summary.landmarks);
    }
}
