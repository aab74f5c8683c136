use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use rayon::prelude::*;
use wayfarer_core::{
    model::graph::{EdgeClass, Graph, VertexId},
    util::AbortSignal,
};

use super::{landmark_selection_ops, Landmark, LandmarkConfig, LandmarkExport, LandmarkRecord};
use crate::model::{
    component::GraphComponentInfo,
    estimator::{dijkstra_ops, EstimatorError},
};

/// the precomputed landmarks of one graph. immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkSet {
    n_vertices: usize,
    landmarks: Vec<Landmark>,
}

impl LandmarkSet {
    /// selects landmarks over `graph` and computes their distances.
    pub fn build(
        graph: &Graph,
        components: &GraphComponentInfo,
        config: &LandmarkConfig,
        abort: &AbortSignal,
    ) -> Result<LandmarkSet, EstimatorError> {
        let landmarks = landmark_selection_ops::select_landmarks(graph, components, config, abort)?;
        log::info!(
            "selected {} landmarks: {}",
            landmarks.len(),
            landmarks
                .iter()
                .map(|l| l.vertex_id.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(LandmarkSet {
            n_vertices: graph.n_vertices(),
            landmarks,
        })
    }

    /// recomputes distances for already chosen landmark vertices, one
    /// search per landmark in parallel.
    pub fn from_vertices(
        graph: &Graph,
        vertex_ids: &[VertexId],
        forbidden_edge_classes: &[EdgeClass],
        abort: &AbortSignal,
    ) -> Result<LandmarkSet, EstimatorError> {
        let landmarks = vertex_ids
            .par_iter()
            .map(|v| {
                dijkstra_ops::undirected_single_source(graph, *v, forbidden_edge_classes, abort)
                    .map(|distances| Landmark::new(*v, distances))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(LandmarkSet {
            n_vertices: graph.n_vertices(),
            landmarks,
        })
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// number of vertices the distance arrays cover
    pub fn n_vertices(&self) -> usize {
        self.n_vertices
    }

    pub fn to_export(&self) -> LandmarkExport {
        let landmarks = self
            .landmarks
            .iter()
            .map(|l| LandmarkRecord {
                vertex_id: l.vertex_id,
                distances: l
                    .distances
                    .iter()
                    .map(|d| if d.is_finite() { Some(*d) } else { None })
                    .collect(),
            })
            .collect();
        LandmarkExport {
            n_vertices: self.n_vertices,
            landmarks,
        }
    }

    pub fn write(&self, path: &Path) -> Result<(), EstimatorError> {
        let file = File::create(path).map_err(|e| EstimatorError::WriteError {
            path: path.to_owned(),
            message: e.to_string(),
        })?;
        serde_json::to_writer(BufWriter::new(file), &self.to_export()).map_err(|e| {
            EstimatorError::WriteError {
                path: path.to_owned(),
                message: e.to_string(),
            }
        })
    }
}

impl TryFrom<LandmarkExport> for LandmarkSet {
    type Error = EstimatorError;

    fn try_from(value: LandmarkExport) -> Result<Self, Self::Error> {
        let mut landmarks = Vec::with_capacity(value.landmarks.len());
        for record in value.landmarks.into_iter() {
            if record.distances.len() != value.n_vertices {
                return Err(EstimatorError::InvalidExport(format!(
                    "landmark {} has {} distances, expected {}",
                    record.vertex_id,
                    record.distances.len(),
                    value.n_vertices
                )));
            }
            if record.vertex_id.0 >= value.n_vertices {
                return Err(EstimatorError::InvalidExport(format!(
                    "landmark vertex {} is outside of {} vertices",
                    record.vertex_id, value.n_vertices
                )));
            }
            let distances = record
                .distances
                .into_iter()
                .map(|d| d.unwrap_or(f64::INFINITY))
                .collect();
            landmarks.push(Landmark::new(record.vertex_id, distances));
        }
        Ok(LandmarkSet {
            n_vertices: value.n_vertices,
            landmarks,
        })
    }
}

impl TryFrom<&Path> for LandmarkSet {
    type Error = EstimatorError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let file = File::open(path).map_err(|e| EstimatorError::ReadError {
            path: path.to_owned(),
            message: e.to_string(),
        })?;
        let export: LandmarkExport =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| {
                EstimatorError::ReadError {
                    path: path.to_owned(),
                    message: e.to_string(),
                }
            })?;
        LandmarkSet::try_from(export)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::{grid_graph, two_islands};

    #[test]
    fn test_export_round_trip_through_file() {
        let graph = two_islands();
        let set = LandmarkSet::from_vertices(&graph, &[VertexId(0)], &[], &AbortSignal::none())
            .expect("test failed");
        let export = set.to_export();
        assert_eq!(export.landmarks[0].distances[4], None);

        let dir = tempfile::tempdir().expect("test invariant failed");
        let path = dir.path().join("landmarks.json");
        set.write(&path).expect("test failed");
        let read = LandmarkSet::try_from(path.as_path()).expect("test failed");
        assert_eq!(read, set);
        assert!(read.landmarks()[0].distances[4].is_infinite());
    }

    #[test]
    fn test_invalid_export() {
        let export = LandmarkExport {
            n_vertices: 3,
            landmarks: vec![LandmarkRecord {
                vertex_id: VertexId(0),
                distances: vec![Some(0.0)],
            }],
        };
        assert!(matches!(
            LandmarkSet::try_from(export),
            Err(EstimatorError::InvalidExport(_))
        ));
    }

    #[test]
    fn test_from_vertices_matches_build() {
        let graph = grid_graph(4, 4, 100.0);
        let components = GraphComponentInfo::build(&graph, &[]);
        let config = LandmarkConfig {
            count: 3,
            ..Default::default()
        };
        let built =
            LandmarkSet::build(&graph, &components, &config, &AbortSignal::none()).expect("test failed");
        let ids: Vec<VertexId> = built.landmarks().iter().map(|l| l.vertex_id).collect();
        let rebuilt = LandmarkSet::from_vertices(&graph, &ids, &[], &AbortSignal::none())
            .expect("test failed");
        assert_eq!(built, rebuilt);
    }
}
