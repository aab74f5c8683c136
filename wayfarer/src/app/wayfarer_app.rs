use std::{path::Path, sync::Arc};

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use super::{
    admissibility::{self, AdmissibilityCheck},
    components, grid, landmarks, read_configuration, read_graph, read_key, AppError,
    ComponentsConfig,
};
use crate::model::estimator::landmark::{LandmarkConfig, LandmarkSet};

/// Command line tool for building and checking multimodal search artifacts
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct WayfarerApp {
    #[command(subcommand)]
    pub op: WayfarerOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum WayfarerOperation {
    /// summarize the connected components of a graph
    Components {
        /// graph JSON document with vertices and edges
        #[arg(short, long)]
        graph_file: String,

        /// configuration file with an optional `components` section
        #[arg(short, long)]
        configuration_file: Option<String>,
    },
    /// select landmarks and write their distances to a landmark export
    Landmarks {
        #[arg(short, long)]
        graph_file: String,

        /// configuration file with a `landmarks` section
        #[arg(short, long)]
        configuration_file: String,

        /// location on disk to write the landmark export JSON
        #[arg(short, long)]
        output_file: String,
    },
    /// compare landmark estimates against exact distances on sampled vertex
    /// pairs. fails when any estimate exceeds the exact distance.
    Admissibility {
        #[arg(short, long)]
        graph_file: String,

        /// landmark export written by the landmarks operation
        #[arg(short, long)]
        landmark_file: String,

        /// configuration file with an optional `landmarks` section
        #[arg(short, long)]
        configuration_file: Option<String>,

        /// number of source vertices to sample
        #[arg(short, long, default_value_t = 100)]
        samples: usize,

        /// meters an estimate may exceed the exact distance
        #[arg(short, long, default_value_t = 1e-6)]
        tolerance: f64,
    },
    /// summarize a connection matrix document
    Grid {
        #[arg(long)]
        grid_file: String,
    },
}

impl WayfarerOperation {
    pub fn run(&self) -> Result<(), AppError> {
        match self {
            WayfarerOperation::Components {
                graph_file,
                configuration_file,
            } => {
                let config = match configuration_file {
                    Some(f) => {
                        let config = read_configuration(f)?;
                        read_key::<ComponentsConfig>(&config, "components", f)?
                    }
                    None => None,
                };
                let graph = read_graph(graph_file)?;
                let summary = components::run(&graph, &config.unwrap_or_default());
                print_json(&summary)
            }
            WayfarerOperation::Landmarks {
                graph_file,
                configuration_file,
                output_file,
            } => {
                let config = read_configuration(configuration_file)?;
                let landmark_config =
                    read_key::<LandmarkConfig>(&config, "landmarks", configuration_file)?
                        .ok_or_else(|| {
                            AppError::InvalidUserInput(format!(
                                "'{configuration_file}' is missing the 'landmarks' key"
                            ))
                        })?;
                let graph = read_graph(graph_file)?;
                let summary = landmarks::run(&graph, &landmark_config, output_file)?;
                print_json(&summary)
            }
            WayfarerOperation::Admissibility {
                graph_file,
                landmark_file,
                configuration_file,
                samples,
                tolerance,
            } => {
                let landmark_config = match configuration_file {
                    Some(f) => {
                        let config = read_configuration(f)?;
                        read_key::<LandmarkConfig>(&config, "landmarks", f)?
                    }
                    None => None,
                }
                .unwrap_or_default();
                let graph = Arc::new(read_graph(graph_file)?);
                let landmark_set = LandmarkSet::try_from(Path::new(landmark_file))?;
                let check = AdmissibilityCheck {
                    samples: *samples,
                    tolerance_meters: *tolerance,
                    seed: landmark_config.seed,
                    ..Default::default()
                };
                let report = admissibility::run(graph, landmark_set, &landmark_config, &check)?;
                print_json(&report)?;
                if report.violations > 0 {
                    return Err(AppError::AdmissibilityViolations {
                        violations: report.violations,
                        checked: report.checked,
                    });
                }
                Ok(())
            }
            WayfarerOperation::Grid { grid_file } => {
                let summary = grid::run(grid_file)?;
                print_json(&summary)
            }
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| {
        AppError::InvalidUserInput(format!("failure serializing output: {e}"))
    })?;
    println!("{json}");
    Ok(())
}
