pub mod admissibility;
mod app_error;
pub mod components;
mod components_config;
pub mod grid;
pub mod landmarks;
mod wayfarer_app;

pub use app_error::AppError;
pub use components_config::ComponentsConfig;
pub use wayfarer_app::{WayfarerApp, WayfarerOperation};

use std::path::Path;

use config::{Config, ConfigError, File};
use serde::de::DeserializeOwned;
use wayfarer_core::model::graph::Graph;

/// reads a TOML or JSON configuration file, choosing the format from the
/// file extension.
pub fn read_configuration(configuration_file: &str) -> Result<Config, AppError> {
    let filepath = Path::new(configuration_file);
    Config::builder()
        .add_source(File::from(filepath))
        .build()
        .map_err(|e| {
            let msg = format!("file '{configuration_file}' produced error: {e}");
            AppError::InvalidUserInput(msg)
        })
}

/// the value at `key`, or None when the file does not set it.
pub fn read_key<T: DeserializeOwned>(
    config: &Config,
    key: &str,
    configuration_file: &str,
) -> Result<Option<T>, AppError> {
    match config.get::<T>(key) {
        Ok(value) => Ok(Some(value)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => {
            let msg = format!("error reading '{key}' key in '{configuration_file}': {e}");
            Err(AppError::InvalidUserInput(msg))
        }
    }
}

pub fn read_graph(graph_file: &str) -> Result<Graph, AppError> {
    let graph = Graph::try_from(Path::new(graph_file))?;
    log::info!(
        "loaded graph '{graph_file}' with {} vertices and {} edges",
        graph.n_vertices(),
        graph.n_edges()
    );
    Ok(graph)
}

#[cfg(test)]
pub(crate) mod test_files {
    use std::path::{Path, PathBuf};

    use wayfarer_core::model::graph::{Graph, GraphFile};

    pub fn write_graph(dir: &Path, graph: &Graph) -> PathBuf {
        let path = dir.join("graph.json");
        let file = GraphFile {
            vertices: graph.vertices().to_vec(),
            edges: graph.edges().to_vec(),
        };
        let json = serde_json::to_string(&file).expect("test invariant failed");
        std::fs::write(&path, json).expect("test invariant failed");
        path
    }

    pub fn write_text(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).expect("test invariant failed");
        path
    }

    pub fn path_str(path: &Path) -> String {
        path.to_str().expect("test invariant failed").to_string()
    }
}
