use std::{collections::BTreeMap, path::Path};

use serde::{Deserialize, Serialize};

use super::AppError;
use crate::model::heuristic::connection_matrix::{
    Boundaries, ConnectionMatrixHeuristicData, Direction,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSummary {
    pub boundaries: Boundaries,
    pub n_cells: usize,
    /// impassable cells per direction
    pub impassable: BTreeMap<String, usize>,
}

pub fn run(grid_file: &str) -> Result<GridSummary, AppError> {
    let data = ConnectionMatrixHeuristicData::try_from(Path::new(grid_file))?;
    let impassable = Direction::ALL
        .iter()
        .map(|d| (d.to_string(), data.impassable_count(*d)))
        .collect();
    Ok(GridSummary {
        boundaries: *data.boundaries(),
        n_cells: data.boundaries().n_cells(),
        impassable,
    })
}
