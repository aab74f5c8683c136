use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use super::{Boundaries, Direction, GridPoint};
use crate::model::heuristic::HeuristicError;

/// serialized directional grid. each direction holds a `width` by `height`
/// matrix indexed `[x][y]` with the weight of leaving cell (x, y) in that
/// direction. zero cells mean the move is not possible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionMatrixFile {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
    pub width: usize,
    pub height: usize,
    pub north: Vec<Vec<f64>>,
    pub north_east: Vec<Vec<f64>>,
    pub east: Vec<Vec<f64>>,
    pub south_east: Vec<Vec<f64>>,
    pub south: Vec<Vec<f64>>,
    pub south_west: Vec<Vec<f64>>,
    pub west: Vec<Vec<f64>>,
    pub north_west: Vec<Vec<f64>>,
}

impl ConnectionMatrixFile {
    fn matrix(&self, direction: Direction) -> &Vec<Vec<f64>> {
        match direction {
            Direction::North => &self.north,
            Direction::NorthEast => &self.north_east,
            Direction::East => &self.east,
            Direction::SouthEast => &self.south_east,
            Direction::South => &self.south,
            Direction::SouthWest => &self.south_west,
            Direction::West => &self.west,
            Direction::NorthWest => &self.north_west,
        }
    }
}

/// the loaded directional grid. impassable moves are stored as NaN and are
/// never reported as a cost.
#[derive(Debug, Clone)]
pub struct ConnectionMatrixHeuristicData {
    boundaries: Boundaries,
    /// per direction, dense cell costs in [`Boundaries::index_of`] order
    costs: Vec<Vec<f64>>,
}

impl ConnectionMatrixHeuristicData {
    pub fn boundaries(&self) -> &Boundaries {
        &self.boundaries
    }

    /// weight of leaving `point` in `direction`. None when the move leaves
    /// the grid or is impassable.
    pub fn cost(&self, point: GridPoint, direction: Direction) -> Option<f64> {
        let idx = self.boundaries.index_of(point)?;
        if !self.boundaries.contains(point.step(direction)) {
            return None;
        }
        let cost = self.costs[direction.index()][idx];
        if cost.is_nan() {
            None
        } else {
            Some(cost)
        }
    }

    /// number of cells whose move in `direction` is impassable
    pub fn impassable_count(&self, direction: Direction) -> usize {
        self.costs[direction.index()]
            .iter()
            .filter(|c| c.is_nan())
            .count()
    }

    pub fn cell_of(&self, lat: f64, lon: f64) -> Option<GridPoint> {
        let point = self.boundaries.create_point_from(lat, lon);
        if self.boundaries.contains(point) {
            Some(point)
        } else {
            None
        }
    }
}

impl TryFrom<ConnectionMatrixFile> for ConnectionMatrixHeuristicData {
    type Error = HeuristicError;

    fn try_from(file: ConnectionMatrixFile) -> Result<Self, Self::Error> {
        if file.width == 0 || file.height == 0 {
            return Err(HeuristicError::InvalidData(format!(
                "grid must have at least one cell, found {}x{}",
                file.width, file.height
            )));
        }
        if !(file.lat_max > file.lat_min && file.lon_max > file.lon_min) {
            return Err(HeuristicError::InvalidData(format!(
                "invalid bounds lat [{}, {}] lon [{}, {}]",
                file.lat_min, file.lat_max, file.lon_min, file.lon_max
            )));
        }
        let boundaries = Boundaries {
            lat_min: file.lat_min,
            lat_max: file.lat_max,
            lon_min: file.lon_min,
            lon_max: file.lon_max,
            width: file.width,
            height: file.height,
        };
        let mut costs = Vec::with_capacity(Direction::ALL.len());
        for direction in Direction::ALL {
            let matrix = file.matrix(direction);
            if matrix.len() != file.width {
                return Err(HeuristicError::InvalidData(format!(
                    "'{direction}' has {} rows, expected width {}",
                    matrix.len(),
                    file.width
                )));
            }
            let mut dense = Vec::with_capacity(boundaries.n_cells());
            for (x, row) in matrix.iter().enumerate() {
                if row.len() != file.height {
                    return Err(HeuristicError::InvalidData(format!(
                        "'{direction}' row {x} has {} cells, expected height {}",
                        row.len(),
                        file.height
                    )));
                }
                for (y, cost) in row.iter().enumerate() {
                    if *cost == 0.0 {
                        dense.push(f64::NAN);
                    } else if cost.is_finite() && *cost > 0.0 {
                        dense.push(*cost);
                    } else {
                        return Err(HeuristicError::InvalidData(format!(
                            "'{direction}' cell ({x}, {y}) has invalid cost {cost}"
                        )));
                    }
                }
            }
            costs.push(dense);
        }
        let data = ConnectionMatrixHeuristicData { boundaries, costs };
        log::debug!(
            "loaded {}x{} connection matrix, {} impassable cells",
            file.width,
            file.height,
            Direction::ALL
                .iter()
                .map(|d| data.impassable_count(*d))
                .sum::<usize>()
        );
        Ok(data)
    }
}

impl TryFrom<&Path> for ConnectionMatrixHeuristicData {
    type Error = HeuristicError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let file = File::open(path).map_err(|e| HeuristicError::ReadError {
            path: path.to_owned(),
            message: e.to_string(),
        })?;
        let contents: ConnectionMatrixFile = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| HeuristicError::ReadError {
                path: path.to_owned(),
                message: e.to_string(),
            })?;
        ConnectionMatrixHeuristicData::try_from(contents)
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;

    /// a grid over lat [0, width) lon [0, height) with every move costing
    /// `cost`.
    pub(crate) fn uniform_file(width: usize, height: usize, cost: f64) -> ConnectionMatrixFile {
        let m = vec![vec![cost; height]; width];
        ConnectionMatrixFile {
            lat_min: 0.0,
            lat_max: width as f64,
            lon_min: 0.0,
            lon_max: height as f64,
            width,
            height,
            north: m.clone(),
            north_east: m.clone(),
            east: m.clone(),
            south_east: m.clone(),
            south: m.clone(),
            south_west: m.clone(),
            west: m.clone(),
            north_west: m,
        }
    }

    #[test]
    fn test_deserialize_camel_case() {
        let row = serde_json::json!([[1.0, 2.0]]);
        let json = serde_json::json!({
            "latMin": 0.0, "latMax": 1.0, "lonMin": 0.0, "lonMax": 2.0,
            "width": 1, "height": 2,
            "north": row, "northEast": row, "east": [[0.0, 2.0]], "southEast": row,
            "south": row, "southWest": row, "west": row, "northWest": row,
        });
        let file: ConnectionMatrixFile = serde_json::from_value(json).expect("test failed");
        let data = ConnectionMatrixHeuristicData::try_from(file).expect("test failed");
        assert_eq!(data.boundaries().width, 1);
        assert_eq!(data.impassable_count(Direction::East), 1);
        // zero cells become impassable, never a zero cost
        assert_eq!(data.cost(GridPoint::new(0, 0), Direction::East), None);
        assert_eq!(data.cost(GridPoint::new(0, 1), Direction::West), Some(2.0));
        // moves leaving the grid have no cost
        assert_eq!(data.cost(GridPoint::new(0, 1), Direction::East), None);
    }

    #[test]
    fn test_dimension_validation() {
        let mut file = uniform_file(3, 2, 1.0);
        file.south = vec![vec![1.0; 2]; 2];
        assert!(matches!(
            ConnectionMatrixHeuristicData::try_from(file),
            Err(HeuristicError::InvalidData(_))
        ));
        let mut file = uniform_file(3, 2, 1.0);
        file.west[1] = vec![1.0; 3];
        assert!(matches!(
            ConnectionMatrixHeuristicData::try_from(file),
            Err(HeuristicError::InvalidData(_))
        ));
        let mut file = uniform_file(3, 2, 1.0);
        file.west[1][1] = -2.0;
        assert!(matches!(
            ConnectionMatrixHeuristicData::try_from(file),
            Err(HeuristicError::InvalidData(_))
        ));
    }

    #[test]
    fn test_read_from_file() {
        let dir = tempfile::tempdir().expect("test invariant failed");
        let path = dir.path().join("grid.json");
        let file = uniform_file(2, 2, 3.0);
        std::fs::write(&path, serde_json::to_string(&file).expect("test invariant failed"))
            .expect("test invariant failed");
        let data = ConnectionMatrixHeuristicData::try_from(path.as_path()).expect("test failed");
        assert_eq!(data.cost(GridPoint::new(0, 0), Direction::SouthEast), Some(3.0));
        assert_eq!(data.cell_of(1.5, 0.5), Some(GridPoint::new(0, 0)));
        assert_eq!(data.cell_of(2.5, 0.5), None);
    }
}
