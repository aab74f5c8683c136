use std::{cmp::Reverse, collections::BinaryHeap};

use ordered_float::OrderedFloat;
use wayfarer_core::{model::request::SearchDirection, util::AbortSignal};

use super::{ConnectionMatrixHeuristicData, Direction, GridPoint};
use crate::model::heuristic::HeuristicError;

const ABORT_CHECK_INTERVAL: usize = 4096;

/// dijkstra over grid cells using the directional costs as edge weights.
///
/// a forward search accumulates the weight of moving from `source` to each
/// cell; a reverse search accumulates the weight of moving from each cell to
/// `source`. impassable moves are never relaxed. the queue is ordered by
/// accumulated weight and the first settled value of a cell is final. the
/// search stops early once `target` is settled.
///
/// returns dense weights in [`super::Boundaries::index_of`] order, with
/// `f64::INFINITY` for cells not reached.
pub fn grid_search(
    data: &ConnectionMatrixHeuristicData,
    source: GridPoint,
    target: Option<GridPoint>,
    direction: SearchDirection,
    abort: &AbortSignal,
) -> Result<Vec<f64>, HeuristicError> {
    let boundaries = data.boundaries();
    let mut weights = vec![f64::INFINITY; boundaries.n_cells()];
    let mut settled = vec![false; boundaries.n_cells()];
    let Some(source_idx) = boundaries.index_of(source) else {
        return Ok(weights);
    };
    weights[source_idx] = 0.0;
    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse((OrderedFloat(0.0), source)));

    let mut n_settled = 0;
    while let Some(Reverse((OrderedFloat(weight), point))) = frontier.pop() {
        let Some(idx) = boundaries.index_of(point) else {
            continue;
        };
        if settled[idx] {
            continue;
        }
        settled[idx] = true;
        n_settled += 1;
        if n_settled % ABORT_CHECK_INTERVAL == 0 && abort.is_aborted() {
            return Err(HeuristicError::Aborted);
        }
        if Some(point) == target {
            break;
        }
        for step in Direction::ALL {
            let next = point.step(step);
            let cost = match direction {
                SearchDirection::Forward => data.cost(point, step),
                // the move from `next` back onto `point`
                SearchDirection::Reverse => data.cost(next, step.opposite()),
            };
            let (Some(cost), Some(next_idx)) = (cost, boundaries.index_of(next)) else {
                continue;
            };
            if settled[next_idx] {
                continue;
            }
            let candidate = weight + cost;
            if candidate < weights[next_idx] {
                weights[next_idx] = candidate;
                frontier.push(Reverse((OrderedFloat(candidate), next)));
            }
        }
    }
    Ok(weights)
}

/// weight of the cheapest grid path from `from` to `to`, if any.
pub fn grid_path_weight(
    data: &ConnectionMatrixHeuristicData,
    from: GridPoint,
    to: GridPoint,
    abort: &AbortSignal,
) -> Result<Option<f64>, HeuristicError> {
    let weights = grid_search(data, from, Some(to), SearchDirection::Forward, abort)?;
    Ok(data
        .boundaries()
        .index_of(to)
        .map(|idx| weights[idx])
        .filter(|w| w.is_finite()))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::heuristic::connection_matrix::{
        connection_matrix_data::test::uniform_file, ConnectionMatrixFile,
    };

    fn data_from(file: ConnectionMatrixFile) -> ConnectionMatrixHeuristicData {
        ConnectionMatrixHeuristicData::try_from(file).expect("test invariant failed")
    }

    #[test]
    fn test_uniform_grid_uses_diagonals() {
        let data = data_from(uniform_file(4, 4, 1.0));
        let w = grid_path_weight(
            &data,
            GridPoint::new(0, 0),
            GridPoint::new(3, 3),
            &AbortSignal::none(),
        )
        .expect("test failed");
        assert_eq!(w, Some(3.0));
    }

    #[test]
    fn test_nan_cells_are_impassable() {
        // 2 rows, 3 columns; the east move out of (0, 1) is impassable
        let mut file = uniform_file(2, 3, 1.0);
        file.east[0][1] = 0.0;
        let data = data_from(file);
        let with_hole = grid_path_weight(
            &data,
            GridPoint::new(0, 1),
            GridPoint::new(0, 2),
            &AbortSignal::none(),
        )
        .expect("test failed");
        // the detour through the second row costs two moves, never zero
        assert_eq!(with_hole, Some(2.0));

        let reference = data_from(uniform_file(2, 3, 1.0));
        let without_hole = grid_path_weight(
            &reference,
            GridPoint::new(0, 1),
            GridPoint::new(0, 2),
            &AbortSignal::none(),
        )
        .expect("test failed");
        assert_eq!(without_hole, Some(1.0));
        assert!(with_hole >= without_hole);
    }

    #[test]
    fn test_walled_off_cell_unreachable() {
        // a single row; nothing may leave column 0 eastward
        let mut file = uniform_file(1, 3, 1.0);
        file.east[0][0] = 0.0;
        let data = data_from(file);
        let w = grid_path_weight(
            &data,
            GridPoint::new(0, 0),
            GridPoint::new(0, 2),
            &AbortSignal::none(),
        )
        .expect("test failed");
        assert_eq!(w, None);
    }

    #[test]
    fn test_reverse_search_uses_inbound_moves() {
        // moving east costs 1, moving west costs 5
        let mut file = uniform_file(1, 3, 1.0);
        file.west = vec![vec![5.0; 3]];
        let data = data_from(file);
        let to_source = grid_search(
            &data,
            GridPoint::new(0, 2),
            None,
            SearchDirection::Reverse,
            &AbortSignal::none(),
        )
        .expect("test failed");
        // reaching column 2 from column 0 moves east twice
        assert_eq!(to_source[0], 2.0);
        let from_source = grid_search(
            &data,
            GridPoint::new(0, 2),
            None,
            SearchDirection::Forward,
            &AbortSignal::none(),
        )
        .expect("test failed");
        assert_eq!(from_source[0], 10.0);
    }
}
