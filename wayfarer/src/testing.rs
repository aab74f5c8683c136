//! synthetic graphs for unit tests. vertices sit near the equator so that
//! one meter of edge distance matches one meter of great-circle distance
//! between vertex coordinates.

use wayfarer_core::model::{
    graph::{Edge, EdgeClass, Graph, Vertex, VertexId},
    state::StateEditor,
};

use crate::model::search::{ForbiddenFeature, RunState, SearchError};

/// great-circle meters per degree on the mean earth radius
pub const METERS_PER_DEGREE: f64 = 111_195.08;

pub fn degrees(meters: f64) -> f64 {
    meters / METERS_PER_DEGREE
}

/// builds a graph from vertex coordinates (in meters east, meters north)
/// and undirected links, each link becoming a pair of directed edges.
pub fn build_graph(points: &[(f64, f64)], links: &[(usize, usize, f64, EdgeClass)]) -> Graph {
    let vertices = points
        .iter()
        .enumerate()
        .map(|(i, (x, y))| Vertex::new(i, degrees(*x), degrees(*y)))
        .collect();
    let mut edges = vec![];
    for (src, dst, distance, class) in links.iter() {
        let id = edges.len();
        edges.push(Edge::new(id, *src, *dst, *distance).with_class(*class));
        edges.push(Edge::new(id + 1, *dst, *src, *distance).with_class(*class));
    }
    Graph::new(vertices, edges).expect("test invariant failed")
}

/// `n` vertices on an east-west line, `spacing` meters apart.
pub fn line_graph(n: usize, spacing: f64) -> Graph {
    let points: Vec<_> = (0..n).map(|i| (i as f64 * spacing, 0.0)).collect();
    let links: Vec<_> = (1..n)
        .map(|i| (i - 1, i, spacing, EdgeClass::Street))
        .collect();
    build_graph(&points, &links)
}

/// a 4-vertex line (0..=3) and a separate 2-vertex line (4, 5) one
/// kilometer to the north.
pub fn two_islands() -> Graph {
    let points = [
        (0.0, 0.0),
        (100.0, 0.0),
        (200.0, 0.0),
        (300.0, 0.0),
        (0.0, 1000.0),
        (100.0, 1000.0),
    ];
    let links = [
        (0, 1, 100.0, EdgeClass::Street),
        (1, 2, 100.0, EdgeClass::Street),
        (2, 3, 100.0, EdgeClass::Street),
        (4, 5, 100.0, EdgeClass::Street),
    ];
    build_graph(&points, &links)
}

/// vertex index of column `x`, row `y` in a grid with `cols` columns
pub fn grid_vertex(cols: usize, x: usize, y: usize) -> VertexId {
    VertexId(y * cols + x)
}

/// a `cols` by `rows` lattice with `spacing` meters between neighbors.
pub fn grid_graph(cols: usize, rows: usize, spacing: f64) -> Graph {
    walled(cols, rows, spacing, None)
}

/// a lattice with a wall between the middle columns that is open only on
/// the last row, so shortest paths across the wall detour.
pub fn walled_grid_graph(cols: usize, rows: usize, spacing: f64) -> Graph {
    walled(cols, rows, spacing, Some(cols / 2))
}

fn walled(cols: usize, rows: usize, spacing: f64, wall: Option<usize>) -> Graph {
    let mut points = vec![];
    for y in 0..rows {
        for x in 0..cols {
            points.push((x as f64 * spacing, y as f64 * spacing));
        }
    }
    let mut links = vec![];
    for y in 0..rows {
        for x in 0..cols {
            let v = grid_vertex(cols, x, y).0;
            let blocked = wall == Some(x + 1) && y + 1 < rows;
            if x + 1 < cols && !blocked {
                links.push((v, grid_vertex(cols, x + 1, y).0, spacing, EdgeClass::Street));
            }
            if y + 1 < rows {
                links.push((v, grid_vertex(cols, x, y + 1).0, spacing, EdgeClass::Street));
            }
        }
    }
    build_graph(&points, &links)
}

/// a minimal forward search loop: every edge is walked at the request's walk
/// speed and reluctance. successors exhibiting `forbidden` are never
/// generated. stops when the target is popped (returning its weight), when
/// the frontier empties, or after `max_pops` expansions.
pub fn run_to_target(
    graph: &Graph,
    run: &mut RunState,
    forbidden: Option<&ForbiddenFeature>,
    max_pops: Option<usize>,
) -> Result<Option<f64>, SearchError> {
    let target = run.request().target_vertex();
    let reluctance = run.request().walk_reluctance;
    let speed = run.request().walk_speed;
    let mut n_pops = 0;
    while let Some(state_id) = run.pop()? {
        let state = run.store()[state_id].clone();
        if state.vertex_id == target {
            return Ok(Some(state.weight));
        }
        for edge in graph.out_edges(state.vertex_id) {
            let seconds = edge.distance_meters / speed;
            let mut editor = StateEditor::new(&state, state_id, edge);
            editor
                .increment_weight(reluctance * seconds)
                .increment_time_seconds(seconds)
                .increment_walk_distance(edge.distance_meters);
            let child = editor.make_state()?;
            if forbidden.map(|f| f.exhibited_by(&child)).unwrap_or_default() {
                continue;
            }
            run.insert(child);
        }
        n_pops += 1;
        if max_pops.map(|max| n_pops >= max).unwrap_or_default() {
            return Ok(None);
        }
    }
    Ok(None)
}
