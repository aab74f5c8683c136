use wayfarer_core::{
    model::{
        graph::{Edge, EdgeClass, Graph, VertexId},
        request::RoutingRequest,
    },
    util::geo_utils,
};

/// converts a distance lower bound into a weight lower bound for one
/// request.
///
/// without transit every meter is covered on the street at the fastest
/// allowed street speed and costs `walk_reluctance` per second. with transit
/// the traveller still has to reach the target from its nearest transit stop
/// on the street; the rest may be covered at the transit speed bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceWeightBound {
    pub walk_reluctance: f64,
    pub street_speed: f64,
    pub transit_speed: f64,
    pub transit_allowed: bool,
    /// straight-line meters from the target to its nearest transit stop
    pub required_walk_meters: f64,
}

impl DistanceWeightBound {
    pub fn new(request: &RoutingRequest, graph: &Graph, target: VertexId) -> DistanceWeightBound {
        let transit_allowed = request.is_transit_allowed();
        let required_walk_meters = if transit_allowed {
            nearest_transit_stop_meters(graph, target)
        } else {
            0.0
        };
        DistanceWeightBound {
            walk_reluctance: request.walk_reluctance,
            street_speed: request.street_speed_upper_bound(),
            transit_speed: request.transit_speed_upper_bound,
            transit_allowed,
            required_walk_meters,
        }
    }

    pub fn weight_lower_bound(&self, distance_meters: f64) -> f64 {
        if !self.transit_allowed {
            return self.walk_reluctance * distance_meters / self.street_speed;
        }
        let walk = distance_meters.min(self.required_walk_meters);
        self.walk_reluctance * walk / self.street_speed
            + (distance_meters - walk) / self.transit_speed
    }

    /// lower bound on the weight of traversing `edge`, or None when the edge
    /// cannot be used by the request.
    pub fn edge_lower_bound(&self, edge: &Edge) -> Option<f64> {
        match edge.edge_class {
            EdgeClass::Transit if !self.transit_allowed => None,
            EdgeClass::Transit => Some(edge.distance_meters / self.transit_speed),
            EdgeClass::Free => Some(0.0),
            _ => Some(self.walk_reluctance * edge.distance_meters / self.street_speed),
        }
    }
}

/// straight-line meters from `target` to the closest transit stop vertex,
/// infinite when the graph has none.
fn nearest_transit_stop_meters(graph: &Graph, target: VertexId) -> f64 {
    let Some(target) = graph.get_vertex(target) else {
        return f64::INFINITY;
    };
    graph
        .vertices()
        .iter()
        .filter(|v| v.is_transit_stop())
        .map(|v| geo_utils::vertex_distance_meters(target, v))
        .fold(f64::INFINITY, f64::min)
}
