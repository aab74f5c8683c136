use geo::{Distance, Haversine, Point};

use crate::model::graph::Vertex;

/// great-circle distance in meters between two lon/lat coordinates.
pub fn haversine_distance_meters(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    Haversine.distance(Point::new(lon1, lat1), Point::new(lon2, lat2))
}

/// great-circle distance in meters between two vertices.
pub fn vertex_distance_meters(a: &Vertex, b: &Vertex) -> f64 {
    Haversine.distance(a.point(), b.point())
}
