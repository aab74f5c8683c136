use serde::{Deserialize, Serialize};

use super::Direction;

/// a cell of the grid. `x` is the row counted from the north edge, `y` the
/// column counted from the west edge. points outside the grid are
/// representable so that containment can be tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: i64,
    pub y: i64,
}

impl GridPoint {
    pub fn new(x: i64, y: i64) -> GridPoint {
        GridPoint { x, y }
    }

    pub fn step(&self, direction: Direction) -> GridPoint {
        let (dx, dy) = direction.offset();
        GridPoint::new(self.x + dx, self.y + dy)
    }
}

/// geographic extent of the grid. the latitude span is split into `width`
/// rows and the longitude span into `height` columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boundaries {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
    pub width: usize,
    pub height: usize,
}

impl Boundaries {
    pub fn lat_step(&self) -> f64 {
        (self.lat_max - self.lat_min) / self.width as f64
    }

    pub fn lon_step(&self) -> f64 {
        (self.lon_max - self.lon_min) / self.height as f64
    }

    pub fn create_point_from(&self, lat: f64, lon: f64) -> GridPoint {
        let x = ((self.lat_max - lat) / self.lat_step()).floor() as i64;
        let y = ((lon - self.lon_min) / self.lon_step()).floor() as i64;
        GridPoint::new(x, y)
    }

    /// (lat, lon) of the center of `point`
    pub fn create_lat_lon_from(&self, point: GridPoint) -> (f64, f64) {
        let lat = self.lat_max - (point.x as f64 + 0.5) * self.lat_step();
        let lon = self.lon_min + (point.y as f64 + 0.5) * self.lon_step();
        (lat, lon)
    }

    pub fn contains(&self, point: GridPoint) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    /// dense index of a contained point
    pub fn index_of(&self, point: GridPoint) -> Option<usize> {
        if self.contains(point) {
            Some(point.x as usize * self.height + point.y as usize)
        } else {
            None
        }
    }

    pub fn n_cells(&self) -> usize {
        self.width * self.height
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn bounds() -> Boundaries {
        Boundaries {
            lat_min: 0.0,
            lat_max: 5.0,
            lon_min: 10.0,
            lon_max: 13.0,
            width: 5,
            height: 3,
        }
    }

    #[test]
    fn test_cell_math() {
        let b = bounds();
        assert_eq!(b.create_point_from(0.5, 10.5), GridPoint::new(4, 0));
        assert!(b.contains(GridPoint::new(4, 0)));
        assert!(!b.contains(GridPoint::new(-1, 0)));
        assert!(!b.contains(GridPoint::new(5, 0)));
        assert!(!b.contains(GridPoint::new(0, 3)));
    }

    #[test]
    fn test_cell_center_round_trip() {
        let b = bounds();
        for x in 0..5 {
            for y in 0..3 {
                let point = GridPoint::new(x, y);
                let (lat, lon) = b.create_lat_lon_from(point);
                assert_eq!(b.create_point_from(lat, lon), point);
            }
        }
        assert_eq!(b.create_lat_lon_from(GridPoint::new(4, 0)), (0.5, 10.5));
    }

    #[test]
    fn test_outside_coordinates() {
        let b = bounds();
        assert!(!b.contains(b.create_point_from(6.0, 11.0)));
        assert!(!b.contains(b.create_point_from(2.0, 9.5)));
    }
}
