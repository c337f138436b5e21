//! Basic 3D point type used throughout the crate.

use super::Point;

/// Representation of a 3D point. `z` is an elevation independent of the
/// planar CRS the `x`/`y` pair is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Planar projection of this point.
    pub fn xy(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Combines a planar point with an elevation.
    pub fn from_xy(p: Point, z: f64) -> Self {
        Self::new(p.x, p.y, z)
    }
}

impl From<(f64, f64, f64)> for Point3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}
