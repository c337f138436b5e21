//! Basic geometry primitives for 3D line-string operations.

mod line;
mod line3;
mod linestring3;
mod point;
mod point3;

pub use line::Line;
pub use line3::Line3;
pub use linestring3::LineString3;
pub use point::Point;
pub use point3::Point3;

/// Calculates the Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Calculates the Euclidean distance between two 3D points.
pub fn distance3(a: Point3, b: Point3) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2) + (b.z - a.z).powi(2)).sqrt()
}
