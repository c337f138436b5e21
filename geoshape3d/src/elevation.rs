//! Elevation interpolation along 3D segments.

use serde::{Deserialize, Serialize};

use crate::error::{GeoShapeError, Result};
use crate::geometry::{distance, Line3, Point};

/// Behaviour on segments with zero planar length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    /// Use the elevation of the segment start.
    #[default]
    Lenient,
    /// Fail unless the point coincides with the segment start.
    Strict,
}

/// Interpolates the elevation at planar point `p` on `segment`.
///
/// `p` is expected to lie on the planar projection of the segment. The
/// parameter is the planar distance of `p` from the start divided by the
/// planar length, clamped to `[0, 1]`.
pub fn interpolate_z(segment: &Line3, p: Point, mode: Interpolation) -> Result<f64> {
    let start = segment.start.xy();
    let length = segment.planar_length();
    if length == 0.0 {
        if mode == Interpolation::Strict && start != p {
            return Err(GeoShapeError::DegenerateSegment { x: p.x, y: p.y });
        }
        return Ok(segment.start.z);
    }
    let t = (distance(start, p) / length).clamp(0.0, 1.0);
    Ok(segment.start.z + t * (segment.end.z - segment.start.z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point3;

    #[test]
    fn midpoint_elevation() {
        let seg = Line3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 10.0));
        let z = interpolate_z(&seg, Point::new(5.0, 0.0), Interpolation::Lenient).unwrap();
        assert!((z - 5.0).abs() < 1e-12);
    }

    #[test]
    fn endpoints_are_exact() {
        let seg = Line3::new(Point3::new(1.0, 1.0, 3.5), Point3::new(4.0, 5.0, -2.0));
        assert_eq!(
            interpolate_z(&seg, Point::new(1.0, 1.0), Interpolation::Strict).unwrap(),
            3.5
        );
        assert_eq!(
            interpolate_z(&seg, Point::new(4.0, 5.0), Interpolation::Strict).unwrap(),
            -2.0
        );
    }

    #[test]
    fn descending_diagonal() {
        let seg = Line3::new(Point3::new(0.0, 0.0, 100.0), Point3::new(3.0, 4.0, 50.0));
        let z = interpolate_z(&seg, Point::new(0.6, 0.8), Interpolation::Lenient).unwrap();
        assert!((z - 90.0).abs() < 1e-9);
    }

    #[test]
    fn vertical_segment_lenient_uses_start() {
        let seg = Line3::new(Point3::new(2.0, 2.0, 10.0), Point3::new(2.0, 2.0, 30.0));
        let z = interpolate_z(&seg, Point::new(2.0, 2.0 + 1e-12), Interpolation::Lenient).unwrap();
        assert_eq!(z, 10.0);
    }

    #[test]
    fn vertical_segment_strict() {
        let seg = Line3::new(Point3::new(2.0, 2.0, 10.0), Point3::new(2.0, 2.0, 30.0));
        assert_eq!(
            interpolate_z(&seg, Point::new(2.0, 2.0), Interpolation::Strict).unwrap(),
            10.0
        );
        let err = interpolate_z(&seg, Point::new(2.0, 2.5), Interpolation::Strict).unwrap_err();
        assert!(matches!(err, GeoShapeError::DegenerateSegment { .. }));
    }
}
