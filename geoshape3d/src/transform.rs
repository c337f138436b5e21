//! Reprojection of 3D line-strings between coordinate reference systems.

use crate::crs::{Crs, Projector};
use crate::error::{GeoShapeError, Result};
use crate::geometry::{LineString3, Point3};

/// Transforms the planar coordinates of `line` into `target`.
///
/// Elevations are carried over bit for bit; only `x` and `y` pass through the
/// projector. The input is left untouched and a new line-string tagged with
/// `target` is returned.
pub fn transform(line: &LineString3, target: &Crs, projector: &dyn Projector) -> Result<LineString3> {
    let planar = line.planar();
    log::debug!(
        "transforming {} vertices from {} to {}",
        planar.len(),
        line.crs(),
        target
    );
    let projected = projector.transform_coords(line.crs(), target, &planar)?;
    if projected.len() != planar.len() {
        return Err(GeoShapeError::Projection(format!(
            "expected {} coordinates, got {}",
            planar.len(),
            projected.len()
        )));
    }
    let vertices = projected
        .into_iter()
        .zip(line.vertices())
        .map(|(p, v)| Point3::from_xy(p, v.z))
        .collect();
    LineString3::new(vertices, target.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    /// Shifts every coordinate by a fixed offset; rejects anything but the
    /// two known CRSs.
    struct OffsetProjector;

    impl Projector for OffsetProjector {
        fn transform_coords(
            &self,
            source: &Crs,
            target: &Crs,
            coords: &[Point],
        ) -> Result<Vec<Point>> {
            let sign = match (source.epsg(), target.epsg()) {
                (Some(1), Some(2)) => 1.0,
                (Some(2), Some(1)) => -1.0,
                (Some(a), Some(b)) if a == b && a <= 2 => 0.0,
                _ => {
                    return Err(GeoShapeError::UnsupportedCrs {
                        source_crs: source.to_string(),
                        target_crs: target.to_string(),
                        reason: "unknown".into(),
                    })
                }
            };
            Ok(coords
                .iter()
                .map(|p| Point::new(p.x + sign * 100.0, p.y + sign * 0.5))
                .collect())
        }
    }

    struct DroppingProjector;

    impl Projector for DroppingProjector {
        fn transform_coords(&self, _: &Crs, _: &Crs, coords: &[Point]) -> Result<Vec<Point>> {
            Ok(coords[1..].to_vec())
        }
    }

    fn line() -> LineString3 {
        LineString3::from_tuples(
            &[(0.0, 0.0, 0.1), (1.0, 2.0, 1e-300), (3.0, 4.0, -7.25)],
            Crs::from_epsg(1),
        )
        .unwrap()
    }

    #[test]
    fn keeps_elevation_and_retags_crs() {
        let src = line();
        let out = transform(&src, &Crs::from_epsg(2), &OffsetProjector).unwrap();
        assert_eq!(out.crs(), &Crs::from_epsg(2));
        assert_eq!(out.elevations(), src.elevations());
        assert_eq!(out.vertices()[1], Point3::new(101.0, 2.5, 1e-300));
        assert_eq!(src.crs(), &Crs::from_epsg(1));
    }

    #[test]
    fn round_trip() {
        let src = line();
        let there = transform(&src, &Crs::from_epsg(2), &OffsetProjector).unwrap();
        let back = transform(&there, &Crs::from_epsg(1), &OffsetProjector).unwrap();
        for (a, b) in src.vertices().iter().zip(back.vertices()) {
            assert!((a.x - b.x).abs() < 1e-9);
            assert!((a.y - b.y).abs() < 1e-9);
            assert_eq!(a.z.to_bits(), b.z.to_bits());
        }
    }

    #[test]
    fn unsupported_crs_propagates() {
        let err = transform(&line(), &Crs::from_epsg(99), &OffsetProjector).unwrap_err();
        assert!(matches!(err, GeoShapeError::UnsupportedCrs { .. }));
    }

    #[test]
    fn short_projector_output_is_rejected() {
        let err = transform(&line(), &Crs::from_epsg(2), &DroppingProjector).unwrap_err();
        assert!(matches!(err, GeoShapeError::Projection(_)));
    }
}
