//! Single 3D positions tagged with a CRS, e.g. a waypoint or an obstacle top.

use crate::crs::{Crs, Projector};
use crate::elevation::interpolate_z;
use crate::error::{GeoShapeError, Result};
use crate::geometry::{LineString3, Point3};
use crate::intersection::IntersectionOptions;

/// A 3D point with the CRS of its planar coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPoint3 {
    point: Point3,
    crs: Crs,
}

/// Where a [`GeoPoint3`] meets a line-string in plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointOnLine {
    /// Index of the first segment whose projection contains the point.
    pub segment: usize,
    /// Elevation of the line-string below or above the point.
    pub z_line: f64,
    /// True when the point elevation matches the line within tolerance.
    pub is_3d: bool,
}

impl GeoPoint3 {
    pub fn new(point: Point3, crs: Crs) -> Self {
        Self { point, crs }
    }

    /// Projects a geographic `(lon, lat, alt)` position from `from` into `to`.
    pub fn from_geographic(
        coord: (f64, f64, f64),
        from: &Crs,
        to: &Crs,
        projector: &dyn Projector,
    ) -> Result<Self> {
        Self::new(coord.into(), from.clone()).transform(to, projector)
    }

    pub fn point(&self) -> Point3 {
        self.point
    }

    pub fn crs(&self) -> &Crs {
        &self.crs
    }

    /// Returns where the point lies on `line` in plan, if anywhere.
    pub fn intersection(
        &self,
        line: &LineString3,
        options: &IntersectionOptions,
    ) -> Result<Option<PointOnLine>> {
        if &self.crs != line.crs() {
            return Err(GeoShapeError::CrsMismatch(
                self.crs.to_string(),
                line.crs().to_string(),
            ));
        }
        let p = self.point.xy();
        let Some((segment, seg)) = line
            .segments()
            .enumerate()
            .find(|(_, s)| s.planar().contains(p, options.tolerance))
        else {
            return Ok(None);
        };
        let z_line = interpolate_z(&seg, p, options.interpolation)?;
        Ok(Some(PointOnLine {
            segment,
            z_line,
            is_3d: (z_line - self.point.z).abs() <= options.z_tolerance,
        }))
    }

    /// True only when the point lies on `line` in all three dimensions.
    pub fn intersects(&self, line: &LineString3, options: &IntersectionOptions) -> Result<bool> {
        Ok(self
            .intersection(line, options)?
            .is_some_and(|hit| hit.is_3d))
    }

    /// Reprojects the planar coordinates, keeping the elevation.
    pub fn transform(&self, target: &Crs, projector: &dyn Projector) -> Result<GeoPoint3> {
        let out = projector.transform_coords(&self.crs, target, &[self.point.xy()])?;
        let Some(p) = out.first() else {
            return Err(GeoShapeError::Projection("no coordinate returned".into()));
        };
        Ok(Self::new(Point3::from_xy(*p, self.point.z), target.clone()))
    }
}
