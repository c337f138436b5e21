//! Three dimensional line-strings tagged with a coordinate reference system.

use super::{distance, Line3, Point, Point3};
use crate::crs::{Crs, ProjProjector, Projector};
use crate::error::{GeoShapeError, Result};
use crate::intersection::{self, IntersectionOptions, IntersectionResult};
use crate::planar::GeoPlanarEngine;
use crate::transform;

/// Ordered sequence of at least two 3D vertices in a given CRS.
///
/// Instances are immutable: operations that change the geometry, such as
/// [`LineString3::transform`], return a new line-string.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString3 {
    vertices: Vec<Point3>,
    crs: Crs,
}

impl LineString3 {
    /// Creates a line-string from its vertices.
    ///
    /// Fails with [`GeoShapeError::InvalidGeometry`] when fewer than two
    /// vertices are supplied.
    pub fn new(vertices: Vec<Point3>, crs: Crs) -> Result<Self> {
        if vertices.len() < 2 {
            return Err(GeoShapeError::InvalidGeometry(vertices.len()));
        }
        Ok(Self { vertices, crs })
    }

    /// Creates a line-string from `(x, y, z)` tuples.
    pub fn from_tuples(coords: &[(f64, f64, f64)], crs: Crs) -> Result<Self> {
        Self::new(coords.iter().copied().map(Point3::from).collect(), crs)
    }

    /// Creates a line-string from geographic `(lon, lat, alt)` coordinates,
    /// projecting the planar part from `from` into `to` on construction.
    pub fn from_geographic(
        coords: &[(f64, f64, f64)],
        from: Crs,
        to: &Crs,
        projector: &dyn Projector,
    ) -> Result<Self> {
        let geographic = Self::from_tuples(coords, from)?;
        transform::transform(&geographic, to, projector)
    }

    /// Read-only access to the vertices.
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// CRS of the planar coordinates.
    pub fn crs(&self) -> &Crs {
        &self.crs
    }

    /// Number of vertices, always at least two.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Planar projection of every vertex, dropping z.
    pub fn planar(&self) -> Vec<Point> {
        self.vertices.iter().map(Point3::xy).collect()
    }

    /// Elevations of every vertex in order.
    pub fn elevations(&self) -> Vec<f64> {
        self.vertices.iter().map(|v| v.z).collect()
    }

    /// Consecutive vertex pairs.
    pub fn segments(&self) -> impl Iterator<Item = Line3> + '_ {
        self.vertices
            .windows(2)
            .map(|pair| Line3::new(pair[0], pair[1]))
    }

    /// Returns the total 3D length of all segments.
    pub fn length(&self) -> f64 {
        self.segments().map(|s| s.length()).sum()
    }

    /// Returns the total length of the planar projection.
    pub fn planar_length(&self) -> f64 {
        self.vertices
            .windows(2)
            .map(|pair| distance(pair[0].xy(), pair[1].xy()))
            .sum()
    }

    /// Planar projection as a `geo_types` line-string.
    pub fn to_geo(&self) -> geo_types::LineString<f64> {
        self.vertices
            .iter()
            .map(|v| geo_types::Coord { x: v.x, y: v.y })
            .collect()
    }

    /// Intersects this line-string with `other` using the default planar
    /// engine.
    pub fn intersection(
        &self,
        other: &LineString3,
        options: &IntersectionOptions,
    ) -> Result<IntersectionResult> {
        intersection::intersect(self, other, &GeoPlanarEngine::default(), options)
    }

    /// Returns true when the line-strings intersect under `options`.
    pub fn intersects(&self, other: &LineString3, options: &IntersectionOptions) -> Result<bool> {
        Ok(!self.intersection(other, options)?.is_empty())
    }

    /// Transforms the planar coordinates into `target` using PROJ, keeping z.
    pub fn transform(&self, target: &Crs) -> Result<LineString3> {
        transform::transform(self, target, &ProjProjector)
    }

    /// Transforms the planar coordinates with a caller supplied projector.
    pub fn transform_with(&self, target: &Crs, projector: &dyn Projector) -> Result<LineString3> {
        transform::transform(self, target, projector)
    }
}
