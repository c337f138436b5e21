//! Intersections between 3D line-strings.
//!
//! Planar intersection points come from a [`PlanarEngine`]; each point is then
//! matched to a segment of both inputs and the elevation interpolated on each
//! side independently. Both elevations are kept so a crossing in plan can be
//! told apart from a true 3D intersection.

use serde::{Deserialize, Serialize};

use crate::crs::{Crs, Projector};
use crate::elevation::{interpolate_z, Interpolation};
use crate::error::{GeoShapeError, Result};
use crate::geometry::{Line3, LineString3, Point, Point3};
use crate::planar::{PlanarEngine, PlanarResult};

/// Which planar crossings are kept in an [`IntersectionResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElevationPolicy {
    /// Keep every planar crossing, flagged with whether the elevations agree.
    #[default]
    ReportAll,
    /// Keep only crossings where both elevations agree within `z_tolerance`.
    RequireMatch,
}

/// Tunable parameters of the intersection engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntersectionOptions {
    /// Planar distance within which a point is considered on a segment.
    pub tolerance: f64,
    /// Maximum elevation difference of a true 3D intersection.
    pub z_tolerance: f64,
    pub policy: ElevationPolicy,
    pub interpolation: Interpolation,
}

impl Default for IntersectionOptions {
    fn default() -> Self {
        Self {
            tolerance: 1e-7,
            z_tolerance: 1e-6,
            policy: ElevationPolicy::ReportAll,
            interpolation: Interpolation::Lenient,
        }
    }
}

impl IntersectionOptions {
    /// Saves the options to a JSON file.
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Loads options from a JSON file. Missing fields take their defaults.
    pub fn load(path: &str) -> std::io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let options: IntersectionOptions = serde_json::from_str(&data)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(options)
    }
}

/// One planar crossing of two line-strings with the elevation of each.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Intersection3 {
    /// Planar location as reported by the planar engine.
    pub point: Point,
    /// Elevation on the first line-string.
    pub z_a: f64,
    /// Elevation on the second line-string.
    pub z_b: f64,
    /// Index of the matching segment on the first line-string.
    pub segment_a: usize,
    /// Index of the matching segment on the second line-string.
    pub segment_b: usize,
    /// True when `z_a` and `z_b` agree within the configured tolerance.
    pub is_3d: bool,
}

impl Intersection3 {
    /// The crossing as a point on the first line-string.
    pub fn point_a(&self) -> Point3 {
        Point3::from_xy(self.point, self.z_a)
    }

    /// The crossing as a point on the second line-string.
    pub fn point_b(&self) -> Point3 {
        Point3::from_xy(self.point, self.z_b)
    }

    /// Absolute elevation difference between the two line-strings.
    pub fn vertical_separation(&self) -> f64 {
        (self.z_a - self.z_b).abs()
    }
}

/// Result of intersecting two line-strings.
#[derive(Debug, Clone, PartialEq)]
pub enum IntersectionResult {
    Empty,
    Single(Intersection3),
    Multiple(Vec<Intersection3>),
}

impl IntersectionResult {
    pub fn from_vec(mut items: Vec<Intersection3>) -> Self {
        match items.len() {
            0 => IntersectionResult::Empty,
            1 => IntersectionResult::Single(items.remove(0)),
            _ => IntersectionResult::Multiple(items),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, IntersectionResult::Empty)
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// All intersections in planar discovery order.
    pub fn as_slice(&self) -> &[Intersection3] {
        match self {
            IntersectionResult::Empty => &[],
            IntersectionResult::Single(item) => std::slice::from_ref(item),
            IntersectionResult::Multiple(items) => items,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Intersection3> {
        self.as_slice().iter()
    }

    /// Intersections whose elevations agree on both line-strings.
    pub fn true_3d(&self) -> impl Iterator<Item = &Intersection3> {
        self.iter().filter(|i| i.is_3d)
    }

    /// Reprojects the planar location of every intersection, keeping both
    /// elevations untouched.
    pub fn transform(
        &self,
        source: &Crs,
        target: &Crs,
        projector: &dyn Projector,
    ) -> Result<IntersectionResult> {
        if self.is_empty() {
            return Ok(IntersectionResult::Empty);
        }
        let planar: Vec<Point> = self.iter().map(|i| i.point).collect();
        let projected = projector.transform_coords(source, target, &planar)?;
        if projected.len() != planar.len() {
            return Err(GeoShapeError::Projection(format!(
                "expected {} coordinates, got {}",
                planar.len(),
                projected.len()
            )));
        }
        Ok(IntersectionResult::from_vec(
            self.iter()
                .zip(projected)
                .map(|(i, point)| Intersection3 { point, ..*i })
                .collect(),
        ))
    }
}

impl<'a> IntoIterator for &'a IntersectionResult {
    type Item = &'a Intersection3;
    type IntoIter = std::slice::Iter<'a, Intersection3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Finds the first segment, in vertex order, containing `p` within
/// `tolerance`. Falls back to the closest segment.
pub(crate) fn locate_segment(line: &LineString3, p: Point, tolerance: f64) -> (usize, Line3) {
    let mut closest = (0, f64::INFINITY);
    for (idx, segment) in line.segments().enumerate() {
        let d = segment.planar().distance_to(p);
        if d <= tolerance {
            return (idx, segment);
        }
        if d < closest.1 {
            closest = (idx, d);
        }
    }
    log::warn!(
        "point ({}, {}) is {} from the nearest segment; using segment {}",
        p.x,
        p.y,
        closest.1,
        closest.0
    );
    let v = line.vertices();
    (closest.0, Line3::new(v[closest.0], v[closest.0 + 1]))
}

/// Intersects two 3D line-strings.
///
/// Both inputs must share a CRS. A collinear overlap reported by the planar
/// engine fails with [`GeoShapeError::UnsupportedIntersectionType`].
pub fn intersect(
    a: &LineString3,
    b: &LineString3,
    engine: &dyn PlanarEngine,
    options: &IntersectionOptions,
) -> Result<IntersectionResult> {
    for line in [a, b] {
        if line.len() < 2 {
            return Err(GeoShapeError::InvalidGeometry(line.len()));
        }
    }
    if a.crs() != b.crs() {
        return Err(GeoShapeError::CrsMismatch(
            a.crs().to_string(),
            b.crs().to_string(),
        ));
    }

    let planar = engine.planar_intersection(&a.planar(), &b.planar());
    log::debug!("planar intersection: {}", planar.kind());
    let points = match planar {
        PlanarResult::Empty => return Ok(IntersectionResult::Empty),
        PlanarResult::Point(p) => vec![p],
        PlanarResult::MultiPoint(points) => points,
        PlanarResult::Overlap(line) => {
            return Err(GeoShapeError::UnsupportedIntersectionType(format!(
                "collinear overlap from ({}, {}) to ({}, {})",
                line.start.x, line.start.y, line.end.x, line.end.y
            )))
        }
    };

    let mut found = Vec::with_capacity(points.len());
    for p in points {
        let (segment_a, seg_a) = locate_segment(a, p, options.tolerance);
        let (segment_b, seg_b) = locate_segment(b, p, options.tolerance);
        let z_a = interpolate_z(&seg_a, p, options.interpolation)?;
        let z_b = interpolate_z(&seg_b, p, options.interpolation)?;
        let is_3d = (z_a - z_b).abs() <= options.z_tolerance;
        log::debug!(
            "crossing at ({}, {}): z_a={} z_b={} 3d={}",
            p.x,
            p.y,
            z_a,
            z_b,
            is_3d
        );
        if options.policy == ElevationPolicy::RequireMatch && !is_3d {
            continue;
        }
        found.push(Intersection3 {
            point: p,
            z_a,
            z_b,
            segment_a,
            segment_b,
            is_3d,
        });
    }
    Ok(IntersectionResult::from_vec(found))
}

/// Returns true when the line-strings intersect under `options`.
pub fn intersects(
    a: &LineString3,
    b: &LineString3,
    engine: &dyn PlanarEngine,
    options: &IntersectionOptions,
) -> Result<bool> {
    Ok(!intersect(a, b, engine, options)?.is_empty())
}
