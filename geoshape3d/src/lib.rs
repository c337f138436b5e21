//! Three dimensional line-strings for trajectory analysis.
//!
//! Planar work (segment intersection, map projection) is delegated to `geo`
//! and PROJ; this crate carries the elevation through those operations.

pub mod crs;
pub mod elevation;
pub mod error;
pub mod geometry;
pub mod geopoint;
pub mod intersection;
pub mod io;
pub mod planar;
pub mod transform;

pub use crs::{Crs, ProjProjector, Projector};
pub use elevation::{interpolate_z, Interpolation};
pub use error::{GeoShapeError, Result};
pub use geometry::{LineString3, Point, Point3};
pub use geopoint::GeoPoint3;
pub use intersection::{
    intersect, ElevationPolicy, Intersection3, IntersectionOptions, IntersectionResult,
};
pub use planar::{GeoPlanarEngine, PlanarEngine, PlanarResult};
pub use transform::transform;
