//! Coordinate reference system utilities built on top of the `proj` crate.

use std::fmt;
use std::str::FromStr;

use proj::Proj;

use crate::error::{GeoShapeError, Result};
use crate::geometry::Point;

/// Representation of a coordinate reference system.
///
/// A CRS is stored internally as a definition string which can be an EPSG
/// identifier (`"EPSG:4326"`), a Proj4 definition or a WKT definition.  When
/// created from an EPSG code the numeric value is retained so that callers can
/// inspect it if necessary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Crs {
    definition: String,
    epsg: Option<u32>,
}

impl Crs {
    /// Creates a new CRS from the given EPSG code.
    pub fn from_epsg(code: u32) -> Self {
        Self {
            definition: format!("EPSG:{}", code),
            epsg: Some(code),
        }
    }

    /// Creates a CRS from a Proj4 definition string.
    pub fn from_proj4(definition: &str) -> Self {
        Self {
            definition: definition.to_string(),
            epsg: None,
        }
    }

    /// Creates a CRS from a WKT definition string.
    pub fn from_wkt(definition: &str) -> Self {
        Self {
            definition: definition.to_string(),
            epsg: None,
        }
    }

    /// Parses `EPSG:<code>` (any case) into an EPSG CRS; strings starting
    /// with `+` are Proj4 definitions and anything else is kept as WKT.
    pub fn from_definition(definition: &str) -> Self {
        let trimmed = definition.trim();
        if let Some((authority, code)) = trimmed.split_once(':') {
            if authority.eq_ignore_ascii_case("epsg") {
                if let Ok(code) = code.trim().parse::<u32>() {
                    return Self::from_epsg(code);
                }
            }
        }
        if trimmed.starts_with('+') {
            Self::from_proj4(trimmed)
        } else {
            Self::from_wkt(trimmed)
        }
    }

    /// Returns the EPSG code for this CRS, if available.
    pub fn epsg(&self) -> Option<u32> {
        self.epsg
    }

    /// Returns the underlying definition string.
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// WGS84 geographic longitude/latitude (EPSG:4326).
    pub fn wgs84() -> Self {
        Self::from_epsg(4326)
    }

    /// Web Mercator (EPSG:3857).
    pub fn web_mercator() -> Self {
        Self::from_epsg(3857)
    }

    /// US National Atlas Equal Area (EPSG:2163), the default metric CRS for
    /// trajectories given in geographic coordinates.
    pub fn us_national_atlas() -> Self {
        Self::from_epsg(2163)
    }

    /// Transforms an `(x, y)` coordinate from this CRS to the target CRS.
    pub fn transform_point(&self, target: &Crs, x: f64, y: f64) -> Result<(f64, f64)> {
        let out = ProjProjector.transform_coords(self, target, &[Point::new(x, y)])?;
        Ok((out[0].x, out[0].y))
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.definition)
    }
}

impl FromStr for Crs {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_definition(s))
    }
}

/// Transforms planar coordinates between coordinate reference systems.
pub trait Projector {
    /// Transforms every coordinate from `source` to `target`, preserving order.
    fn transform_coords(&self, source: &Crs, target: &Crs, coords: &[Point]) -> Result<Vec<Point>>;
}

/// [`Projector`] backed by PROJ.
///
/// Geographic CRSs are handled in longitude/latitude order. A PROJ context is
/// created for every call and never shared between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjProjector;

impl Projector for ProjProjector {
    fn transform_coords(&self, source: &Crs, target: &Crs, coords: &[Point]) -> Result<Vec<Point>> {
        let proj = Proj::new_known_crs(source.definition(), target.definition(), None).map_err(
            |e| GeoShapeError::UnsupportedCrs {
                source_crs: source.to_string(),
                target_crs: target.to_string(),
                reason: e.to_string(),
            },
        )?;
        coords
            .iter()
            .map(|p| {
                proj.convert((p.x, p.y))
                    .map(|(x, y)| Point::new(x, y))
                    .map_err(|e| GeoShapeError::Projection(format!("({}, {}): {}", p.x, p.y, e)))
            })
            .collect()
    }
}
