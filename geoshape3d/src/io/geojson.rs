//! GeoJSON export and import of 3D line-strings and their intersections.

use std::io;

use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, Value};

use super::{read_to_string, write_string};
use crate::crs::Crs;
use crate::geometry::{LineString3, Point3};
use crate::intersection::IntersectionResult;

fn feature(geometry: Geometry, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn write_features(path: &str, features: Vec<Feature>) -> io::Result<()> {
    let collection = FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };
    write_string(path, &GeoJson::from(collection).to_string())
}

/// Writes line-strings as `LineString` features with `[x, y, z]` positions.
/// The CRS definition of each line is stored in its `crs` property.
pub fn write_linestrings_geojson(path: &str, linestrings: &[LineString3]) -> io::Result<()> {
    let features = linestrings
        .iter()
        .map(|ls| {
            let coords = ls.vertices().iter().map(|v| vec![v.x, v.y, v.z]).collect();
            let mut props = JsonObject::new();
            props.insert("crs".into(), ls.crs().definition().into());
            feature(Geometry::new(Value::LineString(coords)), props)
        })
        .collect();
    write_features(path, features)
}

/// Writes intersections as `Point` features positioned at the first
/// line-string's elevation, with both elevations as properties.
pub fn write_intersections_geojson(
    path: &str,
    result: &IntersectionResult,
    crs: &Crs,
) -> io::Result<()> {
    let features = result
        .iter()
        .map(|hit| {
            let mut props = JsonObject::new();
            props.insert("crs".into(), crs.definition().into());
            props.insert("z_a".into(), hit.z_a.into());
            props.insert("z_b".into(), hit.z_b.into());
            props.insert("segment_a".into(), hit.segment_a.into());
            props.insert("segment_b".into(), hit.segment_b.into());
            props.insert("is_3d".into(), hit.is_3d.into());
            let p = hit.point_a();
            feature(Geometry::new(Value::Point(vec![p.x, p.y, p.z])), props)
        })
        .collect();
    write_features(path, features)
}

fn invalid(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}

fn linestring_from_feature(
    index: usize,
    feature: &Feature,
    default_crs: &Crs,
) -> io::Result<Option<LineString3>> {
    let Some(Value::LineString(coords)) = feature.geometry.as_ref().map(|g| &g.value) else {
        log::debug!("feature {}: not a LineString, skipped", index);
        return Ok(None);
    };
    let crs = feature
        .properties
        .as_ref()
        .and_then(|p| p.get("crs"))
        .and_then(|v| v.as_str())
        .map(Crs::from_definition)
        .unwrap_or_else(|| default_crs.clone());
    let vertices = coords
        .iter()
        .map(|pos| match pos.as_slice() {
            [x, y, z, ..] => Ok(Point3::new(*x, *y, *z)),
            _ => Err(invalid(format!(
                "feature {}: position without elevation",
                index
            ))),
        })
        .collect::<io::Result<Vec<_>>>()?;
    let ls = LineString3::new(vertices, crs)
        .map_err(|e| invalid(format!("feature {}: {}", index, e)))?;
    Ok(Some(ls))
}

/// Reads every 3D `LineString` from a GeoJSON document.
///
/// Lines without a `crs` property are tagged with `default_crs`. Features of
/// other geometry types are skipped.
pub fn read_linestrings_geojson(path: &str, default_crs: &Crs) -> io::Result<Vec<LineString3>> {
    let contents = read_to_string(path)?;
    let geojson: GeoJson = contents
        .parse()
        .map_err(|e: geojson::Error| invalid(e.to_string()))?;
    let features = match geojson {
        GeoJson::FeatureCollection(fc) => fc.features,
        GeoJson::Feature(f) => vec![f],
        GeoJson::Geometry(g) => vec![feature(g, JsonObject::new())],
    };
    let mut out = Vec::new();
    for (idx, f) in features.iter().enumerate() {
        if let Some(ls) = linestring_from_feature(idx, f, default_crs)? {
            out.push(ls);
        }
    }
    Ok(out)
}
