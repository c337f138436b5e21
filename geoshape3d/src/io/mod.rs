//! File input and output helpers for line-string data.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};

use crate::crs::Crs;
use crate::geometry::{LineString3, Point3};

pub mod geojson;

/// Reads a file to string.
pub fn read_to_string(path: &str) -> io::Result<String> {
    let mut buffer = String::new();
    File::open(path)?.read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Writes a string to a file, replacing any existing contents.
pub fn write_string(path: &str, contents: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())
}

/// Reads all lines of a file.
pub fn read_lines(path: &str) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    BufReader::new(file).lines().collect()
}

fn parse_field(value: &str, line_no: usize) -> io::Result<f64> {
    value.trim().parse::<f64>().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("line {}: {}", line_no, e),
        )
    })
}

fn finish_linestring(
    current: &mut Vec<Point3>,
    crs: &Crs,
    out: &mut Vec<LineString3>,
    line_no: usize,
) -> io::Result<()> {
    if current.is_empty() {
        return Ok(());
    }
    let vertices = std::mem::take(current);
    let ls = LineString3::new(vertices, crs.clone()).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("line {}: {}", line_no, e),
        )
    })?;
    out.push(ls);
    Ok(())
}

/// Reads line-strings from a CSV file of `x,y,z` rows.
///
/// Blank lines separate consecutive line-strings and lines starting with `#`
/// are ignored. Every line-string is tagged with `crs`.
pub fn read_linestrings_csv(path: &str, crs: &Crs) -> io::Result<Vec<LineString3>> {
    let lines = read_lines(path)?;
    let mut linestrings = Vec::new();
    let mut current = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            continue;
        }
        if trimmed.is_empty() {
            finish_linestring(&mut current, crs, &mut linestrings, idx + 1)?;
            continue;
        }
        let parts: Vec<&str> = trimmed.split(',').collect();
        if parts.len() != 3 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: expected x,y,z", idx + 1),
            ));
        }
        let x = parse_field(parts[0], idx + 1)?;
        let y = parse_field(parts[1], idx + 1)?;
        let z = parse_field(parts[2], idx + 1)?;
        current.push(Point3::new(x, y, z));
    }
    finish_linestring(&mut current, crs, &mut linestrings, lines.len())?;
    Ok(linestrings)
}

/// Writes line-strings as `x,y,z` rows separated by blank lines.
pub fn write_linestrings_csv(path: &str, linestrings: &[LineString3]) -> io::Result<()> {
    let mut file = File::create(path)?;
    for (i, ls) in linestrings.iter().enumerate() {
        for v in ls.vertices() {
            writeln!(file, "{},{},{}", v.x, v.y, v.z)?;
        }
        if i + 1 < linestrings.len() {
            writeln!(file)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_round_trip() {
        let crs = Crs::from_epsg(2163);
        let lines = vec![
            LineString3::from_tuples(&[(0.0, 0.0, 0.0), (10.0, 0.0, 10.5)], crs.clone()).unwrap(),
            LineString3::from_tuples(
                &[(5.0, -5.0, 0.0), (5.0, 5.0, 20.0), (6.0, 6.0, -1.25)],
                crs.clone(),
            )
            .unwrap(),
        ];
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        write_linestrings_csv(path, &lines).unwrap();
        let read = read_linestrings_csv(path, &crs).unwrap();
        assert_eq!(read, lines);
    }

    #[test]
    fn csv_skips_comments_and_extra_blank_lines() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        write_string(path, "# flight 1\n0,0,0\n1,1,1\n\n\n# flight 2\n2,2,2\n3,3,3\n").unwrap();
        let read = read_linestrings_csv(path, &Crs::wgs84()).unwrap();
        assert_eq!(read.len(), 2);
        assert_eq!(read[1].vertices()[0], Point3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn csv_rejects_single_vertex() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        write_string(path, "0,0,0\n\n1,1,1\n2,2,2\n").unwrap();
        let err = read_linestrings_csv(path, &Crs::wgs84()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn csv_rejects_missing_elevation() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        write_string(path, "0,0\n1,1\n").unwrap();
        let err = read_linestrings_csv(path, &Crs::wgs84()).unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }
}
