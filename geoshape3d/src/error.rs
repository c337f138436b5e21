//! Error type shared by every geometry and projection operation.

use thiserror::Error;

/// Failure of a line-string operation.
#[derive(Error, Debug)]
pub enum GeoShapeError {
    /// A line-string was built from fewer than two vertices.
    #[error("invalid geometry: line-string needs at least 2 vertices, got {0}")]
    InvalidGeometry(usize),

    /// The planar engine produced a shape that cannot be lifted to 3D.
    #[error("unsupported intersection type: {0}")]
    UnsupportedIntersectionType(String),

    /// The projection engine does not know one of the CRS definitions.
    #[error("unsupported CRS transformation from {source_crs} to {target_crs}: {reason}")]
    UnsupportedCrs {
        source_crs: String,
        target_crs: String,
        reason: String,
    },

    /// Strict interpolation on a segment with zero planar length.
    #[error("degenerate segment at ({x}, {y}): zero planar length")]
    DegenerateSegment { x: f64, y: f64 },

    /// Two line-strings in different CRSs were compared.
    #[error("CRS mismatch: {0} vs {1}")]
    CrsMismatch(String, String),

    /// The projection engine failed on an individual coordinate.
    #[error("projection failed: {0}")]
    Projection(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeoShapeError>;

impl From<GeoShapeError> for std::io::Error {
    fn from(err: GeoShapeError) -> Self {
        match err {
            GeoShapeError::Io(e) => e,
            other => std::io::Error::new(std::io::ErrorKind::InvalidData, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_pass_through() {
        let err = GeoShapeError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let io: std::io::Error = err.into();
        assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn geometry_errors_become_invalid_data() {
        let io: std::io::Error = GeoShapeError::InvalidGeometry(1).into();
        assert_eq!(io.kind(), std::io::ErrorKind::InvalidData);
        assert!(io.to_string().contains("at least 2 vertices"));
    }
}
