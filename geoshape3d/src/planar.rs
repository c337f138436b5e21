//! Planar intersection of 2D vertex sequences.
//!
//! The 3D layer only ever talks to a [`PlanarEngine`]; the default engine is
//! built on `geo`'s segment intersection.

use geo::algorithm::line_intersection::{line_intersection, LineIntersection};

use crate::geometry::{distance, Line, Point};

/// Outcome of a planar intersection between two vertex sequences.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanarResult {
    /// The projections do not meet.
    Empty,
    /// Exactly one crossing or touching point.
    Point(Point),
    /// Several distinct points, in discovery order.
    MultiPoint(Vec<Point>),
    /// A collinear overlap of non-zero length.
    Overlap(Line),
}

impl PlanarResult {
    /// Builds a result from a list of distinct points.
    pub fn from_points(mut points: Vec<Point>) -> Self {
        match points.len() {
            0 => PlanarResult::Empty,
            1 => PlanarResult::Point(points.remove(0)),
            _ => PlanarResult::MultiPoint(points),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PlanarResult::Empty)
    }

    /// Short shape name for messages.
    pub fn kind(&self) -> &'static str {
        match self {
            PlanarResult::Empty => "empty",
            PlanarResult::Point(_) => "point",
            PlanarResult::MultiPoint(_) => "multi-point",
            PlanarResult::Overlap(_) => "collinear overlap",
        }
    }
}

/// Engine answering where two planar vertex sequences intersect.
pub trait PlanarEngine {
    fn planar_intersection(&self, a: &[Point], b: &[Point]) -> PlanarResult;
}

/// [`PlanarEngine`] testing every segment pair with `geo`.
#[derive(Debug, Clone, Copy)]
pub struct GeoPlanarEngine {
    /// Points closer than this are reported once.
    pub merge_tolerance: f64,
}

impl Default for GeoPlanarEngine {
    fn default() -> Self {
        Self {
            merge_tolerance: 1e-9,
        }
    }
}

impl GeoPlanarEngine {
    fn push_unique(&self, points: &mut Vec<Point>, p: Point) {
        if !points
            .iter()
            .any(|q| distance(*q, p) <= self.merge_tolerance)
        {
            points.push(p);
        }
    }
}

impl PlanarEngine for GeoPlanarEngine {
    fn planar_intersection(&self, a: &[Point], b: &[Point]) -> PlanarResult {
        let mut points = Vec::new();
        for sa in a.windows(2) {
            let la: geo::Line<f64> = geo::Line::new(sa[0], sa[1]);
            for sb in b.windows(2) {
                let lb: geo::Line<f64> = geo::Line::new(sb[0], sb[1]);
                match line_intersection(la, lb) {
                    None => {}
                    Some(LineIntersection::SinglePoint { intersection, .. }) => {
                        self.push_unique(&mut points, intersection.into());
                    }
                    Some(LineIntersection::Collinear { intersection }) => {
                        let overlap =
                            Line::new(intersection.start.into(), intersection.end.into());
                        if overlap.length() <= self.merge_tolerance {
                            self.push_unique(&mut points, overlap.start);
                        } else {
                            log::debug!("collinear overlap {:?}", overlap);
                            return PlanarResult::Overlap(overlap);
                        }
                    }
                }
            }
        }
        PlanarResult::from_points(points)
    }
}
