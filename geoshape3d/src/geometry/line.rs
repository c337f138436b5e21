//! Basic 2D line types used throughout the crate.

use super::{distance, Point};

/// Representation of a 2D line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    /// Creates a new line segment.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Returns the length of the line segment.
    pub fn length(&self) -> f64 {
        distance(self.start, self.end)
    }

    /// Returns the midpoint of the line segment.
    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    /// Returns the point of the segment closest to `p`.
    pub fn closest_point(&self, p: Point) -> Point {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let len2 = dx * dx + dy * dy;
        if len2 == 0.0 {
            return self.start;
        }
        let t = (((p.x - self.start.x) * dx + (p.y - self.start.y) * dy) / len2).clamp(0.0, 1.0);
        Point::new(self.start.x + t * dx, self.start.y + t * dy)
    }

    /// Shortest distance from `p` to the segment.
    pub fn distance_to(&self, p: Point) -> f64 {
        distance(self.closest_point(p), p)
    }

    /// Returns true when `p` lies on the segment within `tolerance`.
    pub fn contains(&self, p: Point, tolerance: f64) -> bool {
        self.distance_to(p) <= tolerance
    }
}

impl From<Line> for geo_types::Line<f64> {
    fn from(l: Line) -> Self {
        geo_types::Line::new(l.start, l.end)
    }
}
