//! Points along lines and circles

use std::f64::consts::TAU;

use crate::errors::AttrError;
use crate::tree::Node;
use crate::types::Point;

/// A straight segment from `start` to `end`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Segment { start, end }
    }

    pub fn length(&self) -> f64 {
        (self.end - self.start).length()
    }

    /// Rise over run. Infinite or NaN for vertical segments.
    pub fn slope(&self) -> f64 {
        (self.end.y - self.start.y) / (self.end.x - self.start.x)
    }

    /// The point `percent` (0..=1) of the way from `start` to `end`.
    ///
    /// Solves `d = |dx| * sqrt(1 + m^2)` for the horizontal offset and keeps
    /// the solution within the segment's x range. Vertical
    /// segments are handled separately so the slope is never divided by zero.
    pub fn along(&self, percent: f64) -> Point {
        let distance = percent * self.length();
        let (x1, y1) = (self.start.x, self.start.y);
        let (x2, y2) = (self.end.x, self.end.y);

        if x1 != x2 {
            let slope = self.slope();
            let dx = distance / (1.0 + slope * slope).sqrt();
            // Of x1 + dx and x1 - dx, the one heading toward x2
            let x = if x2 > x1 { x1 + dx } else { x1 - dx };
            Point::new(x, slope * (x - x1) + y1)
        } else if y1 > y2 {
            Point::new(x1, y1 - distance)
        } else {
            Point::new(x1, y1 + distance)
        }
    }
}

impl Node {
    /// The segment described by `x1`, `y1`, `x2`, `y2`
    pub fn segment(&self) -> Result<Segment, AttrError> {
        Ok(Segment::new(
            Point::new(self.attrs.numeric("x1")?, self.attrs.numeric("y1")?),
            Point::new(self.attrs.numeric("x2")?, self.attrs.numeric("y2")?),
        ))
    }
}

/// `n` points evenly spaced on a circle, starting at angle zero
pub fn polar_points(n: usize, cx: f64, cy: f64, radius: f64) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let angle = TAU * i as f64 / n as f64;
            Point::new(cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect()
}
