//! Convex hull by gift wrapping (Jarvis march)

use crate::errors::AttrError;
use crate::log::debug;
use crate::tree::Node;
use crate::types::Point;

/// Turn direction of the path p1 -> p2 -> p3
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Colinear,
    Clockwise,
    CounterClockwise,
}

/// Orientation from the sign of the cross product of (p2 - p1) and (p3 - p2).
///
/// Positive is clockwise, negative counter-clockwise, zero colinear.
pub fn orientation(p1: Point, p2: Point, p3: Point) -> Orientation {
    let value = (p3 - p2).perp_dot(p2 - p1);
    if value == 0.0 {
        Orientation::Colinear
    } else if value > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Convex hull of a point set, in walk order starting at the leftmost point.
///
/// Fewer than three distinct usable points give an empty hull. Non-finite
/// points are ignored. Copies of the current point are never taken as the
/// next hull point; colinear points are left to the orientation test.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let points: Vec<Point> = points.iter().copied().filter(|p| p.is_finite()).collect();
    let distinct = points
        .iter()
        .enumerate()
        .filter(|&(i, p)| !points[..i].contains(p))
        .count();
    if distinct < 3 {
        debug!(distinct, "convex hull needs at least three distinct points");
        return Vec::new();
    }
    let n = points.len();

    let left = points
        .iter()
        .enumerate()
        .fold(0, |best, (i, p)| if p.x < points[best].x { i } else { best });
    let start = points[left];

    let mut hull = Vec::new();
    let mut current = left;
    loop {
        hull.push(points[current]);

        let here = points[current];
        let Some(mut next) = (1..n)
            .map(|k| (current + k) % n)
            .find(|&i| points[i] != here)
        else {
            break;
        };

        // Take the candidate with nothing strictly counter-clockwise of it
        for (i, &p) in points.iter().enumerate() {
            if p != here && orientation(here, points[next], p) == Orientation::CounterClockwise {
                next = i;
            }
        }
        current = next;

        // Duplicates of the start point end the walk just like the start itself
        if points[current] == start || hull.len() >= n {
            break;
        }
    }

    debug!(input = n, hull = hull.len(), "convex hull");
    hull
}

/// Hull around the representative points of every given shape
pub fn bounding_polygon<'a>(
    shapes: impl IntoIterator<Item = &'a Node>,
) -> Result<Vec<Point>, AttrError> {
    let mut points = Vec::new();
    for shape in shapes {
        points.extend(shape.points()?);
    }
    Ok(convex_hull(&points))
}
