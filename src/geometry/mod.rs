//! Geometry derived from a document tree
//!
//! - `bounds`: own boxes and the recursive tree-wide union
//! - `hull`: gift-wrapping convex hull over shape points
//! - `line`: point-at-fraction along a segment, points on a circle

pub mod bounds;
pub mod hull;
pub mod line;

pub use hull::{Orientation, bounding_polygon, convex_hull, orientation};
pub use line::{Segment, polar_points};
