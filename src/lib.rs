//! An in-memory SVG document tree with geometry.
//!
//! Build a tree of shapes, let the crate work out how big it is, and combine
//! finished documents into larger ones:
//!
//! ```
//! use svgtree::{Document, Margins, Node, merge};
//!
//! let mut doc = Document::new();
//! doc.push(Node::circle(-100.0, -100.0, 100.0))
//!     .push(Node::circle(100.0, 100.0, 100.0));
//! doc.autoscale(Margins::NONE)?;
//! assert_eq!(doc.get("width"), Some("400.0"));
//! assert_eq!(doc.get("viewBox"), Some("-200.0 -200.0 400.0 400.0"));
//!
//! let mut other = Document::new();
//! other.push(Node::rect(0.0, 0.0, 80.0, 80.0));
//! let side_by_side = merge(doc, other)?;
//! assert_eq!(side_by_side.get("width"), Some("520.0"));
//! println!("{side_by_side}");
//! # Ok::<(), svgtree::AttrError>(())
//! ```
//!
//! Geometry is derived only from declared numeric attributes. Nothing is
//! rasterized and text is never measured.

pub mod attrs;
pub mod compose;
pub mod defaults;
pub mod document;
pub mod errors;
pub mod geometry;
pub mod log;
pub mod path;
pub mod shapes;
pub mod style;
pub mod svg;
pub mod tree;
pub mod types;

pub use attrs::{Attributes, format_num};
pub use compose::{GridOptions, animate, merge, merge_grid, merge_with};
pub use document::Document;
pub use errors::{AttrError, ComposeError};
pub use geometry::{Orientation, Segment, bounding_polygon, convex_hull, orientation, polar_points};
pub use path::{PathBuilder, path_vertices};
pub use shapes::{Circle, Element, Geometry, Group, Line, Path, Polygon, Rect, Svg, Text};
pub use style::{Keyframes, Stylesheet};
pub use tree::Node;
pub use types::{BBox, Margins, Point, ViewBox};
