//! Element kinds and their geometry.
//!
//! The set of elements is closed. Each kind knows how to:
//! - Calculate its own bounding box from its attributes (children are not
//!   considered here, see [`Node::bbox`](crate::Node::bbox))
//! - Supply the points a convex hull should wrap
//! - Derive its position and size

use enum_dispatch::enum_dispatch;

use crate::attrs::Attributes;
use crate::errors::AttrError;
use crate::path::path_vertices;
use crate::style::Stylesheet;
use crate::types::{BBox, Point, nan_max, nan_min};

/// Per-element geometry. Every method reads the element's attribute map.
#[enum_dispatch]
pub trait Geometry {
    /// Tag written into the markup
    fn tag(&self) -> &'static str;

    /// Box covering this element alone. Elements without geometry of their
    /// own return the sentinel.
    fn own_box(&self, _attrs: &Attributes) -> Result<BBox, AttrError> {
        Ok(BBox::SENTINEL)
    }

    /// Points used when wrapping this element in a hull.
    ///
    /// Defaults to the four corners of [`Geometry::own_box`]; nothing when the
    /// element has no geometry.
    fn points(&self, attrs: &Attributes) -> Result<Vec<Point>, AttrError> {
        let bbox = self.own_box(attrs)?;
        if bbox.is_sentinel() {
            Ok(Vec::new())
        } else {
            Ok(bbox.corners().to_vec())
        }
    }

    fn x(&self, attrs: &Attributes) -> Result<f64, AttrError> {
        attrs.numeric("x")
    }

    fn y(&self, attrs: &Attributes) -> Result<f64, AttrError> {
        attrs.numeric("y")
    }

    fn width(&self, attrs: &Attributes) -> Result<f64, AttrError> {
        attrs.numeric("width")
    }

    fn height(&self, attrs: &Attributes) -> Result<f64, AttrError> {
        attrs.numeric("height")
    }
}

// ============================================================================
// Element Types
// ============================================================================

/// `<svg>`: a document root or a document nested inside another
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Svg;

impl Geometry for Svg {
    fn tag(&self) -> &'static str {
        "svg"
    }
}

/// `<g>`: a plain container
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Group;

impl Geometry for Group {
    fn tag(&self) -> &'static str {
        "g"
    }
}

/// `<rect>`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect;

impl Geometry for Rect {
    fn tag(&self) -> &'static str {
        "rect"
    }

    fn own_box(&self, attrs: &Attributes) -> Result<BBox, AttrError> {
        let x = self.x(attrs)?;
        let y = self.y(attrs)?;
        Ok(BBox::new(
            x,
            x + self.width(attrs)?,
            y,
            y + self.height(attrs)?,
        ))
    }
}

/// `<circle>`: positioned by its center
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Circle;

impl Circle {
    pub fn radius(&self, attrs: &Attributes) -> Result<f64, AttrError> {
        attrs.numeric("r")
    }
}

impl Geometry for Circle {
    fn tag(&self) -> &'static str {
        "circle"
    }

    fn own_box(&self, attrs: &Attributes) -> Result<BBox, AttrError> {
        let cx = self.x(attrs)?;
        let cy = self.y(attrs)?;
        let r = self.radius(attrs)?;
        Ok(BBox::new(cx - r, cx + r, cy - r, cy + r))
    }

    fn x(&self, attrs: &Attributes) -> Result<f64, AttrError> {
        attrs.numeric("cx")
    }

    fn y(&self, attrs: &Attributes) -> Result<f64, AttrError> {
        attrs.numeric("cy")
    }

    fn width(&self, attrs: &Attributes) -> Result<f64, AttrError> {
        Ok(self.radius(attrs)? * 2.0)
    }

    fn height(&self, attrs: &Attributes) -> Result<f64, AttrError> {
        self.width(attrs)
    }
}

/// `<line>`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Line;

impl Geometry for Line {
    fn tag(&self) -> &'static str {
        "line"
    }

    /// Spans both endpoints, whichever way the line is drawn
    fn own_box(&self, attrs: &Attributes) -> Result<BBox, AttrError> {
        let (x1, x2) = (attrs.numeric("x1")?, attrs.numeric("x2")?);
        let (y1, y2) = (attrs.numeric("y1")?, attrs.numeric("y2")?);
        Ok(BBox::new(
            nan_min(x1, x2),
            nan_max(x1, x2),
            nan_min(y1, y2),
            nan_max(y1, y2),
        ))
    }

    fn width(&self, attrs: &Attributes) -> Result<f64, AttrError> {
        Ok((attrs.numeric("x2")? - attrs.numeric("x1")?).abs())
    }

    fn height(&self, attrs: &Attributes) -> Result<f64, AttrError> {
        Ok((attrs.numeric("y2")? - attrs.numeric("y1")?).abs())
    }
}

/// `<path>`: geometry comes from the `d` attribute
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Path;

impl Geometry for Path {
    fn tag(&self) -> &'static str {
        "path"
    }

    fn own_box(&self, attrs: &Attributes) -> Result<BBox, AttrError> {
        Ok(BBox::from_points(&self.points(attrs)?))
    }

    fn points(&self, attrs: &Attributes) -> Result<Vec<Point>, AttrError> {
        match attrs.get("d") {
            Some(d) => path_vertices(d),
            None => Ok(Vec::new()),
        }
    }
}

/// `<polygon>`: geometry comes from the `points` attribute
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Polygon;

impl Geometry for Polygon {
    fn tag(&self) -> &'static str {
        "polygon"
    }

    fn own_box(&self, attrs: &Attributes) -> Result<BBox, AttrError> {
        Ok(BBox::from_points(&self.points(attrs)?))
    }

    fn points(&self, attrs: &Attributes) -> Result<Vec<Point>, AttrError> {
        match attrs.get("points") {
            Some(list) => parse_point_list(list),
            None => Ok(Vec::new()),
        }
    }
}

/// `<text>`: glyphs are never measured, so text has no box
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    pub content: String,
}

impl Geometry for Text {
    fn tag(&self) -> &'static str {
        "text"
    }
}

impl Geometry for Stylesheet {
    fn tag(&self) -> &'static str {
        "style"
    }
}

// ============================================================================
// Element Enum
// ============================================================================

/// Every element a document tree can hold
#[enum_dispatch(Geometry)]
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Svg(Svg),
    Group(Group),
    Rect(Rect),
    Circle(Circle),
    Line(Line),
    Path(Path),
    Polygon(Polygon),
    Text(Text),
    Style(Stylesheet),
}

/// Parse a `points` list such as `"0,0 10,0 10,10"`
pub fn parse_point_list(list: &str) -> Result<Vec<Point>, AttrError> {
    let invalid = || AttrError::InvalidPoints {
        value: list.to_string(),
    };
    let numbers = list
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<f64>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>, _>>()?;
    if numbers.len() % 2 != 0 {
        return Err(invalid());
    }
    Ok(numbers
        .chunks(2)
        .map(|xy| Point::new(xy[0], xy[1]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs.iter().copied().collect()
    }

    #[test]
    fn circle_box_is_center_plus_minus_radius() {
        let a = attrs(&[("cx", "-100.0"), ("cy", "-100.0"), ("r", "100.0")]);
        assert_eq!(Circle.own_box(&a).unwrap(), BBox::new(-200.0, 0.0, -200.0, 0.0));
        assert_eq!(Circle.width(&a).unwrap(), 200.0);
        assert_eq!(Circle.height(&a).unwrap(), 200.0);
        assert_eq!(Circle.x(&a).unwrap(), -100.0);
    }

    #[test]
    fn rect_box_spans_size() {
        let a = attrs(&[("x", "20"), ("y", "10"), ("width", "40"), ("height", "5")]);
        assert_eq!(Rect.own_box(&a).unwrap(), BBox::new(20.0, 60.0, 10.0, 15.0));
    }

    #[test]
    fn rect_missing_size_leaves_fields_unset() {
        let a = attrs(&[("x", "20"), ("y", "10")]);
        let b = Rect.own_box(&a).unwrap();
        assert_eq!(b.x_min, 20.0);
        assert!(b.x_max.is_nan());
    }

    #[test]
    fn line_box_spans_its_endpoints() {
        let a = attrs(&[("x1", "0"), ("x2", "10"), ("y1", "0"), ("y2", "10")]);
        assert_eq!(Line.own_box(&a).unwrap(), BBox::new(0.0, 10.0, 0.0, 10.0));
        let a = attrs(&[("x1", "4"), ("x2", "1"), ("y1", "9"), ("y2", "3")]);
        assert_eq!(Line.own_box(&a).unwrap(), BBox::new(1.0, 4.0, 3.0, 9.0));
        assert_eq!(Line.width(&a).unwrap(), 3.0);
        assert_eq!(Line.height(&a).unwrap(), 6.0);
    }

    #[test]
    fn containers_have_no_geometry() {
        let a = attrs(&[("x", "1"), ("y", "1"), ("width", "5"), ("height", "5")]);
        assert!(Group.own_box(&a).unwrap().is_sentinel());
        assert!(Svg.own_box(&a).unwrap().is_sentinel());
        assert!(Text::default().own_box(&a).unwrap().is_sentinel());
        assert!(Group.points(&a).unwrap().is_empty());
    }

    #[test]
    fn svg_reads_its_size_attributes() {
        let a = attrs(&[("width", "420.0"), ("height", "210.0")]);
        assert_eq!(Svg.width(&a).unwrap(), 420.0);
        assert_eq!(Svg.height(&a).unwrap(), 210.0);
    }

    #[test]
    fn rect_points_are_corners() {
        let a = attrs(&[("x", "0"), ("y", "0"), ("width", "2"), ("height", "1")]);
        let pts = Rect.points(&a).unwrap();
        assert_eq!(pts.len(), 4);
        assert!(pts.contains(&Point::new(2.0, 1.0)));
    }

    #[test]
    fn path_uses_vertices() {
        let a = attrs(&[("d", "M 0 0 L 10 5 L 3 -2")]);
        assert_eq!(Path.own_box(&a).unwrap(), BBox::new(0.0, 10.0, -2.0, 5.0));
        assert_eq!(Path.points(&a).unwrap().len(), 3);
        assert!(Path.own_box(&Attributes::new()).unwrap().is_sentinel());
    }

    #[test]
    fn polygon_uses_point_list() {
        let a = attrs(&[("points", "0.0,0.0 10.0,0.0 5.0,8.0")]);
        assert_eq!(Polygon.own_box(&a).unwrap(), BBox::new(0.0, 10.0, 0.0, 8.0));
    }

    #[test]
    fn point_list_rejects_odd_counts() {
        assert!(matches!(
            parse_point_list("0,0 1"),
            Err(AttrError::InvalidPoints { .. })
        ));
        assert!(matches!(
            parse_point_list("0,zero"),
            Err(AttrError::InvalidPoints { .. })
        ));
    }

    #[test]
    fn dispatch_through_element() {
        let e: Element = Circle.into();
        assert_eq!(e.tag(), "circle");
        let a = attrs(&[("cx", "0"), ("cy", "0"), ("r", "1")]);
        assert_eq!(e.own_box(&a).unwrap(), BBox::new(-1.0, 1.0, -1.0, 1.0));
    }
}
