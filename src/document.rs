//! Document roots and the autoscale calculator.

use std::ops::{Deref, DerefMut};

use crate::attrs::Attributes;
use crate::defaults::SVG_NS;
use crate::errors::AttrError;
use crate::log::debug;
use crate::shapes::Element;
use crate::style::{Keyframes, Stylesheet};
use crate::tree::Node;
use crate::types::{BBox, Margins, ViewBox};

/// An `<svg>` root together with everything drawn inside it.
///
/// A `Document` derefs to its root [`Node`], so the whole tree API is
/// available on it. Compositions such as [`merge`](crate::merge) take
/// documents by value: once merged, the original handle is gone.
#[derive(Debug, PartialEq)]
pub struct Document {
    root: Node,
}

impl Document {
    pub fn new() -> Self {
        let mut root = Node::svg();
        root.set_str("xmlns", SVG_NS);
        Document { root }
    }

    /// The root node, consuming the document
    pub fn into_node(self) -> Node {
        self.root
    }

    /// Size the document so it holds all of its geometry plus `margins`.
    ///
    /// Width is `|x_min| + |x_max| + left + right`, height likewise on the y
    /// axis. A `viewBox` anchored at `(x_min - left, y_min - top)` is written
    /// only when that corner has a negative coordinate; otherwise any stale
    /// `viewBox` is removed.
    pub fn autoscale(&mut self, margins: Margins) -> Result<(), AttrError> {
        let bbox = self.root.bbox()?;
        self.fit(&bbox, margins);
        Ok(())
    }

    /// Like [`Document::autoscale`], with each margin a fraction of the
    /// unpadded extent: `fraction * width` on the left and right,
    /// `fraction * height` on the top and bottom.
    pub fn autoscale_fraction(&mut self, fraction: f64) -> Result<(), AttrError> {
        let bbox = self.root.bbox()?;
        let (width, height) = extent(&bbox);
        let margins = Margins {
            left: fraction * width,
            right: fraction * width,
            top: fraction * height,
            bottom: fraction * height,
        };
        self.fit(&bbox, margins);
        Ok(())
    }

    fn fit(&mut self, bbox: &BBox, margins: Margins) {
        let (extent_x, extent_y) = extent(bbox);
        let width = extent_x + margins.left + margins.right;
        let height = extent_y + margins.top + margins.bottom;
        let min_x = or_zero(bbox.x_min) - margins.left;
        let min_y = or_zero(bbox.y_min) - margins.top;

        debug!(?bbox, width, height, min_x, min_y, "autoscale");

        self.root.set_num("width", width).set_num("height", height);
        if min_x < 0.0 || min_y < 0.0 {
            let view_box = ViewBox {
                min_x,
                min_y,
                width,
                height,
            };
            self.root.set_str("viewBox", view_box.to_string());
        } else {
            self.root.attrs_mut().remove("viewBox");
        }
    }

    /// The `viewBox` attribute, if any
    pub fn view_box(&self) -> Result<Option<ViewBox>, AttrError> {
        let Some(raw) = self.root.get("viewBox") else {
            return Ok(None);
        };
        let invalid = || AttrError::InvalidNumber {
            key: "viewBox".to_string(),
            value: raw.to_string(),
        };
        let numbers = raw
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<f64>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;
        match numbers[..] {
            [min_x, min_y, width, height] => Ok(Some(ViewBox {
                min_x,
                min_y,
                width,
                height,
            })),
            _ => Err(invalid()),
        }
    }

    /// CSS declarations for `selector`, creating the `<style>` element and
    /// the rule on first use
    pub fn style(&mut self, selector: impl Into<String>) -> &mut Attributes {
        self.stylesheet_mut().rule(selector)
    }

    /// An `@keyframes` block, created on first use
    pub fn keyframes(&mut self, name: impl Into<String>) -> &mut Keyframes {
        self.stylesheet_mut().keyframes(name)
    }

    /// The document's stylesheet, if one was created
    pub fn stylesheet(&self) -> Option<&Stylesheet> {
        self.root.children().iter().find_map(|c| match c.element() {
            Element::Style(sheet) => Some(sheet),
            _ => None,
        })
    }

    fn stylesheet_mut(&mut self) -> &mut Stylesheet {
        let index = match self
            .root
            .children
            .iter()
            .position(|c| matches!(c.element, Element::Style(_)))
        {
            Some(index) => index,
            None => {
                self.root.children.insert(0, Node::stylesheet());
                0
            }
        };
        match &mut self.root.children[index].element {
            Element::Style(sheet) => sheet,
            _ => unreachable!("position() matched a style element"),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Document {
    type Target = Node;

    fn deref(&self) -> &Node {
        &self.root
    }
}

impl DerefMut for Document {
    fn deref_mut(&mut self) -> &mut Node {
        &mut self.root
    }
}

impl From<Document> for Node {
    fn from(doc: Document) -> Node {
        doc.into_node()
    }
}

/// Unset box fields count as zero
fn or_zero(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value }
}

/// `|min| + |max|` on each axis
fn extent(bbox: &BBox) -> (f64, f64) {
    (
        or_zero(bbox.x_min).abs() + or_zero(bbox.x_max).abs(),
        or_zero(bbox.y_min).abs() + or_zero(bbox.y_max).abs(),
    )
}
