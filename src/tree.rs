//! The document tree.
//!
//! A [`Node`] exclusively owns its children. Inserting a node moves it into
//! its parent, so no node can ever have two parents and the tree can never
//! contain a cycle.

use std::collections::{BTreeMap, VecDeque};
use std::ops::Shl;

use crate::attrs::{Attributes, format_point};
use crate::errors::AttrError;
use crate::shapes::{Circle, Element, Geometry, Group, Line, Path, Polygon, Rect, Svg, Text};
use crate::style::Stylesheet;
use crate::types::Point;

/// One element of a document together with its attributes and children
#[derive(Debug, PartialEq)]
pub struct Node {
    pub(crate) element: Element,
    pub(crate) attrs: Attributes,
    pub(crate) children: Vec<Node>,
}

impl Node {
    pub fn new(element: impl Into<Element>) -> Self {
        Self::with_attrs(element, Attributes::new())
    }

    pub fn with_attrs(element: impl Into<Element>, attrs: Attributes) -> Self {
        Node {
            element: element.into(),
            attrs,
            children: Vec::new(),
        }
    }

    // ------------------------------------------------------------------------
    // Builders
    // ------------------------------------------------------------------------

    pub fn group() -> Self {
        Node::new(Group)
    }

    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        let mut node = Node::new(Rect);
        node.set_num("x", x)
            .set_num("y", y)
            .set_num("width", width)
            .set_num("height", height);
        node
    }

    pub fn circle(cx: f64, cy: f64, radius: f64) -> Self {
        let mut node = Node::new(Circle);
        node.set_num("cx", cx).set_num("cy", cy).set_num("r", radius);
        node
    }

    /// Circle centered on a point
    pub fn circle_at(center: Point, radius: f64) -> Self {
        Node::circle(center.x, center.y, radius)
    }

    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let mut node = Node::new(Line);
        node.set_num("x1", x1)
            .set_num("y1", y1)
            .set_num("x2", x2)
            .set_num("y2", y2);
        node
    }

    /// Line between two points
    pub fn line_between(start: Point, end: Point) -> Self {
        Node::line(start.x, start.y, end.x, end.y)
    }

    /// Path from `d` attribute text, e.g. the output of a
    /// [`PathBuilder`](crate::PathBuilder)
    pub fn path(data: impl Into<String>) -> Self {
        let mut node = Node::new(Path);
        node.set_str("d", data);
        node
    }

    pub fn polygon(points: &[Point]) -> Self {
        let list = points
            .iter()
            .map(|p| format_point(*p))
            .collect::<Vec<_>>()
            .join(" ");
        let mut node = Node::new(Polygon);
        node.set_str("points", list);
        node
    }

    pub fn text(x: f64, y: f64, content: impl Into<String>) -> Self {
        let mut node = Node::new(Text {
            content: content.into(),
        });
        node.set_num("x", x).set_num("y", y);
        node
    }

    pub(crate) fn svg() -> Self {
        Node::new(Svg)
    }

    pub(crate) fn stylesheet() -> Self {
        let mut node = Node::new(Stylesheet::new());
        node.set_str("type", "text/css");
        node
    }

    // ------------------------------------------------------------------------
    // Element and attributes
    // ------------------------------------------------------------------------

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    pub fn tag(&self) -> &'static str {
        self.element.tag()
    }

    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    pub fn attrs_mut(&mut self) -> &mut Attributes {
        &mut self.attrs
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key)
    }

    /// Set a numeric attribute, written with one decimal place
    pub fn set_num(&mut self, key: impl Into<String>, value: f64) -> &mut Self {
        self.attrs.set_num(key, value);
        self
    }

    /// Set a string attribute verbatim
    pub fn set_str(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attrs.set_str(key, value);
        self
    }

    /// Position and size as derived by the element kind
    pub fn x(&self) -> Result<f64, AttrError> {
        self.element.x(&self.attrs)
    }

    pub fn y(&self) -> Result<f64, AttrError> {
        self.element.y(&self.attrs)
    }

    pub fn width(&self) -> Result<f64, AttrError> {
        self.element.width(&self.attrs)
    }

    pub fn height(&self) -> Result<f64, AttrError> {
        self.element.height(&self.attrs)
    }

    /// Representative points for hull computation
    pub fn points(&self) -> Result<Vec<Point>, AttrError> {
        self.element.points(&self.attrs)
    }

    // ------------------------------------------------------------------------
    // Children
    // ------------------------------------------------------------------------

    /// Move `child` in as the last child and return it
    pub fn add_child(&mut self, child: Node) -> &mut Node {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Move `child` in as the last child, for chaining
    pub fn push(&mut self, child: Node) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Builder form of [`Node::push`]
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    /// Remove and return every child, leaving this node empty
    pub fn take_children(&mut self) -> Vec<Node> {
        std::mem::take(&mut self.children)
    }

    /// Direct children, optionally only those with the given tag
    pub fn immediate_children(&self, tag: Option<&str>) -> Vec<&Node> {
        self.children
            .iter()
            .filter(|c| tag.is_none_or(|t| c.tag() == t))
            .collect()
    }

    /// Every descendant (not including `self`), breadth first
    pub fn descendants(&self) -> Vec<&Node> {
        let mut queue: VecDeque<&Node> = self.children.iter().collect();
        let mut out = Vec::new();
        while let Some(node) = queue.pop_front() {
            out.push(node);
            queue.extend(node.children.iter());
        }
        out
    }

    /// Every descendant grouped by tag
    pub fn children_by_tag(&self) -> BTreeMap<&'static str, Vec<&Node>> {
        let mut map: BTreeMap<&'static str, Vec<&Node>> = BTreeMap::new();
        for node in self.descendants() {
            map.entry(node.tag()).or_default().push(node);
        }
        map
    }

    /// Every descendant with the given tag
    pub fn descendants_with_tag(&self, tag: &str) -> Vec<&Node> {
        self.descendants()
            .into_iter()
            .filter(|n| n.tag() == tag)
            .collect()
    }

    /// First descendant whose `id` attribute equals `id`
    pub fn element_by_id(&self, id: &str) -> Option<&Node> {
        self.descendants()
            .into_iter()
            .find(|n| n.attrs.get("id") == Some(id))
    }

    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.children.iter_mut().find_map(|child| {
            if child.attrs.get("id") == Some(id) {
                return Some(child);
            }
            child.element_by_id_mut(id)
        })
    }

    /// Descendants whose `class` list contains `class`
    pub fn elements_by_class(&self, class: &str) -> Vec<&Node> {
        self.descendants()
            .into_iter()
            .filter(|n| {
                n.attrs
                    .get("class")
                    .is_some_and(|list| list.split_whitespace().any(|c| c == class))
            })
            .collect()
    }

    pub(crate) fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.set_num("x", x).set_num("y", y)
    }
}

impl Shl<Node> for Node {
    type Output = Node;

    /// `group << circle << rect` appends in order
    fn shl(self, child: Node) -> Node {
        self.with_child(child)
    }
}
