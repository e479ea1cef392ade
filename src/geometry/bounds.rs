//! Bounding box aggregation

use crate::errors::AttrError;
use crate::shapes::Geometry;
use crate::tree::Node;
use crate::types::BBox;

impl Node {
    /// Box of this element alone, ignoring its children
    pub fn own_box(&self) -> Result<BBox, AttrError> {
        self.element.own_box(&self.attrs)
    }

    /// Smallest box enclosing this node and every descendant with geometry.
    ///
    /// A subtree without any geometry yields [`BBox::SENTINEL`].
    pub fn bbox(&self) -> Result<BBox, AttrError> {
        let mut bbox = BBox::SENTINEL;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            bbox = bbox.union(&node.own_box()?);
            stack.extend(node.children.iter());
        }
        Ok(bbox)
    }
}
