use serde::{Serialize, Serializer};

use crate::tree::CanonicalNode;

/// A position in layout space.
///
/// Layout space is unitless; `y` grows upwards, so deeper nodes have smaller
/// `y` values. Renderers scale and flip as their surface requires.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A connector from a parent's position to one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub from: Point,
    pub to:   Point,
}

/// Axis-aligned box enclosing a set of positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    fn including(self, point: Point) -> Self {
        Self { min: Point::new(self.min.x.min(point.x), self.min.y.min(point.y)),
               max: Point::new(self.max.x.max(point.x), self.max.y.max(point.y)), }
    }
}

/// A canonical tree node placed in layout space.
///
/// Mirrors the shape of the tree it was computed from: `children[i]` is the
/// layout of the node's `i`-th child and `segments[i]` connects this node to
/// it. Serializes with the node's label in place of the borrowed tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutNode<'t> {
    #[serde(rename = "label", serialize_with = "serialize_label")]
    pub node:     &'t CanonicalNode,
    pub position: Point,
    pub segments: Vec<Segment>,
    pub children: Vec<LayoutNode<'t>>,
}

impl<'t> LayoutNode<'t> {
    /// Places `node` at `position` above already placed children, recording
    /// a segment to each of them.
    #[must_use]
    pub fn new(node: &'t CanonicalNode, position: Point, children: Vec<Self>) -> Self {
        let segments = children.iter()
                               .map(|child| Segment { from: position,
                                                      to:   child.position, })
                               .collect();
        Self { node,
               position,
               segments,
               children }
    }

    /// The text a renderer should draw at this node.
    #[must_use]
    pub fn label(&self) -> String {
        self.node.label()
    }

    /// Iterates over this node and all its descendants in pre-order, left
    /// to right.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, 't> {
        Iter { stack: vec![self] }
    }

    /// Number of positioned nodes in this layout.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Always false: a layout holds at least its root.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Every connector in the layout, in pre-order of their parent nodes.
    #[must_use]
    pub fn all_segments(&self) -> Vec<Segment> {
        self.iter()
            .flat_map(|node| node.segments.iter().copied())
            .collect()
    }

    /// The smallest box containing every node position.
    ///
    /// ## Example
    /// ```
    /// use treecalc::{layout, layout::engine::LayoutOptions, parse_and_evaluate};
    ///
    /// let (tree, _) = parse_and_evaluate("1 + 2").unwrap();
    /// let bounds = layout(&tree, &LayoutOptions::default()).bounds();
    /// assert_eq!(bounds.width(), 1.5);
    /// assert_eq!(bounds.height(), 1.0);
    /// ```
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let start = Bounds { min: self.position,
                             max: self.position, };
        self.iter()
            .fold(start, |bounds, node| bounds.including(node.position))
    }
}

impl<'a, 't> IntoIterator for &'a LayoutNode<'t> {
    type IntoIter = Iter<'a, 't>;
    type Item = &'a LayoutNode<'t>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator over a layout. See [`LayoutNode::iter`].
pub struct Iter<'a, 't> {
    stack: Vec<&'a LayoutNode<'t>>,
}

impl<'a, 't> Iterator for Iter<'a, 't> {
    type Item = &'a LayoutNode<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

fn serialize_label<S>(node: &&CanonicalNode, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer
{
    serializer.serialize_str(&node.label())
}
