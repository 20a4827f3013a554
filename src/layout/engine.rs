use log::debug;

use crate::{
    layout::node::{LayoutNode, Point},
    tree::CanonicalNode,
    util::num::usize_to_f64,
};

/// Horizontal spacing between siblings of the root for the default layout.
pub const DEFAULT_X_OFFSET: f64 = 1.5;
/// Vertical distance between consecutive levels for the default layout.
pub const DEFAULT_Y_OFFSET: f64 = 1.0;

/// How children are spread horizontally below their parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spacing {
    /// Siblings are `x_offset` apart and centered on the parent; the offset
    /// halves at every level. Compact, but wide subtrees deep in the tree
    /// can run into each other.
    #[default]
    Halving,
    /// Each child gets a slot `x_offset` wide per leaf in its subtree and
    /// the slots are centered on the parent. Nodes on the same level are
    /// never closer than `x_offset`, at the cost of a wider drawing.
    LeafCount,
}

/// Parameters of the layout computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Horizontal spacing factor.
    pub x_offset: f64,
    /// Vertical distance between a node and its children.
    pub y_offset: f64,
    /// Where the root is placed.
    pub origin:   Point,
    pub spacing:  Spacing,
}

impl LayoutOptions {
    pub const DEFAULT: Self = Self { x_offset: DEFAULT_X_OFFSET,
                                     y_offset: DEFAULT_Y_OFFSET,
                                     origin:   Point::ORIGIN,
                                     spacing:  Spacing::Halving, };

    /// Default options with the given offsets.
    #[must_use]
    pub const fn new(x_offset: f64, y_offset: f64) -> Self {
        Self { x_offset,
               y_offset,
               ..Self::DEFAULT }
    }

    #[must_use]
    pub const fn with_origin(self, origin: Point) -> Self {
        Self { origin, ..self }
    }

    #[must_use]
    pub const fn with_spacing(self, spacing: Spacing) -> Self {
        Self { spacing, ..self }
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Computes a position for every node of `tree`.
///
/// The root is placed at `options.origin` and every level sits `y_offset`
/// below its parent. With [`Spacing::Halving`], child `i` (1-indexed) of a
/// node with `k` children at `(x, y)` is placed at
/// `x + x_offset * (i - (k + 1) / 2)`, and its own children are laid out
/// with half the offset. The result is a pure value: nothing is drawn.
///
/// # Example
/// ```
/// use treecalc::{
///     layout,
///     layout::{engine::LayoutOptions, node::Point},
///     parse_and_evaluate,
/// };
///
/// let (tree, _) = parse_and_evaluate("2 + 3 * 4").unwrap();
/// let root = layout(&tree, &LayoutOptions::default());
///
/// assert_eq!(root.position, Point::new(0.0, 0.0));
/// assert_eq!(root.children[0].position, Point::new(-0.75, -1.0));
/// assert_eq!(root.children[1].position, Point::new(0.75, -1.0));
/// assert_eq!(root.children[1].children[0].position, Point::new(0.375, -2.0));
/// ```
#[must_use]
pub fn layout<'t>(tree: &'t CanonicalNode, options: &LayoutOptions) -> LayoutNode<'t> {
    debug!("laying out a tree of depth {} with {options:?}", tree.depth());
    match options.spacing {
        Spacing::Halving => place_halving(tree, options.origin, options.x_offset, options.y_offset),
        Spacing::LeafCount => {
            place_by_leaves(tree, options.origin, options.x_offset, options.y_offset)
        },
    }
}

fn place_halving(node: &CanonicalNode, at: Point, x_offset: f64, y_offset: f64) -> LayoutNode<'_> {
    let children = node.children();
    let center = usize_to_f64(children.len() + 1) / 2.0;

    let mut placed = Vec::with_capacity(children.len());
    for (index, child) in children.iter().enumerate() {
        let slot = usize_to_f64(index + 1) - center;
        let position = Point::new(at.x + x_offset * slot, at.y - y_offset);
        placed.push(place_halving(child, position, x_offset / 2.0, y_offset));
    }

    LayoutNode::new(node, at, placed)
}

fn place_by_leaves(node: &CanonicalNode,
                   at: Point,
                   x_offset: f64,
                   y_offset: f64)
                   -> LayoutNode<'_> {
    let children = node.children();
    let total = usize_to_f64(node.leaf_count());
    let mut left = at.x - x_offset * total / 2.0;

    let mut placed = Vec::with_capacity(children.len());
    for child in children {
        let width = x_offset * usize_to_f64(child.leaf_count());
        let position = Point::new(left + width / 2.0, at.y - y_offset);
        left += width;
        placed.push(place_by_leaves(child, position, x_offset, y_offset));
    }

    LayoutNode::new(node, at, placed)
}
