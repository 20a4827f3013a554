use std::fmt;

use serde::Serialize;

use crate::{ast::BinaryOperator, util::num::format_number};

/// The canonical, parser-independent form of an expression tree.
///
/// Parentheses are gone: grouping is encoded by shape alone. Evaluation and
/// layout both read this representation.
///
/// Serializes as a bare number for leaves and as
/// `{"label": "add", "children": [...]}` for branches.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CanonicalNode {
    /// A number.
    Leaf(f64),
    /// An operator applied to its ordered operands.
    Branch(Branch),
}

/// A labelled node with at least one child.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Branch {
    label:    BinaryOperator,
    children: Vec<CanonicalNode>,
}

impl Branch {
    /// Creates a branch, or returns `None` if `children` is empty.
    ///
    /// ## Example
    /// ```
    /// use treecalc::{
    ///     ast::BinaryOperator,
    ///     tree::{Branch, CanonicalNode},
    /// };
    ///
    /// assert!(Branch::new(BinaryOperator::Add, vec![]).is_none());
    /// let branch = Branch::new(BinaryOperator::Add, vec![CanonicalNode::Leaf(1.0)]).unwrap();
    /// assert_eq!(branch.children().len(), 1);
    /// ```
    #[must_use]
    pub fn new(label: BinaryOperator, children: Vec<CanonicalNode>) -> Option<Self> {
        if children.is_empty() {
            return None;
        }
        Some(Self { label, children })
    }

    /// Creates a branch with exactly two children.
    #[must_use]
    pub fn binary(label: BinaryOperator, left: CanonicalNode, right: CanonicalNode) -> Self {
        Self { label,
               children: vec![left, right] }
    }

    /// The operator this branch applies.
    #[must_use]
    pub const fn operator(&self) -> BinaryOperator {
        self.label
    }

    /// The branch's children, left to right. Never empty.
    #[must_use]
    pub fn children(&self) -> &[CanonicalNode] {
        &self.children
    }

    /// The first child and the remaining ones.
    #[must_use]
    pub fn split_first(&self) -> (&CanonicalNode, &[CanonicalNode]) {
        match self.children.as_slice() {
            [first, rest @ ..] => (first, rest),
            [] => unreachable!("branches are never built without children"),
        }
    }
}

impl CanonicalNode {
    /// Shorthand for a two-child branch.
    #[must_use]
    pub fn binary(label: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Branch(Branch::binary(label, left, right))
    }

    /// The text a renderer should draw for this node: the operator name for
    /// a branch, the formatted number for a leaf.
    ///
    /// ## Example
    /// ```
    /// use treecalc::{ast::BinaryOperator, tree::CanonicalNode};
    ///
    /// let tree = CanonicalNode::binary(BinaryOperator::Div,
    ///                                  CanonicalNode::Leaf(1.0),
    ///                                  CanonicalNode::Leaf(2.5));
    /// assert_eq!(tree.label(), "div");
    /// assert_eq!(tree.children()[1].label(), "2.5");
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Leaf(value) => format_number(*value),
            Self::Branch(branch) => branch.label.name().to_string(),
        }
    }

    /// The node's children; empty for a leaf.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Leaf(_) => &[],
            Self::Branch(branch) => branch.children(),
        }
    }

    /// Number of leaves in this subtree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Branch(branch) => {
                let mut leaves = 0;
                for child in &branch.children {
                    leaves += child.leaf_count();
                }
                leaves
            },
        }
    }

    /// Number of levels in this subtree; a leaf has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Branch(branch) => {
                let mut deepest = 0;
                for child in &branch.children {
                    deepest = deepest.max(child.depth());
                }
                1 + deepest
            },
        }
    }
}

/// Writes the tree as an s-expression, e.g. `(add 2.0 (mul 3.0 4.0))`.
impl fmt::Display for CanonicalNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(value) => write!(f, "{}", format_number(*value)),
            Self::Branch(branch) => {
                write!(f, "({}", branch.label.name())?;
                for child in &branch.children {
                    write!(f, " {child}")?;
                }
                write!(f, ")")
            },
        }
    }
}
