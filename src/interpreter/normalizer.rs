use crate::{ast::Expr, tree::CanonicalNode};

/// Converts a syntax tree into its canonical form.
///
/// Numbers become leaves, each binary operation becomes a branch labelled
/// with the operator's name and holding its two operands in order, and
/// parentheses disappear: the tree's shape already encodes the grouping
/// they asked for.
///
/// # Example
/// ```
/// use treecalc::interpreter::{normalizer::normalize, parser::core::Parser};
///
/// let parser = Parser::new();
/// let wrapped = normalize(&parser.parse("(((5)))").unwrap());
/// let bare = normalize(&parser.parse("5").unwrap());
/// assert_eq!(wrapped, bare);
/// assert_eq!(normalize(&parser.parse("(2 + 3) * 4").unwrap()).to_string(),
///            "(mul (add 2.0 3.0) 4.0)");
/// ```
#[must_use]
pub fn normalize(expr: &Expr) -> CanonicalNode {
    match expr {
        Expr::Number { value, .. } => CanonicalNode::Leaf(*value),
        Expr::BinaryOp { left, op, right, .. } => {
            CanonicalNode::binary(*op, normalize(left), normalize(right))
        },
        Expr::Parenthesized { inner, .. } => normalize(inner),
    }
}

/// ## Example
/// ```
/// use treecalc::{CanonicalNode, Parser};
///
/// let expr = Parser::new().parse("(1 + 2)").unwrap();
/// assert_eq!(CanonicalNode::from(&expr).to_string(), "(add 1.0 2.0)");
/// ```
impl From<&Expr> for CanonicalNode {
    fn from(expr: &Expr) -> Self {
        normalize(expr)
    }
}
