use log::debug;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::evaluator::binary::{eval_binary, finite},
    tree::CanonicalNode,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a canonical tree to a single number.
///
/// Children are evaluated left to right before their parent's operator is
/// applied. A branch folds its operator over its children from the left, so
/// for the two-child branches produced by normalization this is exactly
/// `left op right`.
///
/// # Errors
/// Returns [`EvalError::DivisionByZero`] if any divisor evaluates to zero and
/// [`EvalError::NotFinite`] if a leaf or an intermediate value is not finite.
///
/// # Example
/// ```
/// use treecalc::{
///     interpreter::{evaluator::core::evaluate, normalizer::normalize, parser::core::Parser},
/// };
///
/// let tree = normalize(&Parser::new().parse("8 - 4 - 2").unwrap());
/// assert_eq!(evaluate(&tree), Ok(2.0));
/// ```
pub fn evaluate(tree: &CanonicalNode) -> EvalResult<f64> {
    debug!("evaluating a tree of depth {} with {} leaves",
           tree.depth(),
           tree.leaf_count());
    eval_node(tree)
}

fn eval_node(node: &CanonicalNode) -> EvalResult<f64> {
    match node {
        CanonicalNode::Leaf(value) => finite(*value),
        CanonicalNode::Branch(branch) => {
            let (first, rest) = branch.split_first();
            let mut acc = eval_node(first)?;
            for child in rest {
                let right = eval_node(child)?;
                acc = eval_binary(branch.operator(), acc, right)?;
            }
            Ok(acc)
        },
    }
}

impl CanonicalNode {
    /// Evaluates this tree. See [`evaluate`].
    ///
    /// # Errors
    /// Returns [`EvalError::DivisionByZero`] if any divisor evaluates to zero
    /// and [`EvalError::NotFinite`] if a value is not finite.
    pub fn evaluate(&self) -> EvalResult<f64> {
        evaluate(self)
    }
}

impl Expr {
    /// Evaluates the syntax tree directly, without normalizing it first.
    ///
    /// Gives the same value or error as evaluating the normalized tree.
    ///
    /// # Errors
    /// Returns [`EvalError::DivisionByZero`] if any divisor evaluates to zero
    /// and [`EvalError::NotFinite`] if a value is not finite.
    pub fn evaluate(&self) -> EvalResult<f64> {
        match self {
            Self::Number { value, .. } => finite(*value),
            Self::Parenthesized { inner, .. } => inner.evaluate(),
            Self::BinaryOp { left, op, right, .. } => {
                let left = left.evaluate()?;
                let right = right.evaluate()?;
                eval_binary(*op, left, right)
            },
        }
    }
}
