use log::debug;
use serde::{Serialize, Serializer};

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, evaluate},
        normalizer::normalize,
        parser::core::Parser,
    },
    layout::{
        engine::{LayoutOptions, layout},
        node::LayoutNode,
    },
    tree::CanonicalNode,
};

impl Parser {
    /// Parses, normalizes and evaluates `expression`.
    ///
    /// # Errors
    /// Returns [`EvalError::ParseFailure`] if the expression is malformed,
    /// [`EvalError::DivisionByZero`] if a divisor evaluates to zero and
    /// [`EvalError::NotFinite`] if the arithmetic overflows. Nothing partial
    /// is returned in any case.
    pub fn parse_and_evaluate(&self, expression: &str) -> EvalResult<(CanonicalNode, f64)> {
        let tree = normalize(&self.parse(expression)?);
        let value = evaluate(&tree)?;
        Ok((tree, value))
    }
}

/// Everything a host shows for one submitted expression.
///
/// Unlike [`Parser::parse_and_evaluate`], the tree is kept when only
/// evaluation failed, so a host can still draw an expression that divides by
/// zero. At most one of `result` and `error` is set, and `tree` is set
/// unless parsing failed.
///
/// ## Example
/// ```
/// use treecalc::{Calculation, Parser, error::EvalError};
///
/// let calc = Calculation::run(&Parser::new(), "5 / (2 - 2)");
/// assert!(calc.tree.is_some());
/// assert_eq!(calc.result, None);
/// assert_eq!(calc.error, Some(EvalError::DivisionByZero));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    pub expression: String,
    pub tree:       Option<CanonicalNode>,
    pub result:     Option<f64>,
    #[serde(serialize_with = "serialize_error")]
    pub error:      Option<EvalError>,
}

impl Calculation {
    /// Runs the whole core on `expression`.
    #[must_use]
    pub fn run(parser: &Parser, expression: &str) -> Self {
        let tree = match parser.parse(expression) {
            Ok(expr) => normalize(&expr),
            Err(err) => {
                debug!("rejected {expression:?}: {err}");
                return Self { expression: expression.to_string(),
                              tree:       None,
                              result:     None,
                              error:      Some(err.into()), };
            },
        };

        let (result, error) = match evaluate(&tree) {
            Ok(value) => (Some(value), None),
            Err(err) => (None, Some(err)),
        };

        Self { expression: expression.to_string(),
               tree: Some(tree),
               result,
               error }
    }

    /// Lays out the tree, if there is one.
    #[must_use]
    pub fn layout(&self, options: &LayoutOptions) -> Option<LayoutNode<'_>> {
        self.tree.as_ref().map(|tree| layout(tree, options))
    }

    /// Whether the expression produced a value.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

fn serialize_error<S>(error: &Option<EvalError>, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer
{
    match error {
        Some(err) => serializer.serialize_some(&err.to_string()),
        None => serializer.serialize_none(),
    }
}
