//! # treecalc
//!
//! treecalc parses arithmetic expressions made of decimal numbers, `+ - * /`
//! and parentheses, evaluates them, and lays out their syntax trees so an
//! external renderer can draw them on any surface.
//!
//! ```
//! use treecalc::{layout, layout::engine::LayoutOptions, parse_and_evaluate};
//!
//! let (tree, value) = parse_and_evaluate("3.5*2-1").unwrap();
//! assert_eq!(value, 6.0);
//! assert_eq!(tree.to_string(), "(sub (mul 3.5 2.0) 1.0)");
//!
//! let placed = layout(&tree, &LayoutOptions::default());
//! assert_eq!(placed.len(), 5);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::multiple_crate_versions)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the binary operators. The AST is
/// built by the parser and mirrors the source, parentheses included, with
/// the offset of every node's token for error reporting.
pub mod ast;
/// Runs the whole core on one expression.
///
/// Provides [`Parser::parse_and_evaluate`] and the [`Calculation`] triple of
/// tree, result and error that a host presents to its user.
pub mod calculation;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines every error that can be raised while lexing, parsing,
/// or evaluating an expression, with offsets into the source where the error
/// has one.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Integrates with standard error handling traits and `?` propagation.
pub mod error;
/// Orchestrates turning text into numbers.
///
/// This module ties together lexing, parsing, normalization and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, normalizer and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Assigns 2-D coordinates to canonical trees.
///
/// Layout is pure computation: it returns positions and connectors and never
/// draws anything.
pub mod layout;
/// The canonical tree shared by evaluation and layout.
pub mod tree;
/// General utilities for numeric conversion and formatting.
pub mod util;

pub use crate::{
    calculation::Calculation,
    error::{EvalError, ParseError},
    interpreter::parser::core::Parser,
    layout::engine::layout,
    tree::CanonicalNode,
};

/// Parses and evaluates an expression with the default parser.
///
/// Returns the canonical tree together with its value.
///
/// # Errors
/// Returns [`EvalError::ParseFailure`] for malformed input,
/// [`EvalError::DivisionByZero`] when a divisor evaluates to zero and
/// [`EvalError::NotFinite`] when the arithmetic overflows.
///
/// # Examples
/// ```
/// use treecalc::{EvalError, parse_and_evaluate};
///
/// assert_eq!(parse_and_evaluate("8-4-2").unwrap().1, 2.0);
/// assert_eq!(parse_and_evaluate("(2+3)*4").unwrap().1, 20.0);
/// assert_eq!(parse_and_evaluate("5/0"), Err(EvalError::DivisionByZero));
/// assert!(matches!(parse_and_evaluate("2 3"), Err(EvalError::ParseFailure(_))));
/// ```
pub fn parse_and_evaluate(expression: &str) -> Result<(CanonicalNode, f64), EvalError> {
    Parser::DEFAULT.parse_and_evaluate(expression)
}
