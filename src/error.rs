/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression. Parse errors include unrecognized characters, unexpected
/// tokens, unbalanced parentheses and any other issue detected before
/// evaluation.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the error type returned by the public entry points. It covers
/// failures raised while evaluating a tree (division by zero) and wraps every
/// parse failure so callers receive a single discriminated value.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
