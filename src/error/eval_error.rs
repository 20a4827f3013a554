use thiserror::Error;

use crate::error::ParseError;

/// The single failure value handed back to callers of the core.
///
/// Neither variant carries recoverable state: the whole expression is
/// invalid and nothing partial is returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A divisor evaluated to exactly zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// An operation overflowed, or a leaf held a value that is not a
    /// finite number.
    #[error("Result is not a finite number.")]
    NotFinite,
    /// The expression could not be lexed or parsed.
    #[error("Parse failure: {0}")]
    ParseFailure(#[from] ParseError),
}

impl EvalError {
    /// Returns the underlying parse error, if this is a parse failure.
    #[must_use]
    pub const fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::ParseFailure(err) => Some(err),
            Self::DivisionByZero | Self::NotFinite => None,
        }
    }
}
