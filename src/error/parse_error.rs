use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
///
/// Offsets are byte offsets into the source expression, starting at zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The expression contained no tokens at all.
    #[error("Empty expression.")]
    EmptyInput,
    /// The lexer found a character that does not start any token.
    #[error("Unrecognized character '{text}' at offset {offset}.")]
    UnrecognizedCharacter {
        /// The offending substring.
        text:   String,
        /// Where the substring starts.
        offset: usize,
    },
    /// Found a token the grammar does not allow at this position.
    #[error("Unexpected token '{token}' at offset {offset}: expected {expected}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// What the parser was looking for.
        expected: &'static str,
        /// Where the token starts.
        offset:   usize,
    },
    /// The input ended right after a binary operator.
    #[error("Operator '{operator}' at offset {offset} is missing its right operand.")]
    TrailingOperator {
        /// The dangling operator.
        operator: String,
        /// Where the operator starts.
        offset:   usize,
    },
    /// An opening parenthesis was never closed.
    #[error("Unmatched parenthesis: '(' at offset {offset} is never closed.")]
    UnmatchedParenthesis {
        /// Where the opening parenthesis is.
        offset: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Trailing input '{token}' at offset {offset} after a complete expression.")]
    TrailingInput {
        /// The first extra token.
        token:  String,
        /// Where the token starts.
        offset: usize,
    },
    /// The syntax tree would be deeper than the parser allows.
    #[error("Expression is nested deeper than the limit of {limit} levels.")]
    NestingTooDeep {
        /// The configured maximum depth.
        limit: usize,
    },
    /// A numeric literal does not fit in a finite `f64`.
    #[error("Literal '{literal}' at offset {offset} is too large.")]
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// Where the literal starts.
        offset:  usize,
    },
}

impl ParseError {
    /// Returns the byte offset the error points at, if it has one.
    ///
    /// ## Example
    /// ```
    /// use treecalc::error::ParseError;
    ///
    /// let err = ParseError::UnmatchedParenthesis { offset: 3 };
    /// assert_eq!(err.offset(), Some(3));
    /// assert_eq!(ParseError::EmptyInput.offset(), None);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::UnrecognizedCharacter { offset, .. }
            | Self::UnexpectedToken { offset, .. }
            | Self::TrailingOperator { offset, .. }
            | Self::UnmatchedParenthesis { offset }
            | Self::TrailingInput { offset, .. }
            | Self::LiteralTooLarge { offset, .. } => Some(*offset),
            Self::EmptyInput | Self::NestingTooDeep { .. } => None,
        }
    }
}
