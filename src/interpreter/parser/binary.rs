use crate::{
    ast::BinaryOperator,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            stream::{Parsed, TokenStream},
        },
    },
};

/// The operands of one parenthesized group (or of the whole expression)
/// that are still waiting for their right-hand side.
///
/// Both precedence levels are left-associative, so each level only ever
/// holds one folded operand and the operator that follows it:
///
/// ```text
///     additive       := multiplicative (("+" | "-") multiplicative)*
///     multiplicative := primary (("*" | "/") primary)*
/// ```
///
/// `8 - 4 - 2` folds to `(8 - 4) - 2` and `2 + 3 * 4` to `2 + (3 * 4)`.
#[derive(Debug, Default)]
pub(in crate::interpreter::parser) struct Group {
    /// Terms folded so far, with the `+` or `-` after them.
    additive:       Option<(Parsed, BinaryOperator, usize)>,
    /// Factors of the current term folded so far, with the `*` or `/` after
    /// them.
    multiplicative: Option<(Parsed, BinaryOperator, usize)>,
}

impl Group {
    /// Completes the current term with `factor`.
    pub fn multiply(&mut self, stream: &TokenStream<'_>, factor: Parsed) -> ParseResult<Parsed> {
        match self.multiplicative.take() {
            Some((left, op, offset)) => stream.combine(left, op, offset, factor),
            None => Ok(factor),
        }
    }

    /// Completes the group's sum with its last `term`.
    pub fn add(&mut self, stream: &TokenStream<'_>, term: Parsed) -> ParseResult<Parsed> {
        match self.additive.take() {
            Some((left, op, offset)) => stream.combine(left, op, offset, term),
            None => Ok(term),
        }
    }

    /// Records `term` as the left operand of `op`.
    ///
    /// A `+` or `-` first folds the term into the sum, since nothing can
    /// bind tighter to it any more.
    pub fn push(&mut self,
                stream: &TokenStream<'_>,
                term: Parsed,
                op: BinaryOperator,
                offset: usize)
                -> ParseResult<()> {
        match op {
            BinaryOperator::Mul | BinaryOperator::Div => {
                self.multiplicative = Some((term, op, offset));
            },
            BinaryOperator::Add | BinaryOperator::Sub => {
                let sum = self.add(stream, term)?;
                self.additive = Some((sum, op, offset));
            },
        }
        Ok(())
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for numbers and parentheses.
///
/// # Example
/// ```
/// use treecalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Slash), Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Number(_) | Token::LParen | Token::RParen => None,
    }
}
