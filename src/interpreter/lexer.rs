use std::ops::Range;

use log::trace;
use logos::Logos;

use crate::error::ParseError;

/// Byte range of a token in the source expression.
pub type Span = Range<usize>;

/// A token paired with the span it was read from.
pub type Lexeme = (Token, Span);

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Runs of spaces separate tokens and are never produced.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r" +")]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Lazy token stream over an expression.
///
/// Yields tokens with their spans until the input is exhausted. The first
/// character that does not start a token is reported as
/// [`ParseError::UnrecognizedCharacter`]. Cloning the stream restarts
/// tokenization from the clone's current position.
#[derive(Clone)]
pub struct Lexer<'s> {
    inner: logos::Lexer<'s, Token>,
}

impl<'s> Lexer<'s> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'s str) -> Self {
        Self { inner: Token::lexer(source) }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Lexeme, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.inner.next()?;
        let span = self.inner.span();

        Some(match token {
                 Ok(token) => {
                     trace!("lexed {token:?} at {span:?}");
                     Ok((token, span))
                 },
                 Err(()) => Err(ParseError::UnrecognizedCharacter { text:   self.inner
                                                                                .slice()
                                                                                .to_string(),
                                                                    offset: span.start, }),
             })
    }
}

/// Tokenizes `source`.
///
/// ## Example
/// ```
/// use treecalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens: Vec<Token> = tokenize("2 * (3.5)").map(|t| t.unwrap().0).collect();
/// assert_eq!(tokens,
///            vec![Token::Number(2.0), Token::Star, Token::LParen, Token::Number(3.5), Token::RParen]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

/// Parses a numeric literal from the current token slice.
///
/// Overlong literals become infinite here and are rejected by the parser,
/// which still has the source text to quote.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
