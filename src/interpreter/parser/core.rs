use std::mem;

use log::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, tokenize},
        parser::{
            binary::{Group, token_to_binary_operator},
            primary::{Primary, close_grouping, parse_primary},
            stream::{Parsed, TokenStream},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Default maximum depth of a syntax tree.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// The grammar settings used to parse expressions.
///
/// A `Parser` is an immutable value: build it once and share it by reference
/// between as many parses (and threads) as needed. [`Parser::DEFAULT`] is
/// available as a constant, so no global state is involved.
///
/// ## Example
/// ```
/// use treecalc::{ast::Expr, interpreter::parser::core::Parser};
///
/// let parser = Parser::new();
/// let expr = parser.parse("(1 + 2) * 3").unwrap();
/// assert!(matches!(expr, Expr::BinaryOp { .. }));
///
/// let shallow = Parser::with_max_depth(2);
/// assert!(shallow.parse("(1 + 2) * 3").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parser {
    max_depth: usize,
}

impl Parser {
    /// A parser with the default depth limit.
    pub const DEFAULT: Self = Self { max_depth: DEFAULT_MAX_DEPTH };

    /// Creates a parser with the default depth limit.
    #[must_use]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Creates a parser that rejects syntax trees deeper than `max_depth`.
    ///
    /// Depth counts every level of the tree, including the leaves and the
    /// levels introduced by parentheses.
    #[must_use]
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// The maximum syntax tree depth this parser accepts.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parses a complete expression.
    ///
    /// The whole input is tokenized first, so an unrecognized character is
    /// reported before any grammar error. The entire token stream must form
    /// exactly one expression.
    ///
    /// # Errors
    /// Returns a `ParseError` for empty input, unrecognized characters,
    /// unexpected tokens, missing operands, unmatched parentheses, trailing
    /// input, overlong literals, or a tree deeper than the configured limit.
    pub fn parse(&self, source: &str) -> ParseResult<Expr> {
        let tokens = tokenize(source).collect::<ParseResult<Vec<Lexeme>>>()?;
        debug!("parsing {} tokens from {source:?}", tokens.len());

        if tokens.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let mut stream = TokenStream::new(source, &tokens, self.max_depth);
        let parsed = parse_expression(&mut stream)?;

        if let Some((_, span)) = stream.peek() {
            return Err(ParseError::TrailingInput { token:  stream.text(span),
                                                   offset: span.start, });
        }

        debug!("parsed tree of height {}", parsed.height);
        Ok(parsed.expr)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Parses a full expression.
///
/// The precedence levels are folded by [`Group`]. Parentheses do not
/// recurse: each opening parenthesis sets the current group aside on an
/// explicit stack, so nesting is bounded by the depth limit and never by
/// the thread's stack.
///
/// Grammar: `expression := additive`
fn parse_expression(stream: &mut TokenStream<'_>) -> ParseResult<Parsed> {
    let mut enclosing: Vec<(usize, Group)> = Vec::new();
    let mut group = Group::default();

    loop {
        let mut operand = match parse_primary(stream)? {
            Primary::Literal(parsed) => parsed,
            Primary::Group(offset) => {
                enclosing.push((offset, mem::take(&mut group)));
                continue;
            },
        };

        // Close every group that ends here, then wait for the next operand.
        loop {
            let term = group.multiply(stream, operand)?;
            if let Some((token, span)) = stream.peek()
               && let Some(op) = token_to_binary_operator(token)
            {
                stream.advance();
                group.push(stream, term, op, span.start)?;
                break;
            }

            let inner = group.add(stream, term)?;
            let Some((offset, outer)) = enclosing.pop() else {
                return Ok(inner);
            };
            operand = close_grouping(stream, inner, offset)?;
            group = outer;
        }
    }
}
