use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Span, Token},
        parser::{
            core::ParseResult,
            stream::{Parsed, TokenStream},
        },
    },
};

/// What a primary expression turned out to be.
#[derive(Debug)]
pub(in crate::interpreter::parser) enum Primary {
    /// A complete operand.
    Literal(Parsed),
    /// An opening parenthesis at the given offset. The group's contents
    /// follow in the stream.
    Group(usize),
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar: numeric
/// literals and parenthesized expressions, which reset precedence.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | "(" expression ")"
/// ```
///
/// Only the opening parenthesis is consumed here; the caller parses the
/// group's contents and finishes it with [`close_grouping`].
///
/// # Errors
/// Running out of input here means an operand is missing; the error names
/// what came before it (see [`TokenStream::end_of_input`]). Any other token
/// is unexpected.
pub(in crate::interpreter::parser) fn parse_primary(stream: &mut TokenStream<'_>)
                                                    -> ParseResult<Primary> {
    let Some((token, span)) = stream.peek() else {
        return Err(stream.end_of_input());
    };

    match token {
        Token::Number(value) => parse_literal(stream, *value, span).map(Primary::Literal),
        Token::LParen => {
            stream.advance();
            stream.open_group()?;
            Ok(Primary::Group(span.start))
        },
        Token::Plus | Token::Minus | Token::Star | Token::Slash | Token::RParen => {
            Err(ParseError::UnexpectedToken { token:    stream.text(span),
                                              expected: "a number or '('",
                                              offset:   span.start, })
        },
    }
}

fn parse_literal(stream: &mut TokenStream<'_>, value: f64, span: &Span) -> ParseResult<Parsed> {
    stream.advance();

    if !value.is_finite() {
        return Err(ParseError::LiteralTooLarge { literal: stream.text(span),
                                                 offset:  span.start, });
    }

    Ok(Parsed { expr:   Expr::Number { value,
                                       offset: span.start, },
                height: 1, })
}

/// Finishes the group opened at `offset` around the already parsed `inner`
/// expression.
///
/// The group keeps its own node in the syntax tree so the tree mirrors the
/// source; normalization removes it later.
pub(in crate::interpreter::parser) fn close_grouping(stream: &mut TokenStream<'_>,
                                                     inner: Parsed,
                                                     offset: usize)
                                                     -> ParseResult<Parsed> {
    match stream.advance() {
        Some((Token::RParen, _)) => {
            stream.close_group();
            let height = inner.height + 1;
            stream.check_height(height)?;
            Ok(Parsed { expr: Expr::Parenthesized { inner: Box::new(inner.expr),
                                                    offset },
                        height })
        },
        Some((_, span)) => Err(ParseError::UnexpectedToken { token:    stream.text(span),
                                                             expected: "')'",
                                                             offset:   span.start, }),
        None => Err(ParseError::UnmatchedParenthesis { offset }),
    }
}
