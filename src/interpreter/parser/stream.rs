use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Span, Token},
        parser::core::ParseResult,
    },
};

/// A parsed subtree together with its height.
///
/// A lone number has height 1; every operator or parenthesis adds one level
/// above its tallest operand.
#[derive(Debug)]
pub(in crate::interpreter::parser) struct Parsed {
    pub expr:   Expr,
    pub height: usize,
}

/// Cursor over the lexed tokens of one expression.
pub(in crate::interpreter::parser) struct TokenStream<'a> {
    source:    &'a str,
    tokens:    &'a [Lexeme],
    position:  usize,
    open:      usize,
    max_depth: usize,
}

impl<'a> TokenStream<'a> {
    pub fn new(source: &'a str, tokens: &'a [Lexeme], max_depth: usize) -> Self {
        Self { source,
               tokens,
               position: 0,
               open: 0,
               max_depth }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&self) -> Option<&'a Lexeme> {
        self.tokens.get(self.position)
    }

    /// Consumes and returns the next token.
    pub fn advance(&mut self) -> Option<&'a Lexeme> {
        let lexeme = self.tokens.get(self.position)?;
        self.position += 1;
        Some(lexeme)
    }

    /// The most recently consumed token.
    pub fn last(&self) -> Option<&'a Lexeme> {
        self.position
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
    }

    /// The source text a token was read from.
    pub fn text(&self, span: &Span) -> String {
        self.source.get(span.clone()).unwrap_or_default().to_string()
    }

    /// Builds the error for input that ends where an operand was required.
    ///
    /// What went missing depends on the token that came before: nothing at
    /// all, an opening parenthesis, or an operator.
    pub fn end_of_input(&self) -> ParseError {
        match self.last() {
            None => ParseError::EmptyInput,
            Some((Token::LParen, span)) => ParseError::UnmatchedParenthesis { offset: span.start },
            Some((_, span)) => ParseError::TrailingOperator { operator: self.text(span),
                                                              offset:   span.start, },
        }
    }

    /// Records entry into a parenthesized group.
    ///
    /// A group nested `n` deep already forces a tree of height `n + 1`, so
    /// the limit is checked here, before any of the group is parsed.
    pub fn open_group(&mut self) -> ParseResult<()> {
        self.open += 1;
        self.check_height(self.open + 1)
    }

    pub fn close_group(&mut self) {
        self.open = self.open.saturating_sub(1);
    }

    pub fn check_height(&self, height: usize) -> ParseResult<()> {
        if height > self.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.max_depth });
        }
        Ok(())
    }

    /// Joins two operands under `op`, enforcing the depth limit.
    pub fn combine(&self,
                   left: Parsed,
                   op: BinaryOperator,
                   offset: usize,
                   right: Parsed)
                   -> ParseResult<Parsed> {
        let height = 1 + left.height.max(right.height);
        self.check_height(height)?;

        Ok(Parsed { expr: Expr::BinaryOp { left: Box::new(left.expr),
                                           op,
                                           right: Box::new(right.expr),
                                           offset },
                    height })
    }
}
