use std::ops::Range;

use crate::{
    error::{Error, ParseError},
    interpreter::{
        lexer::{Lexer, Token},
        value::core::Value,
    },
};

/// Result type used by the parser.
///
/// Parsing and evaluation happen in the same pass, so a grammar rule can fail
/// with either a [`ParseError`] or a
/// [`RuntimeError`](crate::error::RuntimeError).
pub type ParseResult<T> = Result<T, Error>;

/// A recursive-descent parser that evaluates as it parses.
///
/// The parser pulls tokens from its [`Lexer`] one at a time and never looks
/// more than one token ahead. Each grammar rule consumes exactly the tokens of
/// its production and returns the value of that production; no syntax tree is
/// built.
///
/// Grammar, from lowest to highest precedence:
/// ```text
///     expression := term (("+" | "-") term)*
///     term       := factor (("*" | "/") factor)*
///     factor     := NUMBER | "+" factor | "-" factor
/// ```
pub struct Parser<'src> {
    lexer:   Lexer<'src>,
    /// The next unconsumed token.
    pub(in crate::interpreter::parser) current: Token,
    /// Byte range of `current` in the source.
    pub(in crate::interpreter::parser) span:    Range<usize>,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source` and reads the first token.
    ///
    /// # Errors
    /// Returns [`ParseError::InvalidCharacter`] if the first token cannot be
    /// lexed.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        Self::from_lexer(Lexer::new(source))
    }

    /// Creates a parser from an existing lexer and reads its next token.
    ///
    /// # Errors
    /// Returns [`ParseError::InvalidCharacter`] if the token cannot be lexed.
    pub fn from_lexer(mut lexer: Lexer<'src>) -> ParseResult<Self> {
        let current = lexer.next_token()?;
        let span = lexer.span();
        Ok(Self { lexer,
                  current,
                  span })
    }

    /// Returns the look-ahead token.
    #[must_use]
    pub const fn current(&self) -> &Token {
        &self.current
    }

    /// Returns the source text of the look-ahead token.
    pub(in crate::interpreter::parser) fn current_text(&self) -> &'src str {
        &self.lexer.source()[self.span.clone()]
    }

    /// Consumes the look-ahead token if it is of the `expected` kind.
    ///
    /// Literal values are ignored when comparing, so any `Number` token
    /// matches an expected `Number`.
    ///
    /// # Errors
    /// - [`ParseError::UnexpectedToken`] if the look-ahead is of another kind.
    /// - [`ParseError::InvalidCharacter`] if the following token cannot be
    ///   lexed.
    pub fn consume(&mut self, expected: &Token) -> ParseResult<()> {
        if !self.current.same_kind(expected) {
            return Err(ParseError::UnexpectedToken { expected: *expected,
                                                     found:    self.current,
                                                     position: self.span.start, }.into());
        }
        tracing::trace!(token = %self.current, "consumed");
        self.current = self.lexer.next_token()?;
        self.span = self.lexer.span();
        Ok(())
    }

    /// Parses and evaluates a complete input.
    ///
    /// Runs the `expression` rule and then requires the end of input.
    ///
    /// # Errors
    /// - [`ParseError::TrailingInput`] if tokens remain after the expression.
    /// - Any error raised while lexing, parsing or evaluating the expression.
    pub fn parse(mut self) -> ParseResult<Value> {
        let value = self.parse_expression()?;

        if self.current != Token::End {
            return Err(ParseError::TrailingInput { found:    self.current,
                                                   position: self.span.start, }.into());
        }

        tracing::debug!(%value, "accepted");
        Ok(value)
    }
}

/// Parses and evaluates `source` as a single expression.
///
/// A fresh lexer and parser are created for every call, so repeated calls on
/// the same input always produce the same outcome.
///
/// # Errors
/// Returns the first lexing, parsing or evaluation error encountered.
///
/// # Example
/// ```
/// use arithex::{
///     error::{Error, ParseError},
///     interpreter::{parser::core::parse, value::core::Value},
/// };
///
/// assert_eq!(parse("2+3*4").unwrap(), Value::Integer(14));
///
/// let err = parse("3 4").unwrap_err();
/// assert!(matches!(err, Error::Parse(ParseError::TrailingInput { position: 2, .. })));
/// ```
pub fn parse(source: &str) -> ParseResult<Value> {
    Parser::new(source)?.parse()
}
