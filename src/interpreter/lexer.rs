use std::ops::Range;

use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::value::core::Value,
    util::num::{digits_to_f64, digits_to_i64},
};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Whitespace between tokens is skipped.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"\s+")]
#[logos(error = LexError)]
pub enum Token {
    /// Integer literal tokens, such as `42` or `007`.
    #[regex(r"[0-9]+", parse_number)]
    Number(Value),
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
    /// End of input. Never matched by the scanner itself; [`Lexer`] produces
    /// it once the source is exhausted.
    End,
}

impl Token {
    /// Returns the literal value carried by a [`Token::Number`].
    #[must_use]
    pub const fn value(&self) -> Option<Value> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns `true` if both tokens are of the same kind, ignoring any
    /// literal value.
    ///
    /// # Example
    /// ```
    /// use arithex::interpreter::{lexer::Token, value::core::Value};
    ///
    /// assert!(Token::Number(Value::Integer(1)).same_kind(&Token::Number(Value::Integer(2))));
    /// assert!(!Token::Plus.same_kind(&Token::Minus));
    /// ```
    #[must_use]
    pub fn same_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "number {value}"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::End => write!(f, "end of input"),
        }
    }
}

/// Turns a run of decimal digits into a number.
///
/// The run is accumulated as an `i64`. A run too long for `i64` is converted
/// to the nearest `f64` instead, which is only exact up to `2^53`.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<Value, LexError> {
    let digits = lex.slice();
    if let Some(value) = digits_to_i64(digits) {
        return Ok(Value::from(value));
    }
    tracing::debug!(digits, "integer literal overflows i64, lexing as real");
    digits_to_f64(digits).map(Value::from)
                         .ok_or(LexError::LiteralTooLarge)
}

/// The failures of the underlying token scanner.
///
/// [`Lexer`] turns these into [`ParseError`]s carrying the source position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    /// No token starts at the current character.
    #[default]
    InvalidCharacter,
    /// A number literal does not fit in a finite `f64`.
    LiteralTooLarge,
}

/// A lazy, pull-based tokenizer over a single line of source.
///
/// Tokens are produced one at a time by [`Lexer::next_token`]. The cursor
/// only ever moves forward; once the input is exhausted every further call
/// yields [`Token::End`].
///
/// # Example
/// ```
/// use arithex::interpreter::{
///     lexer::{Lexer, Token},
///     value::core::Value,
/// };
///
/// let mut lexer = Lexer::new(" 12 *3");
/// assert_eq!(lexer.next_token().unwrap(), Token::Number(Value::Integer(12)));
/// assert_eq!(lexer.next_token().unwrap(), Token::Star);
/// assert_eq!(lexer.next_token().unwrap(), Token::Number(Value::Integer(3)));
/// assert_eq!(lexer.next_token().unwrap(), Token::End);
/// assert_eq!(lexer.next_token().unwrap(), Token::End);
/// assert_eq!(lexer.position(), 6);
/// ```
pub struct Lexer<'src> {
    inner:     logos::Lexer<'src, Token>,
    span:      Range<usize>,
    exhausted: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:     Token::lexer(source),
               span:      0..0,
               exhausted: false, }
    }

    /// Returns the next token in the input.
    ///
    /// Leading whitespace is skipped. At the end of input this returns
    /// [`Token::End`], and keeps doing so on every further call.
    ///
    /// # Errors
    /// - [`ParseError::InvalidCharacter`] if the next non-whitespace character
    ///   starts no token.
    /// - [`ParseError::LiteralTooLarge`] if a number literal does not fit in a
    ///   finite `f64`.
    ///
    /// The lexer does not recover from either; the caller is expected to
    /// abandon the input.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        match self.inner.next() {
            Some(Ok(token)) => {
                self.span = self.inner.span();
                tracing::trace!(%token, span = ?self.span, "lexed token");
                Ok(token)
            },
            Some(Err(LexError::LiteralTooLarge)) => {
                self.span = self.inner.span();
                tracing::debug!(position = self.span.start, "literal too large");
                Err(ParseError::LiteralTooLarge { position: self.span.start })
            },
            Some(Err(LexError::InvalidCharacter)) => {
                self.span = self.inner.span();
                let character = self.inner.source()[self.span.start..].chars()
                                                                      .next()
                                                                      .unwrap_or(char::REPLACEMENT_CHARACTER);
                tracing::debug!(%character, position = self.span.start, "invalid character");
                Err(ParseError::InvalidCharacter { character,
                                                   position: self.span.start })
            },
            None => {
                let end = self.inner.source().len();
                self.span = end..end;
                Ok(Token::End)
            },
        }
    }

    /// Returns the cursor: the byte offset just past the last token returned.
    #[must_use]
    pub fn position(&self) -> usize {
        self.span.end
    }

    /// Returns the byte range of the last token returned.
    ///
    /// For [`Token::End`] this is the empty range at the end of the source.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns the source text being tokenized.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.inner.source()
    }
}

/// Yields every token before [`Token::End`].
///
/// Iteration stops after the end of input or after the first error.
impl Iterator for Lexer<'_> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        match self.next_token() {
            Ok(Token::End) => {
                self.exhausted = true;
                None
            },
            Err(e) => {
                self.exhausted = true;
                Some(Err(e))
            },
            token => Some(token),
        }
    }
}

/// Tokenizes the whole of `source`, excluding the trailing [`Token::End`].
///
/// # Errors
/// Returns the first lexing error encountered.
///
/// # Example
/// ```
/// use arithex::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 - -2").unwrap();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[1], Token::Minus);
///
/// assert!(tokenize("1 % 2").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    Lexer::new(source).collect()
}
