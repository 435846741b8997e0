use crate::interpreter::lexer::Token;

/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant records the byte offset of the offending input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The lexer met a character that starts no token.
    #[error("Invalid character '{character}'")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// The byte offset of the character.
        position:  usize,
    },
    /// A number literal is too large to be represented as a finite real.
    #[error("Literal is too large")]
    LiteralTooLarge {
        /// The byte offset of the literal.
        position: usize,
    },
    /// A specific token was required but another one was found.
    #[error("Unexpected token type: expected {expected}, found {found}")]
    UnexpectedToken {
        /// The token that was required.
        expected: Token,
        /// The token encountered.
        found:    Token,
        /// The byte offset of the token encountered.
        position: usize,
    },
    /// A factor started with something other than a number or a sign.
    #[error("Unexpected token type in factor: found {found}")]
    UnexpectedTokenInFactor {
        /// The token encountered.
        found:    Token,
        /// The byte offset of the token encountered.
        position: usize,
    },
    /// A complete expression was followed by more input.
    #[error("Unexpected token after expression: found {found}")]
    TrailingInput {
        /// The first extra token.
        found:    Token,
        /// The byte offset of the extra token.
        position: usize,
    },
}

impl ParseError {
    /// Returns the byte offset at which the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidCharacter { position, .. }
            | Self::LiteralTooLarge { position }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedTokenInFactor { position, .. }
            | Self::TrailingInput { position, .. } => *position,
        }
    }
}
