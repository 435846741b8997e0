/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: invalid characters, unexpected tokens, and input left over after a
/// complete expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error types raised while computing the value of an expression,
/// such as division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error that can end an evaluation.
///
/// This is the `Rejected` outcome of [`evaluate`](crate::evaluate). Both
/// variants are transparent, so the message is the one of the wrapped error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The input is not a well-formed expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The input is well-formed but its value cannot be computed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns the byte offset into the source at which the error was
    /// detected.
    ///
    /// # Example
    /// ```
    /// use arithex::evaluate;
    ///
    /// let err = evaluate("1 + $").unwrap_err();
    /// assert_eq!(err.position(), 4);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Parse(e) => e.position(),
            Self::Runtime(e) => e.position(),
        }
    }
}
