/// Represents all errors that can occur while computing a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// The right operand of `/` evaluated to zero.
    #[error("Division by zero")]
    DivisionByZero {
        /// The byte offset in the source at which the divisor starts.
        position: usize,
    },
    /// The result of an operation is too large to be represented as a finite
    /// real.
    #[error("Result is too large")]
    Overflow {
        /// The byte offset in the source at which the right operand starts.
        position: usize,
    },
}

impl RuntimeError {
    /// Returns the byte offset at which the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::DivisionByZero { position } | Self::Overflow { position } => *position,
        }
    }
}
