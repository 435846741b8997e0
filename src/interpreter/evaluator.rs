use crate::error::RuntimeError;

/// Binary operator evaluation.
///
/// Implements `+`, `-`, `*` and `/` over values, including the division by
/// zero check and the promotion of overflowing integer results to reals.
pub mod binary;

/// Unary operator evaluation.
///
/// Handles the prefix `+` and `-` signs.
pub mod unary;

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;
