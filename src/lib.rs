//! # arithex
//!
//! arithex is a single-pass interpreter for integer arithmetic expressions.
//! It lexes, parses and evaluates one line of text such as `2 + 3 * -4 / 5`
//! with the usual precedence rules, and either returns the computed value or
//! a structured error describing what went wrong and where.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{parser::core::parse, value::core::Value},
};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// evaluating an expression. Every error carries the byte offset at which it
/// was detected.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Provides the fixed, human-readable message of each failure.
pub mod error;
/// Orchestrates the process of evaluating an expression.
///
/// This module ties together lexing, parsing, evaluation and the value
/// representation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator, and value types.
/// - Provides the entry points used by [`evaluate`] and [`check`].
pub mod interpreter;
/// The arithmetic operators of the language.
///
/// Binary `+`, `-`, `*`, `/` and the prefix signs, shared between the parser
/// and the evaluator.
pub mod operator;
/// General utilities for numeric conversion.
///
/// # Responsibilities
/// - Convert between `i64` and `f64`.
/// - Accumulate digit runs into numbers without bounds failures.
pub mod util;

/// Evaluates a single arithmetic expression.
///
/// The source is one line of text without its trailing newline. On success
/// the computed value is returned; integers stay exact while they can, and
/// any division produces a real.
///
/// # Errors
/// Returns an error if the input contains an invalid character, is not a
/// well-formed expression, or divides by zero.
///
/// # Examples
/// ```
/// use arithex::{evaluate, interpreter::value::core::Value};
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), Value::Integer(14));
/// assert_eq!(evaluate("7 / 2").unwrap(), Value::Real(3.5));
///
/// // Parentheses are not part of the language.
/// assert!(evaluate("(2 + 3)").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Value, Error> {
    let span = tracing::debug_span!("evaluate", source);
    let _enter = span.enter();

    let outcome = parse(source);
    if let Err(e) = &outcome {
        tracing::debug!(error = %e, position = e.position(), "rejected");
    }
    outcome
}

/// Checks whether `source` is a valid expression with a computable value.
///
/// This is [`evaluate`] with the value discarded, for callers that only need
/// the pass/fail outcome.
///
/// # Errors
/// Returns the same errors as [`evaluate`].
///
/// # Examples
/// ```
/// use arithex::check;
///
/// assert!(check("--5").is_ok());
/// assert!(check("10 / 0").is_err());
/// ```
pub fn check(source: &str) -> Result<(), Error> {
    evaluate(source).map(|_| ())
}
