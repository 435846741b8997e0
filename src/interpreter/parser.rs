/// Parser state and the top-level entry point.
///
/// Holds the [`Parser`](core::Parser) with its single token of look-ahead,
/// token consumption, and the check that a complete expression is followed by
/// the end of input.
pub mod core;

/// Additive and multiplicative levels of the grammar.
///
/// Left-associative folds of `+`/`-` over terms and of `*`/`/` over factors.
pub mod binary;

/// The factor level of the grammar.
///
/// Number literals and the right-recursive prefix signs.
pub mod unary;
