/// The evaluator module computes the arithmetic of the language.
///
/// The parser calls into the evaluator as soon as a production is complete,
/// so values are computed in the same pass as the input is validated.
///
/// # Responsibilities
/// - Applies the binary operators `+`, `-`, `*`, `/` and the prefix signs.
/// - Reports division by zero.
/// - Promotes integer results that overflow `i64` to reals.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens on demand: number
/// literals, the four operator symbols, and an end-of-input marker. This is
/// the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with byte spans.
/// - Skips whitespace between tokens.
/// - Reports invalid characters.
pub mod lexer;
/// The parser module validates and evaluates a token stream.
///
/// A recursive-descent parser with one token of look-ahead. Each grammar rule
/// returns the value of the text it consumed.
///
/// # Responsibilities
/// - Enforces operator precedence and associativity.
/// - Reports unexpected and trailing tokens with their location.
/// - Produces the final value of a complete expression.
pub mod parser;
/// The value module defines the numeric result type.
///
/// # Responsibilities
/// - Defines the `Value` enum with its integer and real variants.
/// - Provides the promotion from integers to reals.
pub mod value;
