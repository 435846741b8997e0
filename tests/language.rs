use arithex::{
    check,
    error::{Error, ParseError, RuntimeError},
    evaluate,
    interpreter::{lexer::Token, value::core::Value},
};

fn assert_value(src: &str, expected: Value) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "wrong value for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match evaluate(src) {
        Ok(value) => panic!("Expression {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

/// The outcome of `src` with error positions left out: the value, or the error
/// message naming its kind and offending token.
fn outcome(src: &str) -> Result<Value, String> {
    evaluate(src).map_err(|e| e.to_string())
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", Value::Integer(3));
    assert_value("8 - 5", Value::Integer(3));
    assert_value("7 * 9", Value::Integer(63));
    assert_value("10 / 4", Value::Real(2.5));
    assert_value("42", Value::Integer(42));
}

#[test]
fn precedence_and_associativity() {
    assert_value("2+3*4", Value::Integer(14));
    assert_value("2*3+4", Value::Integer(10));
    assert_value("8 - 2 - 1", Value::Integer(5));
    assert_value("16 / 4 / 2", Value::Real(2.0));
    assert_value("1 - 2 * 3 + 4", Value::Integer(-1));
}

#[test]
fn division_is_not_truncating() {
    assert_value("7/2", Value::Real(3.5));
    assert_value("6/2", Value::Real(3.0));
    assert_value("-7/2", Value::Real(-3.5));
    assert_value("1/4*2", Value::Real(0.5));

    assert!(evaluate("4/2").unwrap().is_real());
    assert!(evaluate("4*2").unwrap().is_integer());
}

#[test]
fn unary_signs() {
    assert_value("--5", Value::Integer(5));
    assert_value("+-5", Value::Integer(-5));
    assert_value("-+-+5", Value::Integer(5));
    assert_value("3 - -2", Value::Integer(5));
    assert_value("3 * -2", Value::Integer(-6));
    assert_value("3--2", Value::Integer(5));
}

#[test]
fn long_sign_chains_do_not_exhaust_the_stack() {
    let odd = "-".repeat(100_001) + "1";
    assert_value(&odd, Value::Integer(-1));

    let even = "-".repeat(100_000) + "1";
    assert_value(&even, Value::Integer(1));

    let mixed = "+-".repeat(50_000) + "7";
    assert_value(&mixed, Value::Integer(7));

    let dangling = "-".repeat(100_000);
    assert!(matches!(assert_failure(&dangling),
                     Error::Parse(ParseError::UnexpectedTokenInFactor { found: Token::End,
                                                                        position: 100_000 })));
}

#[test]
fn leading_zeros() {
    assert_value("042", Value::Integer(42));
    assert_value("000 + 7", Value::Integer(7));
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(outcome("1+2"), outcome(" 1 + 2 "));
    assert_eq!(outcome("1+2"), outcome("\t1 +\r2\n"));
    assert_eq!(outcome("3 +"), outcome("3+"));
    assert_eq!(outcome("3 4"), outcome("  3   4"));
    assert_eq!(outcome(" 10 /0"), outcome("10/0"));
}

#[test]
fn whitespace_only_shifts_error_positions() {
    assert_eq!(assert_failure("3+").position(), 2);
    assert_eq!(assert_failure("3 +").position(), 3);
}

#[test]
fn evaluation_is_repeatable() {
    for src in ["2+3*4", "10/0", "3 4", "(1)", "7/2"] {
        assert_eq!(evaluate(src), evaluate(src), "outcome changed for {src:?}");
    }
}

#[test]
fn integer_overflow_promotes_to_real() {
    assert_value("9223372036854775807 + 1", Value::Real(9_223_372_036_854_775_808.0));
    assert_value("-9223372036854775807 - 1", Value::Integer(i64::MIN));
    assert_value("4294967296 * 4294967296", Value::Real(18_446_744_073_709_551_616.0));
    assert_value("100000000000000000000", Value::Real(1e20));
    assert_value("99999999999999999999", Value::Real(1e20));
}

#[test]
fn most_negative_integer_stays_exact() {
    assert_value("-9223372036854775808", Value::Integer(i64::MIN));
    assert_value("---9223372036854775808", Value::Integer(i64::MIN));
    assert_value("- -9223372036854775808", Value::Real(9_223_372_036_854_775_808.0));
    assert_value("-9223372036854775809", Value::Real(-9_223_372_036_854_775_808.0));
    assert_value("0 - 9223372036854775808", Value::Real(-9_223_372_036_854_775_808.0));
}

#[test]
fn literals_beyond_the_real_range_are_errors() {
    let huge = "9".repeat(400);
    assert_eq!(assert_failure(&huge),
               Error::Parse(ParseError::LiteralTooLarge { position: 0 }));

    let err = assert_failure(&format!("1 + {huge}"));
    assert_eq!(err, Error::Parse(ParseError::LiteralTooLarge { position: 4 }));
    assert_eq!(err.to_string(), "Literal is too large");

    let largest = "9".repeat(308);
    assert!(evaluate(&largest).unwrap().is_real());
}

#[test]
fn real_results_stay_finite() {
    let x = "9".repeat(200);

    let square = format!("{x} * {x}");
    let err = assert_failure(&square);
    assert_eq!(err, Error::Runtime(RuntimeError::Overflow { position: 203 }));
    assert_eq!(err.to_string(), "Result is too large");

    let cancelled = format!("{x} * {x} - {x} * {x}");
    assert!(matches!(assert_failure(&cancelled), Error::Runtime(RuntimeError::Overflow { .. })));
    assert_eq!(evaluate(&cancelled), evaluate(&cancelled));

    let quotient = format!("{x} * 1 / 1 / 1 / 1 / 1 / 1 / 1 * {x}");
    assert!(matches!(assert_failure(&quotient), Error::Runtime(RuntimeError::Overflow { .. })));

    let near_limit = format!("{x} / 1");
    assert!(evaluate(&near_limit).unwrap().as_real().is_finite());
}

#[test]
fn grouping_is_an_invalid_character() {
    let err = assert_failure("(2+3)");
    assert_eq!(err,
               Error::Parse(ParseError::InvalidCharacter { character: '(',
                                                           position:  0, }));
}

#[test]
fn invalid_character_reports_position() {
    let err = assert_failure("1 + 2 % 3");
    assert_eq!(err,
               Error::Parse(ParseError::InvalidCharacter { character: '%',
                                                           position:  6, }));
    assert_eq!(err.to_string(), "Invalid character '%'");
}

#[test]
fn invalid_multibyte_character() {
    let err = assert_failure("2 × 3");
    assert_eq!(err,
               Error::Parse(ParseError::InvalidCharacter { character: '×',
                                                           position:  2, }));
}

#[test]
fn division_by_zero_is_error() {
    let err = assert_failure("10/0");
    assert_eq!(err, Error::Runtime(RuntimeError::DivisionByZero { position: 3 }));
    assert_eq!(err.to_string(), "Division by zero");

    assert!(matches!(assert_failure("1 / (0)"), Error::Parse(_)));
    assert!(matches!(assert_failure("1 / -0"), Error::Runtime(_)));
    assert!(matches!(assert_failure("1 / (1 - 1)"), Error::Parse(_)));
    assert!(matches!(assert_failure("5 / 0 * 2"), Error::Runtime(_)));
}

#[test]
fn division_by_zero_is_reported_after_the_divisor_parses() {
    // The divisor fails to parse before it can be compared with zero.
    assert!(matches!(assert_failure("1 / "),
                     Error::Parse(ParseError::UnexpectedTokenInFactor { found: Token::End,
                                                                        .. })));
}

#[test]
fn dangling_operator_is_error() {
    let err = assert_failure("3 +");
    assert_eq!(err,
               Error::Parse(ParseError::UnexpectedTokenInFactor { found:    Token::End,
                                                                  position: 3, }));

    assert!(matches!(assert_failure("3 * / 4"),
                     Error::Parse(ParseError::UnexpectedTokenInFactor { found: Token::Slash,
                                                                        .. })));
    assert!(matches!(assert_failure("*3"),
                     Error::Parse(ParseError::UnexpectedTokenInFactor { found: Token::Star,
                                                                        position: 0 })));
}

#[test]
fn empty_input_is_error() {
    assert!(matches!(assert_failure(""),
                     Error::Parse(ParseError::UnexpectedTokenInFactor { found: Token::End,
                                                                        position: 0 })));
    assert!(matches!(assert_failure("   "),
                     Error::Parse(ParseError::UnexpectedTokenInFactor { found: Token::End,
                                                                        position: 3 })));
}

#[test]
fn trailing_input_is_error() {
    let err = assert_failure("3 4");
    assert_eq!(err,
               Error::Parse(ParseError::TrailingInput { found:    Token::Number(Value::Integer(4)),
                                                        position: 2, }));
    assert_eq!(err.to_string(), "Unexpected token after expression: found number 4");
}

#[test]
fn first_error_wins() {
    // The trailing number is detected before the invalid character is lexed.
    assert!(matches!(assert_failure("1 2 $"), Error::Parse(ParseError::TrailingInput { .. })));
    // The invalid character is met while looking ahead past the divisor.
    assert!(matches!(assert_failure("1 / 0 $"),
                     Error::Parse(ParseError::InvalidCharacter { character: '$', .. })));
}

#[test]
fn check_discards_the_value() {
    assert_eq!(check("2+3*4"), Ok(()));
    assert_eq!(check("10/0"),
               Err(Error::Runtime(RuntimeError::DivisionByZero { position: 3 })));
}
