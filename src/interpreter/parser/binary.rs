use crate::{
    interpreter::{
        evaluator::binary::eval_binary,
        lexer::Token,
        parser::core::{ParseResult, Parser},
        value::core::Value,
    },
    operator::BinaryOperator,
};

impl Parser<'_> {
    /// Parses and evaluates addition and subtraction.
    ///
    /// Handles left-associative binary operators: `+` and `-`, so `8 - 2 - 1`
    /// is `(8 - 2) - 1`.
    ///
    /// The rule is: `expression := term (("+" | "-") term)*`
    ///
    /// # Errors
    /// Propagates any error from the terms or their combination.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn parse_expression(&mut self) -> ParseResult<Value> {
        let mut result = self.parse_term()?;

        while let Some(op) = token_to_binary_operator(&self.current)
              && op.is_additive()
        {
            let token = self.current;
            self.consume(&token)?;
            let position = self.span.start;
            let right = self.parse_term()?;
            result = eval_binary(op, result, right, position)?;
        }

        Ok(result)
    }

    /// Parses and evaluates multiplication and division.
    ///
    /// Handles left-associative operators: `*` and `/`. Both operands of `/`
    /// are fully parsed before the division by zero check.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    ///
    /// # Errors
    /// Propagates any error from the factors, and
    /// [`RuntimeError::DivisionByZero`](crate::error::RuntimeError::DivisionByZero)
    /// if a divisor is zero.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn parse_term(&mut self) -> ParseResult<Value> {
        let mut result = self.parse_factor()?;

        while let Some(op) = token_to_binary_operator(&self.current)
              && op.is_multiplicative()
        {
            let token = self.current;
            self.consume(&token)?;
            let position = self.span.start;
            let right = self.parse_factor()?;
            result = eval_binary(op, result, right, position)?;
        }

        Ok(result)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for numbers and the end of input.
///
/// # Example
/// ```
/// use arithex::{
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
///     operator::BinaryOperator,
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::End), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Number(_) | Token::End => None,
    }
}
