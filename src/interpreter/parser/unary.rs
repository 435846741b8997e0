use crate::{
    error::ParseError,
    interpreter::{
        evaluator::unary::eval_unary,
        lexer::Token,
        parser::core::{ParseResult, Parser},
        value::core::Value,
    },
    operator::UnaryOperator,
    util::num::negated_digits_to_i64,
};

impl Parser<'_> {
    /// Parses and evaluates a factor.
    ///
    /// A factor is a number literal or a prefix sign applied to another
    /// factor. Signs are right-recursive and may repeat: `--5` is `5` and
    /// `+-5` is `-5`. The run of signs is consumed iteratively and the
    /// literal is negated once if it holds an odd number of `-`, so long runs
    /// do not grow the stack.
    ///
    /// Grammar:
    /// ```text
    ///     factor := NUMBER
    ///             | "+" factor
    ///             | "-" factor
    /// ```
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedTokenInFactor`] if the look-ahead is an
    /// operator that cannot start a factor or the end of input.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn parse_factor(&mut self) -> ParseResult<Value> {
        let mut sign = UnaryOperator::Plus;

        loop {
            match self.current {
                Token::Plus => self.consume(&Token::Plus)?,
                Token::Minus => {
                    self.consume(&Token::Minus)?;
                    sign = match sign {
                        UnaryOperator::Plus => UnaryOperator::Negate,
                        UnaryOperator::Negate => UnaryOperator::Plus,
                    };
                },
                Token::Number(value) => {
                    let literal = self.current_text();
                    self.consume(&Token::Number(value))?;
                    tracing::trace!(%sign, %value, "signed literal");

                    // `-9223372036854775808` lexes as a real but is exactly i64::MIN.
                    if sign == UnaryOperator::Negate
                       && value.is_real()
                       && let Some(exact) = negated_digits_to_i64(literal)
                    {
                        return Ok(Value::from(exact));
                    }
                    return Ok(eval_unary(sign, value));
                },
                found => {
                    return Err(ParseError::UnexpectedTokenInFactor { found,
                                                                     position: self.span.start }.into());
                },
            }
        }
    }
}
