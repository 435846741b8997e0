use crate::{interpreter::value::core::Value, operator::UnaryOperator};

/// Evaluates a prefix sign applied to a value.
///
/// `+` returns the value unchanged. `-` negates it; negating `i64::MIN`
/// produces a real since the result does not fit in `i64`.
///
/// # Example
/// ```
/// use arithex::{
///     interpreter::{evaluator::unary::eval_unary, value::core::Value},
///     operator::UnaryOperator,
/// };
///
/// assert_eq!(eval_unary(UnaryOperator::Negate, Value::Integer(5)), Value::Integer(-5));
/// assert_eq!(eval_unary(UnaryOperator::Plus, Value::Real(-1.5)), Value::Real(-1.5));
/// ```
#[must_use]
pub fn eval_unary(op: UnaryOperator, value: Value) -> Value {
    match (op, value) {
        (UnaryOperator::Plus, _) => value,
        (UnaryOperator::Negate, Value::Integer(n)) => {
            n.checked_neg()
             .map_or_else(|| Value::Real(-value.as_real()), Value::Integer)
        },
        (UnaryOperator::Negate, Value::Real(r)) => Value::Real(-r),
    }
}
