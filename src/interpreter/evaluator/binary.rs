use crate::{
    error::RuntimeError,
    interpreter::{evaluator::EvalResult, value::core::Value},
    operator::BinaryOperator,
};

/// Evaluates a binary arithmetic operation.
///
/// Two integers are combined exactly; if the exact result does not fit in
/// `i64` it is computed in `f64` instead. Division always produces a real:
/// `7 / 2` is `3.5` and `6 / 2` is `3.0`. Real results are always finite.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Byte offset of the right operand, for error reporting.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] if `op` is `/` and `right` is zero.
/// - [`RuntimeError::Overflow`] if the result does not fit in a finite `f64`.
///
/// # Example
/// ```
/// use arithex::{
///     interpreter::{evaluator::binary::eval_binary, value::core::Value},
///     operator::BinaryOperator,
/// };
///
/// let sum = eval_binary(BinaryOperator::Add, Value::Integer(3), Value::Integer(4), 0);
/// assert_eq!(sum.unwrap(), Value::Integer(7));
///
/// let quotient = eval_binary(BinaryOperator::Div, Value::Integer(7), Value::Integer(2), 0);
/// assert_eq!(quotient.unwrap(), Value::Real(3.5));
///
/// assert!(eval_binary(BinaryOperator::Div, Value::Integer(1), Value::Real(0.0), 0).is_err());
/// assert!(eval_binary(BinaryOperator::Mul, Value::Real(1e200), Value::Real(1e200), 0).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: Value,
                   right: Value,
                   position: usize)
                   -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Mul, Sub};
    use Value::Integer;

    let (integer_op, real_op): (fn(i64, i64) -> Option<i64>, fn(f64, f64) -> f64) = match op {
        Add => (i64::checked_add, |a, b| a + b),
        Sub => (i64::checked_sub, |a, b| a - b),
        Mul => (i64::checked_mul, |a, b| a * b),
        Div => {
            if right.is_zero() {
                tracing::debug!(position, "division by zero");
                return Err(RuntimeError::DivisionByZero { position });
            }
            return finite(left.as_real() / right.as_real(), position);
        },
    };

    match left.promote_to_real(right) {
        (Integer(a), Integer(b)) => match integer_op(a, b) {
            Some(exact) => Ok(Value::from(exact)),
            None => {
                tracing::debug!(%op, a, b, "integer overflow, promoting to real");
                finite(real_op(left.as_real(), right.as_real()), position)
            },
        },
        (a, b) => finite(real_op(a.as_real(), b.as_real()), position),
    }
}

/// Wraps a real result, rejecting infinities and NaN.
fn finite(value: f64, position: usize) -> EvalResult<Value> {
    if value.is_finite() {
        Ok(Value::from(value))
    } else {
        tracing::debug!(position, "real result out of range");
        Err(RuntimeError::Overflow { position })
    }
}
