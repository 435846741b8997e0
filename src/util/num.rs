/// Converts an `i64` to `f64`, rounding to the nearest representable value.
///
/// Values with an absolute value up to `2^53` convert exactly.
///
/// ## Example
/// ```
/// use arithex::util::num::i64_to_f64_lossy;
///
/// assert_eq!(i64_to_f64_lossy(-42), -42.0);
/// assert_eq!(i64_to_f64_lossy(9_007_199_254_740_993), 9_007_199_254_740_992.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64_lossy(value: i64) -> f64 {
    value as f64
}

/// Accumulates a run of ASCII digits into an `i64` as `value * 10 + digit`.
///
/// ## Returns
/// - `Some(i64)`: The value of the run.
/// - `None`: If the run contains a non-digit or the value overflows `i64`.
///
/// ## Example
/// ```
/// use arithex::util::num::digits_to_i64;
///
/// assert_eq!(digits_to_i64("042"), Some(42));
/// assert_eq!(digits_to_i64("99999999999999999999"), None);
/// ```
#[must_use]
pub fn digits_to_i64(digits: &str) -> Option<i64> {
    digits.bytes().try_fold(0i64, |acc, byte| {
                      let digit = char::from(byte).to_digit(10)?;
                      acc.checked_mul(10)?.checked_add(i64::from(digit))
                  })
}

/// Accumulates a run of ASCII digits into the negated `i64` value of the run,
/// as `value * 10 - digit`.
///
/// Unlike negating the result of [`digits_to_i64`], this reaches `i64::MIN`.
///
/// ## Example
/// ```
/// use arithex::util::num::negated_digits_to_i64;
///
/// assert_eq!(negated_digits_to_i64("9223372036854775808"), Some(i64::MIN));
/// assert_eq!(negated_digits_to_i64("9223372036854775809"), None);
/// ```
#[must_use]
pub fn negated_digits_to_i64(digits: &str) -> Option<i64> {
    digits.bytes().try_fold(0i64, |acc, byte| {
                      let digit = char::from(byte).to_digit(10)?;
                      acc.checked_mul(10)?.checked_sub(i64::from(digit))
                  })
}

/// Converts a run of ASCII digits into the nearest `f64`.
///
/// ## Returns
/// - `Some(f64)`: The correctly rounded value; exact up to `2^53`.
/// - `None`: If the run is empty, contains a non-digit, or is too large to be
///   represented as a finite `f64`.
///
/// ## Example
/// ```
/// use arithex::util::num::digits_to_f64;
///
/// assert_eq!(digits_to_f64("12"), Some(12.0));
/// assert_eq!(digits_to_f64("99999999999999999999"), Some(1e20));
/// assert_eq!(digits_to_f64(&"9".repeat(400)), None);
/// assert_eq!(digits_to_f64("1e5"), None);
/// ```
#[must_use]
pub fn digits_to_f64(digits: &str) -> Option<f64> {
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    digits.parse::<f64>().ok().filter(|value| value.is_finite())
}
