/// Numeric conversion helpers.
///
/// Conversions between `i64` and `f64` and the digit accumulation used when
/// turning a run of decimal digits into a number.
pub mod num;
