/// The numeric value type produced by evaluation.
///
/// Defines the `Value` enum, its conversions, and the promotion rules that
/// move a computation from exact integers to reals.
pub mod core;
