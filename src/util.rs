/// Numeric conversion helpers.
///
/// This module provides the conversions between arbitrary-precision
/// integers and `f64` that the evaluator needs when an operation leaves
/// exact integer arithmetic, when it folds an integral real result back into
/// an integer, and when it prints a real.
pub mod num;
