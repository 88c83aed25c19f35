/// Numeric value representation.
///
/// Defines the `Value` type that flows through the postfix sequence, the
/// value stack and the variable store, together with its conversions and
/// the integral-result normalization.
pub mod core;
