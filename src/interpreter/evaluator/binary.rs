/// Operator dispatch and result checks.
pub mod core;

/// Addition, subtraction, multiplication and division.
pub mod scalar;

/// Exponentiation.
pub mod power;
