/// Binary operator evaluation logic.
///
/// Handles the arithmetic behind `- + / * ^`, including integer overflow
/// fallback and the checks for division by zero and non-real powers.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the sign operators that are folded into operands while the
/// postfix sequence is built.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the value-stack machine that reduces a postfix sequence to a
/// single value.
pub mod core;
