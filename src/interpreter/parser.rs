/// Core transformation loop.
///
/// Defines the `Transformer` state, the result alias and the token dispatch
/// that turns an infix token sequence into postfix form.
pub mod core;

/// Binary operators and parentheses.
///
/// Maintains the operator stack: precedence-driven popping, matching of
/// closing parentheses and the final drain.
pub mod binary;

/// Operands and sign operators.
///
/// Keeps pending prefix signs and folds them into numbers and variable
/// values as soon as the operand is recognized.
pub mod unary;

/// Word classification helpers shared by the transformer.
pub mod utils;
