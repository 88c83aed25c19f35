#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while transforming or evaluating an
/// expression.
pub enum ExpressionError {
    /// The token sequence is malformed: unbalanced parentheses, two operands
    /// or two binary operators in a row, a sign directly before `(`, a binary
    /// operator without two operands, or an empty expression.
    InvalidExpression,
    /// A token mixes letters and digits, so it is neither a number nor a
    /// variable name.
    InvalidIdentifier,
    /// A well-formed variable name that has no value yet.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Division by zero, including `0 ^ n` for negative `n`.
    DivisionByZero,
    /// A power whose result is not a real number, such as a negative base
    /// raised to a fractional exponent.
    NonRealResult,
    /// A real result that is not finite.
    Overflow,
}

impl std::fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidExpression => write!(f, "Invalid expression"),
            Self::InvalidIdentifier => write!(f, "Invalid identifier"),
            Self::UnknownVariable { .. } => write!(f, "Unknown variable"),
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::NonRealResult => write!(f, "Result is not a real number"),
            Self::Overflow => write!(f, "Result is out of range"),
        }
    }
}

impl std::error::Error for ExpressionError {}
