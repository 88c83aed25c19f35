/// The evaluator module reduces postfix sequences to values.
///
/// The evaluator runs a value-stack machine over a postfix sequence,
/// performs the arithmetic of each operator and normalizes the final result.
///
/// # Responsibilities
/// - Applies binary operators in operand order.
/// - Applies sign operators on behalf of the parser.
/// - Reports malformed sequences and arithmetic faults.
pub mod evaluator;
/// The lexer module splits an input line into tokens.
///
/// Operator characters become tokens of their own and everything between
/// them that is not whitespace becomes a word. Words are not validated here.
pub mod lexer;
/// The parser module converts infix tokens into postfix form.
///
/// Implements the shunting-yard algorithm with eager folding of prefix signs
/// and resolves variables while it scans.
///
/// # Responsibilities
/// - Orders operators by precedence, left to right within a level.
/// - Matches parentheses.
/// - Distinguishes prefix signs from binary operators.
/// - Classifies malformed tokens.
pub mod parser;
/// The value module defines the numbers the calculator computes with.
pub mod value;
/// The variables module defines the per-session variable store.
pub mod variables;

use crate::{
    error::ExpressionError,
    interpreter::{
        evaluator::core::evaluate, lexer::tokenize, parser::core::transform, value::core::Value,
        variables::Variables,
    },
};

/// Evaluates one expression line against a variable store.
///
/// Runs the full pipeline: tokenize, transform to postfix, evaluate.
///
/// # Errors
/// Returns the first `ExpressionError` raised by any stage.
///
/// # Example
/// ```
/// use smartcalc::interpreter::{evaluate_line, value::core::Value, variables::Variables};
///
/// let variables = Variables::new();
/// assert_eq!(evaluate_line("(2 + 3) * 4", &variables).unwrap(), Value::from(20_i64));
/// assert_eq!(evaluate_line("1 / 2", &variables).unwrap(), Value::Real(0.5));
/// assert!(evaluate_line("x + 1", &variables).is_err());
/// ```
pub fn evaluate_line(line: &str, variables: &Variables) -> Result<Value, ExpressionError> {
    let tokens = tokenize(line)?;
    let postfix = transform(&tokens, variables)?;
    evaluate(&postfix)
}
