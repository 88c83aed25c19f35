use crate::{
    error::{CommandError, ExpressionError},
    interpreter::{
        evaluator::core::evaluate,
        lexer::{Token, tokenize},
        parser::{core::transform, utils::is_identifier},
    },
    session::core::Session,
};

impl Session {
    /// Handles an assignment line such as `total = a + 2`.
    ///
    /// Everything before the first `=` must be a single alphabetic word.
    /// Everything after it is evaluated against the current variables and
    /// the result is stored under that name, replacing any earlier value.
    /// Nothing is stored if any step fails.
    ///
    /// # Errors
    /// - `InvalidIdentifier` if the target is not a single alphabetic word.
    /// - `InvalidAssignment` if the right-hand side is malformed, contains a
    ///   further `=`, or contains a word mixing letters and digits.
    /// - `Expression(UnknownVariable)` if the right-hand side refers to an
    ///   unassigned variable.
    /// - `Expression(_)` for arithmetic faults such as division by zero.
    pub fn assign(&mut self, line: &str) -> Result<(), CommandError> {
        let tokens = tokenize(line).map_err(|_| CommandError::InvalidAssignment)?;
        let Some(equals) = tokens.iter().position(|token| *token == Token::Equals) else {
            return Err(CommandError::InvalidAssignment);
        };
        let (target, expression) = (&tokens[..equals], &tokens[equals + 1..]);

        let name = match target {
            [Token::Word(name)] if is_identifier(name) => name,
            _ => return Err(CommandError::InvalidIdentifier),
        };

        let value = transform(expression, &self.variables).and_then(|postfix| evaluate(&postfix))
                                                          .map_err(relabel)?;

        log::debug!("{name} = {value}");
        self.variables.set(name, value);
        Ok(())
    }
}

/// Maps an error from the right-hand side of an assignment to the error the
/// session reports.
///
/// Malformed right-hand sides are reported as an invalid assignment as a
/// whole; all other errors pass through.
fn relabel(error: ExpressionError) -> CommandError {
    match error {
        ExpressionError::InvalidExpression | ExpressionError::InvalidIdentifier => {
            CommandError::InvalidAssignment
        },
        other => CommandError::Expression(other),
    }
}
