use crate::error::ExpressionError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors the session reports for a single input line.
pub enum CommandError {
    /// A line starting with `/` that names no known command.
    UnknownCommand {
        /// The full command text.
        command: String,
    },
    /// The left-hand side of an assignment is not a single alphabetic word.
    InvalidIdentifier,
    /// The right-hand side of an assignment is malformed.
    InvalidAssignment,
    /// An expression error passed through unchanged.
    Expression(ExpressionError),
}

impl From<ExpressionError> for CommandError {
    fn from(error: ExpressionError) -> Self {
        Self::Expression(error)
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand { .. } => write!(f, "Unknown command"),
            Self::InvalidIdentifier => write!(f, "Invalid identifier"),
            Self::InvalidAssignment => write!(f, "Invalid assignment"),
            Self::Expression(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Expression(e) => Some(e),
            _ => None,
        }
    }
}
