/// Expression errors.
///
/// Defines every failure that can occur while turning a line into postfix
/// form or while reducing that postfix form to a value. The user-facing
/// message of each kind is fixed.
pub mod expression_error;
/// Command errors.
///
/// Contains the errors raised by the session layer: unknown slash commands,
/// malformed assignments and invalid assignment targets. Expression errors
/// that reach the session are wrapped rather than re-classified, except where
/// an assignment re-labels them.
pub mod command_error;

pub use command_error::CommandError;
pub use expression_error::ExpressionError;
