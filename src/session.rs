/// Session state and line dispatch.
///
/// Defines `Session`, which owns the variable store, and `Response`, the
/// outcome of processing one input line.
pub mod core;

/// Assignment handling.
///
/// Validates the assignment target, evaluates the right-hand side and
/// stores the result.
pub mod assignment;

/// Slash commands such as `/help` and `/variables`.
pub mod command;

pub use self::core::{Response, Session};
