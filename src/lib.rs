//! # smartcalc
//!
//! smartcalc is an interactive arbitrary-precision calculator written in Rust.
//! It evaluates expressions with `+ - * / ^`, prefix signs, parentheses and
//! named variables by converting them to postfix form with the
//! shunting-yard algorithm and reducing the result on a value stack.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error types for expressions and session commands.
///
/// Every error renders as the fixed message shown to the user, such as
/// `Invalid expression` or `Unknown variable`.
///
/// # Responsibilities
/// - Defines the error enums for the expression pipeline and the session.
/// - Integrates with `std::error::Error` so callers can propagate them.
pub mod error;
/// Runs expressions through the lexer, parser and evaluator.
///
/// This module ties together tokenization, infix-to-postfix transformation,
/// postfix evaluation, numeric values and the variable store.
///
/// # Responsibilities
/// - Coordinates all pipeline stages.
/// - Provides [`interpreter::evaluate_line`] as the single-line entry point.
pub mod interpreter;
/// Defines the postfix representation produced by the parser.
///
/// Declares the binary and sign operators with their precedence, and the
/// items of a postfix sequence.
pub mod rpn;
/// Interprets input lines the way the interactive prompt does.
///
/// A session dispatches commands, assignments and expressions and owns the
/// variable store between lines.
pub mod session;
/// General numeric conversion helpers.
pub mod util;

use crate::session::{Response, Session, core::FAREWELL};

/// Runs a script through a fresh session and returns every output line.
///
/// Each line of `source` is processed as if typed at the prompt. Processing
/// stops after `/exit`; if the script ends without it, the farewell is
/// appended as if the input had been closed.
///
/// # Examples
/// ```
/// use smartcalc::run_script;
///
/// let output = run_script("/variables\nn = 3\nn ^ 2\nm\n/exit\n1 + 1");
/// assert_eq!(output, vec!["", "9", "Unknown variable", "Bye!"]);
/// ```
#[must_use]
pub fn run_script(source: &str) -> Vec<String> {
    let mut session = Session::new();
    let mut output = Vec::new();

    for line in source.lines() {
        let response = session.process_line(line);
        if let Some(text) = response.text() {
            output.extend(text.split('\n').map(str::to_string));
        }
        if response == Response::Exit {
            return output;
        }
    }

    output.push(FAREWELL.to_string());
    output
}
