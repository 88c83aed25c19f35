use crate::{
    error::CommandError,
    interpreter::{evaluate_line, variables::Variables},
};

/// The command that ends a session.
pub const EXIT_COMMAND: &str = "/exit";
/// The farewell printed when a session ends.
pub const FAREWELL: &str = "Bye!";

/// The outcome of processing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The line produced no output, e.g. a successful assignment.
    Nothing,
    /// Text to show the user; may span several lines.
    Output(String),
    /// The line failed; the error renders as the message to show.
    Error(CommandError),
    /// The user asked to end the session.
    Exit,
}

impl Response {
    /// Returns the text to show for this response, if any.
    ///
    /// `Exit` renders as the farewell message.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        match self {
            Self::Nothing => None,
            Self::Output(text) => Some(text.clone()),
            Self::Error(e) => Some(e.to_string()),
            Self::Exit => Some(FAREWELL.to_string()),
        }
    }
}

/// A calculator session.
///
/// A session owns the variables assigned so far and processes input lines
/// one at a time. Failures never end a session; they are reported and the
/// next line starts from the same variables.
#[derive(Debug, Default)]
pub struct Session {
    pub(in crate::session) variables: Variables,
}

impl Session {
    /// Creates a session without variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the variables assigned in this session.
    #[must_use]
    pub const fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Processes one input line.
    ///
    /// Lines are dispatched in this order:
    /// 1. `/exit` ends the session,
    /// 2. any other line starting with `/` is a command,
    /// 3. a line containing `=` is an assignment,
    /// 4. a blank line is ignored,
    /// 5. anything else is evaluated as an expression.
    ///
    /// # Example
    /// ```
    /// use smartcalc::session::{Response, Session};
    ///
    /// let mut session = Session::new();
    /// assert_eq!(session.process_line("x = 4 + 5"), Response::Nothing);
    /// assert_eq!(session.process_line("x * 2"), Response::Output("18".into()));
    /// assert_eq!(session.process_line("/variables"), Response::Output("x: 9".into()));
    /// assert_eq!(session.process_line("/exit"), Response::Exit);
    /// ```
    pub fn process_line(&mut self, line: &str) -> Response {
        if line == EXIT_COMMAND {
            log::debug!("exit requested");
            return Response::Exit;
        }

        let result = if line.starts_with('/') {
            self.run_command(line).map(Some)
        } else if line.contains('=') {
            self.assign(line).map(|()| None)
        } else if line.trim().is_empty() {
            Ok(None)
        } else {
            evaluate_line(line, &self.variables).map(|value| Some(value.to_string()))
                                                .map_err(CommandError::from)
        };

        match result {
            Ok(Some(text)) => Response::Output(text),
            Ok(None) => Response::Nothing,
            Err(e) => {
                log::debug!("{line:?} failed: {e:?}");
                Response::Error(e)
            },
        }
    }
}
