use crate::{error::CommandError, session::core::Session};

/// Usage text shown by `/help`.
pub const HELP_TEXT: &str = "\
Type an expression to evaluate it, for example:
>  - -3-+- 8 *( ( 2^ 2 + 3 ^1)* 2 + 1) + - 6 / (3^3 - 8 *3 )
121

Supported operators: addition '+', subtraction '-', multiplication '*',
integer division '/' and power '^', all evaluated left to right within the
same precedence. Division that leaves a remainder gives a real number. Any number of '-' and '+' signs may precede a number or a
variable, but not a parenthesis.

Assign a variable with 'name = expression'; names consist of letters only.

Supported commands:
/help       show this text
/variables  list all variables in order of assignment
/exit       end the session";

impl Session {
    /// Runs a slash command.
    ///
    /// Returns the text to show. `/variables` in a fresh session shows a
    /// single empty line.
    ///
    /// # Errors
    /// `UnknownCommand` for anything but `/help` and `/variables`.
    pub fn run_command(&self, command: &str) -> Result<String, CommandError> {
        match command {
            "/help" => Ok(HELP_TEXT.to_string()),
            "/variables" => Ok(self.list_variables()),
            _ => Err(CommandError::UnknownCommand { command: command.to_string() }),
        }
    }

    /// Lists the variables as `name: value` lines in order of first
    /// assignment. An empty store lists as an empty string.
    #[must_use]
    pub fn list_variables(&self) -> String {
        let lines: Vec<String> = self.variables
                                     .iter()
                                     .map(|(name, value)| format!("{name}: {value}"))
                                     .collect();
        lines.join("\n")
    }
}
