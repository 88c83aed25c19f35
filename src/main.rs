use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};
use smartcalc::{
    run_script,
    session::{Response, Session, core::FAREWELL},
};

/// smartcalc is an interactive calculator for integer expressions with
/// variables. Type `/help` at the prompt for details.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads input lines from this file instead of the interactive prompt.
    script: Option<PathBuf>,

    /// Loads and saves the prompt history in this file.
    #[arg(long)]
    history: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Some(path) = &args.script {
        let source = fs::read_to_string(path).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            std::process::exit(1);
        });
        for line in run_script(&source) {
            println!("{line}");
        }
        return;
    }

    if let Err(e) = run_prompt(args.history.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Reads lines from the terminal until `/exit`, Ctrl-C or Ctrl-D.
fn run_prompt(history: Option<&Path>) -> Result<(), ReadlineError> {
    let mut editor = DefaultEditor::new()?;
    if let Some(path) = history
       && let Err(e) = editor.load_history(path)
    {
        log::warn!("could not load history from {}: {e}", path.display());
    }

    let mut session = Session::new();
    loop {
        let line = match editor.readline("") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("{FAREWELL}");
                break;
            },
            Err(e) => return Err(e),
        };
        if !line.trim().is_empty()
           && let Err(e) = editor.add_history_entry(line.as_str())
        {
            log::warn!("could not record history entry: {e}");
        }

        let response = session.process_line(&line);
        if let Some(text) = response.text() {
            println!("{text}");
        }
        if response == Response::Exit {
            break;
        }
    }

    if let Some(path) = history
       && let Err(e) = editor.save_history(path)
    {
        log::warn!("could not save history to {}: {e}", path.display());
    }
    Ok(())
}
