//! Interactive entry point for the IOS-style CLI simulator.
//!
//! Owns line acquisition and editing; all command semantics live in
//! `iosim-core`. Falls back to a plain stdin loop when no terminal line
//! editor can be initialized (e.g. piped input).

use std::io::BufRead;

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use iosim_core::{Interpreter, LineOutcome};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let hostname = std::env::args().nth(1).unwrap_or_else(|| "Router".to_string());
    let mut interpreter = Interpreter::new(&hostname);

    println!("IOS-style CLI simulator. Type '?' for help, 'exit' to leave.");

    match DefaultEditor::new() {
        Ok(editor) => run_editor(editor, &mut interpreter),
        Err(err) => {
            log::warn!("line editor unavailable ({err}); reading plain stdin");
            run_basic(&mut interpreter)
        },
    }
}

fn run_editor(mut rl: DefaultEditor, interpreter: &mut Interpreter) -> Result<()> {
    loop {
        match rl.readline(&interpreter.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    rl.add_history_entry(line.as_str())?;
                }
                match interpreter.execute_line(&line) {
                    LineOutcome::Output(text) => println!("{text}"),
                    LineOutcome::Quiet => {},
                    LineOutcome::Terminate => break,
                }
            },
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C abandons the current line, not the session.
                continue;
            },
            Err(ReadlineError::Eof) => {
                if handle_eof(interpreter) {
                    break;
                }
            },
            Err(err) => return Err(err.into()),
        }
    }
    println!("Exiting simulator.");
    Ok(())
}

/// Ctrl+D acts like `exit`: from a config mode it pops one nesting level and
/// the loop continues; from an exec mode the session ends. Returns true when
/// the loop should stop.
fn handle_eof(interpreter: &mut Interpreter) -> bool {
    if interpreter.session().mode.is_exec() {
        return true;
    }
    matches!(interpreter.execute_line("exit"), LineOutcome::Terminate)
}

/// Non-interactive loop for piped or redirected input.
fn run_basic(interpreter: &mut Interpreter) -> Result<()> {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match interpreter.execute_line(&line) {
            LineOutcome::Output(text) => println!("{text}"),
            LineOutcome::Quiet => {},
            LineOutcome::Terminate => break,
        }
    }
    println!("Exiting simulator.");
    Ok(())
}
