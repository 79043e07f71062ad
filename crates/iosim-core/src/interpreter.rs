//! Line interpreter: tokenizes input, resolves the head token against the
//! commands valid in the current mode, dispatches, and renders device-style
//! diagnostics for failures.

use std::fmt::Write as _;

use iosim_types::CliError;

use crate::exec_commands;
use crate::registry::{CommandOutput, CommandRegistry, RegistryBuilder};
use crate::session::Session;

/// Result of interpreting one input line.
#[derive(Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// Text to print, already fully rendered (output or diagnostic).
    Output(String),
    /// The line produced nothing to print (blank input, or a silent command).
    Quiet,
    /// The session is over; the caller should stop reading input.
    Terminate,
}

/// A session bound to the builtin command registry.
pub struct Interpreter {
    registry: CommandRegistry,
    session: Session,
}

impl Interpreter {
    pub fn new(hostname: &str) -> Self {
        let mut builder = RegistryBuilder::new();
        exec_commands::register_builtins(&mut builder);
        Self {
            registry: builder.build(),
            session: Session::new(hostname),
        }
    }

    pub fn prompt(&self) -> String {
        self.session.prompt()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Interpret one line of input.
    pub fn execute_line(&mut self, line: &str) -> LineOutcome {
        let line = line.trim();
        if line.is_empty() {
            return LineOutcome::Quiet;
        }
        self.session.push_history(line);

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (head, args) = (tokens[0], &tokens[1..]);

        if head == "?" {
            return LineOutcome::Output(self.render_help());
        }

        // Resolve against the registry, then execute against the session;
        // the borrows are disjoint fields so both can live in one body.
        let result = match self.registry.resolve(head, self.session.mode) {
            Ok(cmd) => {
                log::debug!("dispatching '{}' in {:?}", cmd.name(), self.session.mode);
                cmd.execute(args, &mut self.session)
            },
            Err(err) => Err(err),
        };

        match result {
            Ok(CommandOutput::Text(text)) => LineOutcome::Output(text),
            Ok(CommandOutput::None) => LineOutcome::Quiet,
            Ok(CommandOutput::Terminate) => LineOutcome::Terminate,
            Err(err) => LineOutcome::Output(render_diagnostic(line, &err)),
        }
    }

    /// List the commands available in the current mode, `?` first.
    fn render_help(&self) -> String {
        let mut out = String::from("Available commands:\n  ?");
        for name in self.registry.names_for_mode(self.session.mode) {
            let cmd = self
                .registry
                .get(name)
                .expect("per-mode index references a registered command");
            let _ = write!(out, "\n  {name:<12} {}", cmd.description());
        }
        out
    }
}

/// Render an error the way the device would print it.
fn render_diagnostic(line: &str, err: &CliError) -> String {
    match err {
        CliError::Ambiguous(tok) => format!("% Ambiguous command: \"{tok}\""),
        CliError::InvalidInput(tok) => render_caret(line, tok),
        CliError::Incomplete(msg) => format!("% Incomplete command: {msg}"),
        CliError::BadArguments(msg) => format!("% Invalid arguments: {msg}"),
        CliError::Validation(msg) | CliError::Semantic(msg) => format!("% {msg}"),
    }
}

/// Caret block pointing at the first occurrence of the offending token,
/// matched case-insensitively. Columns are counted in characters so the
/// caret lines up even after multibyte input.
fn render_caret(line: &str, token: &str) -> String {
    let pos = line
        .to_ascii_lowercase()
        .find(&token.to_ascii_lowercase())
        .unwrap_or(0);
    let col = line[..pos].chars().count();
    format!(
        "% Invalid input detected at '^' marker.\n  {line}\n  {:>width$}",
        "^",
        width = col + 1
    )
}
