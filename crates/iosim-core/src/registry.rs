//! Command trait, registry builder, and mode-indexed dispatch.

use std::collections::{BTreeSet, HashMap};

use iosim_types::{Mode, Result};

use crate::resolver;
use crate::session::Session;

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Rendered text lines for the output sink.
    Text(String),
    /// Command succeeded with nothing to print.
    None,
    /// Signal to the interpreter loop that the session should end.
    ///
    /// Handlers never terminate the process themselves; the loop owns the
    /// process lifecycle.
    Terminate,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types, possibly abbreviated).
    fn name(&self) -> &str;

    /// One-line description for `?` help output.
    fn description(&self) -> &str;

    /// Usage string (e.g. "ip address <ip> <mask>").
    fn usage(&self) -> &str;

    /// The modes this command is valid in.
    fn modes(&self) -> &[Mode];

    /// Execute with the already-split argument tokens (command name excluded).
    fn execute(&self, args: &[&str], session: &mut Session) -> Result<CommandOutput>;
}

struct CommandDef {
    cmd: Box<dyn Command>,
    modes: BTreeSet<Mode>,
}

/// One-shot builder for a [`CommandRegistry`].
///
/// Registering the same name twice keeps the first command's behavior and
/// merges the second registration's mode set into it, so a name can be made
/// valid in additional modes without replacing its handler.
#[derive(Default)]
pub struct RegistryBuilder {
    defs: Vec<CommandDef>,
}

impl RegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command under the modes it declares.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        if let Some(existing) = self.defs.iter_mut().find(|d| d.cmd.name() == cmd.name()) {
            existing.modes.extend(cmd.modes().iter().copied());
            return;
        }
        let modes = cmd.modes().iter().copied().collect();
        self.defs.push(CommandDef { cmd, modes });
    }

    /// Finish registration and produce the immutable registry.
    pub fn build(self) -> CommandRegistry {
        let mut by_mode: HashMap<Mode, Vec<String>> = HashMap::new();
        for mode in Mode::ALL {
            by_mode.insert(mode, Vec::new());
        }
        for def in &self.defs {
            for &mode in &def.modes {
                by_mode
                    .entry(mode)
                    .or_default()
                    .push(def.cmd.name().to_string());
            }
        }
        for names in by_mode.values_mut() {
            names.sort_unstable();
        }

        let commands = self
            .defs
            .into_iter()
            .map(|def| (def.cmd.name().to_string(), def))
            .collect();

        CommandRegistry { commands, by_mode }
    }
}

/// Immutable registry of commands with a per-mode index.
///
/// Built once at startup by [`RegistryBuilder`] and read-only thereafter.
pub struct CommandRegistry {
    commands: HashMap<String, CommandDef>,
    by_mode: HashMap<Mode, Vec<String>>,
}

impl CommandRegistry {
    /// Sorted names of the commands valid in `mode`.
    pub fn names_for_mode(&self, mode: Mode) -> &[String] {
        self.by_mode.get(&mode).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Look up a command by its full name.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|def| def.cmd.as_ref())
    }

    /// Resolve a possibly-abbreviated token against the commands valid in
    /// `mode`.
    ///
    /// Commands not valid in `mode` are never candidates, so typing a
    /// command in the wrong mode reports invalid input rather than reaching
    /// the handler.
    pub fn resolve(&self, token: &str, mode: Mode) -> Result<&dyn Command> {
        let names = self.names_for_mode(mode);
        let candidates: Vec<(&str, &str)> =
            names.iter().map(|n| (n.as_str(), n.as_str())).collect();
        let name = resolver::resolve(token, &candidates)?;
        Ok(self
            .get(name)
            .expect("per-mode index references a registered command"))
    }
}
