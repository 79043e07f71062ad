//! Exec-level and mode-transition commands: enable, disable, configure,
//! exit, quit, end, history.

use iosim_types::{CliError, Mode, Result};

use crate::registry::{Command, CommandOutput, RegistryBuilder};
use crate::resolver;
use crate::session::Session;
use crate::show_commands;

/// Register the full built-in command set.
pub fn register_builtins(builder: &mut RegistryBuilder) {
    // User exec.
    builder.register(Box::new(EnableCmd));
    builder.register(Box::new(ExitCmd));
    builder.register(Box::new(QuitCmd));

    // Privileged exec.
    builder.register(Box::new(DisableCmd));
    builder.register(Box::new(ConfigureCmd));
    builder.register(Box::new(show_commands::ShowCmd));
    builder.register(Box::new(HistoryCmd));

    // Config modes.
    builder.register(Box::new(EndCmd));
    crate::config_commands::register_config_commands(builder);
}

/// Fail with a "takes no arguments" error when a zero-argument command is
/// given any.
pub(crate) fn reject_args(name: &str, args: &[&str]) -> Result<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(CliError::BadArguments(format!(
            "'{name}' takes no arguments"
        )))
    }
}

// ---------------------------------------------------------------------------
// enable
// ---------------------------------------------------------------------------

struct EnableCmd;
impl Command for EnableCmd {
    fn name(&self) -> &str {
        "enable"
    }
    fn description(&self) -> &str {
        "Enter privileged exec mode"
    }
    fn usage(&self) -> &str {
        "enable"
    }
    fn modes(&self) -> &[Mode] {
        &[Mode::UserExec]
    }
    fn execute(&self, args: &[&str], session: &mut Session) -> Result<CommandOutput> {
        reject_args("enable", args)?;
        session.mode = Mode::PrivilegedExec;
        Ok(CommandOutput::None)
    }
}

// ---------------------------------------------------------------------------
// disable
// ---------------------------------------------------------------------------

struct DisableCmd;
impl Command for DisableCmd {
    fn name(&self) -> &str {
        "disable"
    }
    fn description(&self) -> &str {
        "Return to user exec mode"
    }
    fn usage(&self) -> &str {
        "disable"
    }
    fn modes(&self) -> &[Mode] {
        &[Mode::PrivilegedExec]
    }
    fn execute(&self, args: &[&str], session: &mut Session) -> Result<CommandOutput> {
        reject_args("disable", args)?;
        session.mode = Mode::UserExec;
        Ok(CommandOutput::None)
    }
}

// ---------------------------------------------------------------------------
// configure
// ---------------------------------------------------------------------------

struct ConfigureCmd;
impl Command for ConfigureCmd {
    fn name(&self) -> &str {
        "configure"
    }
    fn description(&self) -> &str {
        "Enter global configuration mode"
    }
    fn usage(&self) -> &str {
        "configure terminal"
    }
    fn modes(&self) -> &[Mode] {
        &[Mode::PrivilegedExec]
    }
    fn execute(&self, args: &[&str], session: &mut Session) -> Result<CommandOutput> {
        match args {
            [] => Err(CliError::Incomplete(
                "expecting 'configure terminal'".to_string(),
            )),
            [sub] if resolver::is_abbrev(sub, "terminal") => {
                session.mode = Mode::GlobalConfig;
                Ok(CommandOutput::Text(
                    "Enter configuration commands, one per line. End with CNTL/Z or 'end'."
                        .to_string(),
                ))
            },
            [sub] => Err(CliError::Incomplete(format!(
                "expecting 'configure terminal', got 'configure {sub}'"
            ))),
            _ => Err(CliError::BadArguments(
                "expecting 'configure terminal'".to_string(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// exit / quit
// ---------------------------------------------------------------------------

/// `exit` is registered once for all modes: in exec modes it terminates the
/// session, in config modes it pops one nesting level.
struct ExitCmd;
impl Command for ExitCmd {
    fn name(&self) -> &str {
        "exit"
    }
    fn description(&self) -> &str {
        "Leave the current mode (or the simulator from exec modes)"
    }
    fn usage(&self) -> &str {
        "exit"
    }
    fn modes(&self) -> &[Mode] {
        &Mode::ALL
    }
    fn execute(&self, args: &[&str], session: &mut Session) -> Result<CommandOutput> {
        reject_args("exit", args)?;
        match session.mode {
            Mode::UserExec | Mode::PrivilegedExec => Ok(CommandOutput::Terminate),
            Mode::GlobalConfig => {
                session.mode = Mode::PrivilegedExec;
                Ok(CommandOutput::None)
            },
            Mode::InterfaceConfig => {
                session.current_interface = None;
                session.mode = Mode::GlobalConfig;
                Ok(CommandOutput::None)
            },
        }
    }
}

struct QuitCmd;
impl Command for QuitCmd {
    fn name(&self) -> &str {
        "quit"
    }
    fn description(&self) -> &str {
        "Leave the simulator"
    }
    fn usage(&self) -> &str {
        "quit"
    }
    fn modes(&self) -> &[Mode] {
        &[Mode::UserExec]
    }
    fn execute(&self, args: &[&str], _session: &mut Session) -> Result<CommandOutput> {
        reject_args("quit", args)?;
        Ok(CommandOutput::Terminate)
    }
}

// ---------------------------------------------------------------------------
// end
// ---------------------------------------------------------------------------

struct EndCmd;
impl Command for EndCmd {
    fn name(&self) -> &str {
        "end"
    }
    fn description(&self) -> &str {
        "Return directly to privileged exec mode"
    }
    fn usage(&self) -> &str {
        "end"
    }
    fn modes(&self) -> &[Mode] {
        &[Mode::GlobalConfig, Mode::InterfaceConfig]
    }
    fn execute(&self, args: &[&str], session: &mut Session) -> Result<CommandOutput> {
        reject_args("end", args)?;
        session.end_config();
        Ok(CommandOutput::None)
    }
}

// ---------------------------------------------------------------------------
// history
// ---------------------------------------------------------------------------

struct HistoryCmd;
impl Command for HistoryCmd {
    fn name(&self) -> &str {
        "history"
    }
    fn description(&self) -> &str {
        "Show the command history"
    }
    fn usage(&self) -> &str {
        "history"
    }
    fn modes(&self) -> &[Mode] {
        &[Mode::PrivilegedExec]
    }
    fn execute(&self, args: &[&str], session: &mut Session) -> Result<CommandOutput> {
        reject_args("history", args)?;
        Ok(CommandOutput::Text(show_commands::render_history(session)))
    }
}
