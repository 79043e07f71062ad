//! Command interpreter core for the iosim CLI simulator.
//!
//! The interpreter is a registry-based dispatch system. Commands implement
//! the [`Command`] trait and are registered per mode through a one-shot
//! [`RegistryBuilder`]. The [`Interpreter`] takes one input line at a time,
//! resolves the (possibly abbreviated) command name against the commands
//! valid in the active mode, dispatches `execute()`, and renders diagnostics
//! in device-accurate form.

mod config_commands;
mod exec_commands;
mod interpreter;
mod registry;
mod resolver;
mod session;
mod show_commands;

/// A single executable command bound to one or more modes.
pub use registry::Command;
/// Output produced by a command (text or a session-control signal).
pub use registry::CommandOutput;
/// Immutable registry with a per-mode command index.
pub use registry::CommandRegistry;
/// One-shot builder producing a [`CommandRegistry`].
pub use registry::RegistryBuilder;

/// Line-at-a-time driver: resolution, dispatch, diagnostic rendering.
pub use interpreter::{Interpreter, LineOutcome};
/// Mutable per-run state: mode, current interface, device config, history.
pub use session::Session;

/// Register the full built-in command set into a registry builder.
pub use exec_commands::register_builtins;
