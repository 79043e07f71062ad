//! Foundation types for the iosim CLI simulator.
//!
//! This crate contains the pieces shared by the interpreter core and the
//! binary: the CLI mode enum, the device running-configuration model,
//! per-interface state with its operational-status invariant, interface name
//! normalization/sorting, and the error taxonomy.

pub mod config;
pub mod error;
pub mod interface;
pub mod mode;

pub use config::DeviceConfig;
pub use error::{CliError, Result};
pub use interface::{AdminStatus, InterfaceState, OperStatus};
pub use mode::Mode;
