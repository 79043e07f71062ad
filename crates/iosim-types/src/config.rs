//! The device running configuration: identity plus per-interface state.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CliError, Result};
use crate::interface::{self, InterfaceState};

/// Hostname grammar: alphanumeric start and end, interior hyphens allowed,
/// at most 63 characters.
static HOSTNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?$").unwrap());

/// Check a candidate hostname against the hostname grammar.
pub fn is_valid_hostname(name: &str) -> bool {
    HOSTNAME_RE.is_match(name)
}

/// The in-memory running configuration of the simulated device.
///
/// Interfaces are keyed by canonical name (`GigabitEthernet0/0`); the map is
/// unordered and display code must go through [`DeviceConfig::sorted_names`].
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    hostname: String,
    interfaces: HashMap<String, InterfaceState>,
}

impl DeviceConfig {
    /// Create a configuration with the given initial hostname.
    ///
    /// The initial hostname is trusted (it comes from startup, not from a
    /// command line); `set_hostname` validates subsequent changes.
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            interfaces: HashMap::new(),
        }
    }

    /// The current hostname.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Replace the hostname after validating it against the hostname grammar.
    ///
    /// On failure the configuration is left untouched.
    pub fn set_hostname(&mut self, name: &str) -> Result<()> {
        if !is_valid_hostname(name) {
            return Err(CliError::Validation("invalid hostname format".to_string()));
        }
        self.hostname = name.to_string();
        Ok(())
    }

    /// Look up an interface by canonical name.
    pub fn interface(&self, name: &str) -> Option<&InterfaceState> {
        self.interfaces.get(name)
    }

    /// Mutable access to an interface by canonical name.
    pub fn interface_mut(&mut self, name: &str) -> Option<&mut InterfaceState> {
        self.interfaces.get_mut(name)
    }

    /// Get or lazily create an interface.
    ///
    /// New interfaces start administratively down. Interfaces are never
    /// deleted once created.
    pub fn ensure_interface(&mut self, name: &str) -> &mut InterfaceState {
        self.interfaces
            .entry(name.to_string())
            .or_insert_with(InterfaceState::new)
    }

    /// Number of configured interfaces.
    pub fn interface_count(&self) -> usize {
        self.interfaces.len()
    }

    /// Interface names in display order: (type weight, slot, port), with
    /// unrecognized names last in stable relative order.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.interfaces.keys().map(String::as_str).collect();
        // Pre-sort lexically so the "stable among themselves" tail is
        // deterministic regardless of map iteration order.
        names.sort_unstable();
        names.sort_by_key(|n| interface::sort_key(n));
        names
    }
}
