//! Per-interface state and interface-name handling.
//!
//! Operational status is deliberately three-valued: `administratively down`
//! (operator shut the port), `down` (port enabled but not configured enough
//! to come up), and `up`. The distinction is visible in `show` output and
//! must never collapse into a boolean.

use std::fmt;
use std::net::Ipv4Addr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CliError, Result};

/// Operator intent for an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminStatus {
    Up,
    Down,
}

impl fmt::Display for AdminStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminStatus::Up => write!(f, "up"),
            AdminStatus::Down => write!(f, "down"),
        }
    }
}

/// Observed interface state, derived from admin status and configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperStatus {
    Up,
    Down,
    AdministrativelyDown,
}

impl fmt::Display for OperStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperStatus::Up => write!(f, "up"),
            OperStatus::Down => write!(f, "down"),
            OperStatus::AdministrativelyDown => write!(f, "administratively down"),
        }
    }
}

/// Configuration and status of a single interface.
///
/// Invariant (re-established after every mutation):
/// - admin down  => oper administratively-down
/// - admin up    => oper up iff an IP address is assigned, else oper down
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceState {
    pub ip_address: Option<String>,
    pub subnet_mask: Option<String>,
    pub admin: AdminStatus,
    pub oper: OperStatus,
}

impl InterfaceState {
    /// Initial state for a newly created interface: shut down by the operator.
    pub fn new() -> Self {
        Self {
            ip_address: None,
            subnet_mask: None,
            admin: AdminStatus::Down,
            oper: OperStatus::AdministrativelyDown,
        }
    }

    /// Assign an IP address and subnet mask, then recompute oper status.
    pub fn assign_address(&mut self, ip: &str, mask: &str) {
        self.ip_address = Some(ip.to_string());
        self.subnet_mask = Some(mask.to_string());
        self.recompute_oper();
    }

    /// Clear any assigned address, then recompute oper status.
    pub fn clear_address(&mut self) {
        self.ip_address = None;
        self.subnet_mask = None;
        self.recompute_oper();
    }

    /// Administratively disable the interface.
    pub fn shut(&mut self) {
        self.admin = AdminStatus::Down;
        self.recompute_oper();
    }

    /// Administratively enable the interface.
    ///
    /// The port only comes operationally up if an IP address is assigned;
    /// otherwise it reports `down` (not `administratively down`).
    pub fn no_shut(&mut self) {
        self.admin = AdminStatus::Up;
        self.recompute_oper();
    }

    fn recompute_oper(&mut self) {
        self.oper = match self.admin {
            AdminStatus::Down => OperStatus::AdministrativelyDown,
            AdminStatus::Up => {
                if self.ip_address.is_some() {
                    OperStatus::Up
                } else {
                    OperStatus::Down
                }
            },
        };
    }
}

impl Default for InterfaceState {
    fn default() -> Self {
        Self::new()
    }
}

/// Check that a string is a syntactically valid IPv4 literal.
pub fn is_valid_ipv4(s: &str) -> bool {
    s.parse::<Ipv4Addr>().is_ok()
}

static SPEC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^([a-z]+?)\s*(\d+/\d+)$").unwrap());

static SORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^([a-z]+)(\d+)/(\d+)$").unwrap());

/// Normalize an interface spec to its canonical full name.
///
/// Accepts abbreviated or full type names followed by a `slot/port` number:
/// `g0/0`, `gi0/0`, and `GigabitEthernet0/0` all canonicalize to
/// `GigabitEthernet0/0`. The type is recognized by its first letter
/// (case-insensitive): g, f, or e.
pub fn canonical_name(spec: &str) -> Result<String> {
    let caps = SPEC_RE.captures(spec).ok_or_else(|| {
        CliError::Validation(format!(
            "invalid interface format: {spec}. Expecting e.g. 'g0/0' or 'FastEthernet0/1'"
        ))
    })?;
    let type_part = caps.get(1).map(|m| m.as_str()).unwrap_or("");
    let num_part = caps.get(2).map(|m| m.as_str()).unwrap_or("");

    let base = match type_part.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('g') => "GigabitEthernet",
        Some('f') => "FastEthernet",
        Some('e') => "Ethernet",
        _ => {
            return Err(CliError::Validation(format!(
                "invalid interface type: {type_part}"
            )));
        },
    };
    Ok(format!("{base}{num_part}"))
}

/// Sort key for display ordering: (type weight, slot, port).
///
/// FastEthernet < GigabitEthernet < TenGigabitEthernet < other recognized
/// names; names that do not match `<type><slot>/<port>` sort last and keep
/// their relative order under a stable sort.
pub fn sort_key(name: &str) -> (u32, u32, u32) {
    let Some(caps) = SORT_RE.captures(name) else {
        return (999, 0, 0);
    };
    let type_part = caps.get(1).map(|m| m.as_str()).unwrap_or("");
    let slot = caps
        .get(2)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);
    let port = caps
        .get(3)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);

    let weight = match type_part.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('f') => 1,
        Some('g') => 2,
        Some('t') => 3,
        _ => 99,
    };
    (weight, slot, port)
}
