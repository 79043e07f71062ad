//! CLI mode state: which privilege/configuration context is active.

/// The active CLI mode.
///
/// Modes gate which commands are legal: the registry keeps a per-mode index
/// and the resolver only ever sees commands valid in the active mode.
/// `InterfaceConfig` additionally requires a bound current interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mode {
    /// Initial, least-privileged mode (`hostname>`).
    UserExec,
    /// Privileged exec mode (`hostname#`).
    PrivilegedExec,
    /// Global configuration mode (`hostname(config)#`).
    GlobalConfig,
    /// Per-interface configuration mode (`hostname(config-if)#`).
    InterfaceConfig,
}

impl Mode {
    /// All modes, in nesting order.
    pub const ALL: [Mode; 4] = [
        Mode::UserExec,
        Mode::PrivilegedExec,
        Mode::GlobalConfig,
        Mode::InterfaceConfig,
    ];

    /// The prompt suffix appended to the hostname in this mode.
    pub fn prompt_suffix(self) -> &'static str {
        match self {
            Mode::UserExec => ">",
            Mode::PrivilegedExec => "#",
            Mode::GlobalConfig => "(config)#",
            Mode::InterfaceConfig => "(config-if)#",
        }
    }

    /// True for the two exec (non-configuration) modes.
    pub fn is_exec(self) -> bool {
        matches!(self, Mode::UserExec | Mode::PrivilegedExec)
    }
}
