//! Per-run interpreter state.

use std::time::{Duration, Instant};

use iosim_types::{DeviceConfig, Mode};

/// Mutable state for one interactive run: the active mode, the bound
/// interface (when in interface-config mode), the device configuration, and
/// the raw command history.
///
/// The session is exclusively owned by the single interpreter thread; it is
/// created at startup and dropped when the loop ends.
pub struct Session {
    /// Active CLI mode.
    pub mode: Mode,
    /// Canonical name of the interface bound in interface-config mode.
    pub current_interface: Option<String>,
    /// The running configuration.
    pub device: DeviceConfig,
    history: Vec<String>,
    started_at: Instant,
}

impl Session {
    /// Create a fresh session in user-exec mode.
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            mode: Mode::UserExec,
            current_interface: None,
            device: DeviceConfig::new(hostname),
            history: Vec::new(),
            started_at: Instant::now(),
        }
    }

    /// The prompt string for the current hostname and mode.
    pub fn prompt(&self) -> String {
        format!("{}{}", self.device.hostname(), self.mode.prompt_suffix())
    }

    /// Append a raw input line to the history.
    ///
    /// History is append-only and uncapped so `show history` can replay the
    /// whole run, including lines that failed.
    pub fn push_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }

    /// All recorded input lines, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Time elapsed since the session started.
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Enter interface-config mode bound to `name`.
    pub fn enter_interface(&mut self, name: &str) {
        self.current_interface = Some(name.to_string());
        self.mode = Mode::InterfaceConfig;
    }

    /// Leave any config mode directly for privileged exec, dropping the
    /// interface binding.
    pub fn end_config(&mut self) {
        self.current_interface = None;
        self.mode = Mode::PrivilegedExec;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_in_user_exec() {
        let s = Session::new("Router");
        assert_eq!(s.mode, Mode::UserExec);
        assert!(s.current_interface.is_none());
        assert_eq!(s.prompt(), "Router>");
    }

    #[test]
    fn prompt_tracks_hostname_and_mode() {
        let mut s = Session::new("Router");
        s.device.set_hostname("Edge1").unwrap();
        s.mode = Mode::GlobalConfig;
        assert_eq!(s.prompt(), "Edge1(config)#");
        s.enter_interface("GigabitEthernet0/0");
        assert_eq!(s.prompt(), "Edge1(config-if)#");
    }

    #[test]
    fn end_config_clears_interface_binding() {
        let mut s = Session::new("Router");
        s.mode = Mode::GlobalConfig;
        s.enter_interface("FastEthernet0/1");
        s.end_config();
        assert_eq!(s.mode, Mode::PrivilegedExec);
        assert!(s.current_interface.is_none());
    }

    #[test]
    fn history_is_append_only() {
        let mut s = Session::new("Router");
        s.push_history("enable");
        s.push_history("enable");
        s.push_history("bogus command");
        assert_eq!(s.history(), ["enable", "enable", "bogus command"]);
    }
}
