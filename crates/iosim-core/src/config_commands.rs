//! Configuration-mode commands: hostname, interface, ip address, shutdown,
//! and negation via `no`.

use iosim_types::{CliError, Mode, Result, interface};

use crate::exec_commands::reject_args;
use crate::registry::{Command, CommandOutput, RegistryBuilder};
use crate::resolver::{self, is_abbrev};
use crate::session::Session;

/// Register the global-config and interface-config commands.
pub(crate) fn register_config_commands(builder: &mut RegistryBuilder) {
    builder.register(Box::new(HostnameCmd));
    builder.register(Box::new(InterfaceCmd));
    builder.register(Box::new(NoCmd));
    builder.register(Box::new(IpCmd));
    builder.register(Box::new(ShutdownCmd));
}

/// The canonical name of the interface bound in interface-config mode.
///
/// The per-mode registry index keeps interface commands out of other modes,
/// so a missing binding indicates a session handled outside the interpreter.
fn bound_interface(session: &Session) -> Result<String> {
    session.current_interface.clone().ok_or_else(|| {
        CliError::Semantic("command must be run in interface configuration mode".to_string())
    })
}

// ---------------------------------------------------------------------------
// hostname
// ---------------------------------------------------------------------------

struct HostnameCmd;
impl Command for HostnameCmd {
    fn name(&self) -> &str {
        "hostname"
    }
    fn description(&self) -> &str {
        "Set the device hostname"
    }
    fn usage(&self) -> &str {
        "hostname <name>"
    }
    fn modes(&self) -> &[Mode] {
        &[Mode::GlobalConfig]
    }
    fn execute(&self, args: &[&str], session: &mut Session) -> Result<CommandOutput> {
        match args {
            [] => Err(CliError::Incomplete(
                "expecting 'hostname <name>'".to_string(),
            )),
            [name] => {
                session.device.set_hostname(name)?;
                Ok(CommandOutput::None)
            },
            _ => Err(CliError::BadArguments(
                "expecting 'hostname <name>'".to_string(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// interface
// ---------------------------------------------------------------------------

struct InterfaceCmd;
impl Command for InterfaceCmd {
    fn name(&self) -> &str {
        "interface"
    }
    fn description(&self) -> &str {
        "Select an interface to configure (created if new)"
    }
    fn usage(&self) -> &str {
        "interface <type><slot>/<port>"
    }
    fn modes(&self) -> &[Mode] {
        &[Mode::GlobalConfig]
    }
    fn execute(&self, args: &[&str], session: &mut Session) -> Result<CommandOutput> {
        if args.is_empty() {
            return Err(CliError::Incomplete(
                "expecting 'interface <type><slot>/<port>'".to_string(),
            ));
        }
        // "g0/0" and "g 0/0" are both accepted; joining the tokens makes the
        // two forms identical before normalization.
        let spec = args.concat();
        let name = interface::canonical_name(&spec)?;
        session.device.ensure_interface(&name);
        session.enter_interface(&name);
        Ok(CommandOutput::None)
    }
}

// ---------------------------------------------------------------------------
// ip
// ---------------------------------------------------------------------------

struct IpCmd;
impl Command for IpCmd {
    fn name(&self) -> &str {
        "ip"
    }
    fn description(&self) -> &str {
        "Assign an IP address to the current interface"
    }
    fn usage(&self) -> &str {
        "ip address <ip> <mask>"
    }
    fn modes(&self) -> &[Mode] {
        &[Mode::InterfaceConfig]
    }
    fn execute(&self, args: &[&str], session: &mut Session) -> Result<CommandOutput> {
        let name = bound_interface(session)?;
        if args.is_empty() || !is_abbrev(args[0], "address") {
            return Err(CliError::Incomplete(
                "expecting 'ip address <ip> <mask>'".to_string(),
            ));
        }
        let [_, ip, mask] = args else {
            return Err(CliError::BadArguments(
                "expecting 'ip address <ip> <mask>'".to_string(),
            ));
        };
        if !interface::is_valid_ipv4(ip) {
            return Err(CliError::Validation(format!(
                "invalid IP address format: {ip}"
            )));
        }
        if !interface::is_valid_ipv4(mask) {
            return Err(CliError::Validation(format!(
                "invalid subnet mask format: {mask}"
            )));
        }

        let state = session
            .device
            .interface_mut(&name)
            .ok_or_else(|| CliError::Semantic(format!("no such interface: {name}")))?;
        state.assign_address(ip, mask);
        Ok(CommandOutput::None)
    }
}

// ---------------------------------------------------------------------------
// shutdown
// ---------------------------------------------------------------------------

struct ShutdownCmd;
impl Command for ShutdownCmd {
    fn name(&self) -> &str {
        "shutdown"
    }
    fn description(&self) -> &str {
        "Administratively disable the current interface"
    }
    fn usage(&self) -> &str {
        "shutdown"
    }
    fn modes(&self) -> &[Mode] {
        &[Mode::InterfaceConfig]
    }
    fn execute(&self, args: &[&str], session: &mut Session) -> Result<CommandOutput> {
        reject_args("shutdown", args)?;
        let name = bound_interface(session)?;
        let state = session
            .device
            .interface_mut(&name)
            .ok_or_else(|| CliError::Semantic(format!("no such interface: {name}")))?;
        state.shut();
        Ok(CommandOutput::None)
    }
}

// ---------------------------------------------------------------------------
// no
// ---------------------------------------------------------------------------

/// Targets negatable via `no`, per mode.
#[derive(Debug, Clone, Copy)]
enum NoTarget {
    Shutdown,
    IpAddress,
    Hostname,
    Interface,
}

const IF_NO_TARGETS: &[(&str, NoTarget)] =
    &[("shutdown", NoTarget::Shutdown), ("ip", NoTarget::IpAddress)];

const GLOBAL_NO_TARGETS: &[(&str, NoTarget)] = &[
    ("hostname", NoTarget::Hostname),
    ("interface", NoTarget::Interface),
];

struct NoCmd;
impl Command for NoCmd {
    fn name(&self) -> &str {
        "no"
    }
    fn description(&self) -> &str {
        "Negate a configuration command"
    }
    fn usage(&self) -> &str {
        "no <command>"
    }
    fn modes(&self) -> &[Mode] {
        &[Mode::GlobalConfig, Mode::InterfaceConfig]
    }
    fn execute(&self, args: &[&str], session: &mut Session) -> Result<CommandOutput> {
        let [target_token, rest @ ..] = args else {
            return Err(CliError::Incomplete("expecting 'no <command>'".to_string()));
        };

        let candidates = match session.mode {
            Mode::InterfaceConfig => IF_NO_TARGETS,
            Mode::GlobalConfig => GLOBAL_NO_TARGETS,
            _ => {
                return Err(CliError::Semantic(
                    "'no' is not applicable in this mode".to_string(),
                ));
            },
        };

        match resolver::resolve(target_token, candidates)? {
            NoTarget::Shutdown => no_shutdown(rest, session),
            NoTarget::IpAddress => no_ip_address(rest, session),
            // Neither global target is negatable in this model.
            NoTarget::Hostname => Err(CliError::Semantic(
                "cannot negate 'hostname'; configure a new one instead".to_string(),
            )),
            NoTarget::Interface => Err(CliError::Semantic(
                "cannot negate 'interface'; interfaces are never deleted".to_string(),
            )),
        }
    }
}

/// `no shutdown`: admin up; oper comes up only if an IP is assigned,
/// otherwise the port reports `down` (not `administratively down`).
fn no_shutdown(rest: &[&str], session: &mut Session) -> Result<CommandOutput> {
    reject_args("no shutdown", rest)?;
    let name = bound_interface(session)?;
    let state = session
        .device
        .interface_mut(&name)
        .ok_or_else(|| CliError::Semantic(format!("no such interface: {name}")))?;
    state.no_shut();
    Ok(CommandOutput::None)
}

/// `no ip address`: clear the address; an admin-up interface drops to oper
/// down.
fn no_ip_address(rest: &[&str], session: &mut Session) -> Result<CommandOutput> {
    if rest.is_empty() || !is_abbrev(rest[0], "address") {
        return Err(CliError::Incomplete(
            "expecting 'no ip address'".to_string(),
        ));
    }
    if rest.len() > 1 {
        return Err(CliError::BadArguments(
            "'no ip address' takes no further arguments".to_string(),
        ));
    }
    let name = bound_interface(session)?;
    let state = session
        .device
        .interface_mut(&name)
        .ok_or_else(|| CliError::Semantic(format!("no such interface: {name}")))?;
    state.clear_address();
    Ok(CommandOutput::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iosim_types::{AdminStatus, OperStatus};

    fn if_session(name: &str) -> Session {
        let mut s = Session::new("Router");
        s.mode = Mode::GlobalConfig;
        s.device.ensure_interface(name);
        s.enter_interface(name);
        s
    }

    #[test]
    fn hostname_sets_and_validates() {
        let mut s = Session::new("Router");
        s.mode = Mode::GlobalConfig;
        HostnameCmd.execute(&["Edge1"], &mut s).unwrap();
        assert_eq!(s.device.hostname(), "Edge1");

        let err = HostnameCmd.execute(&["-bad-"], &mut s).unwrap_err();
        assert!(matches!(err, CliError::Validation(_)));
        assert_eq!(s.device.hostname(), "Edge1");
    }

    #[test]
    fn hostname_argument_count() {
        let mut s = Session::new("Router");
        assert!(matches!(
            HostnameCmd.execute(&[], &mut s),
            Err(CliError::Incomplete(_))
        ));
        assert!(matches!(
            HostnameCmd.execute(&["a", "b"], &mut s),
            Err(CliError::BadArguments(_))
        ));
    }

    #[test]
    fn interface_creates_and_binds() {
        let mut s = Session::new("Router");
        s.mode = Mode::GlobalConfig;
        InterfaceCmd.execute(&["g0/0"], &mut s).unwrap();
        assert_eq!(s.mode, Mode::InterfaceConfig);
        assert_eq!(s.current_interface.as_deref(), Some("GigabitEthernet0/0"));
        let st = s.device.interface("GigabitEthernet0/0").unwrap();
        assert_eq!(st.admin, AdminStatus::Down);
        assert_eq!(st.oper, OperStatus::AdministrativelyDown);
    }

    #[test]
    fn interface_accepts_split_spec() {
        let mut s = Session::new("Router");
        s.mode = Mode::GlobalConfig;
        InterfaceCmd.execute(&["g", "0/0"], &mut s).unwrap();
        assert_eq!(s.current_interface.as_deref(), Some("GigabitEthernet0/0"));
        assert_eq!(s.device.interface_count(), 1);
    }

    #[test]
    fn interface_rebinding_reuses_existing_entry() {
        let mut s = Session::new("Router");
        s.mode = Mode::GlobalConfig;
        InterfaceCmd.execute(&["f0/1"], &mut s).unwrap();
        s.device
            .interface_mut("FastEthernet0/1")
            .unwrap()
            .no_shut();
        s.mode = Mode::GlobalConfig;
        InterfaceCmd.execute(&["fa0/1"], &mut s).unwrap();
        assert_eq!(s.device.interface_count(), 1);
        assert_eq!(
            s.device.interface("FastEthernet0/1").unwrap().admin,
            AdminStatus::Up
        );
    }

    #[test]
    fn interface_bad_spec_is_validation_error() {
        let mut s = Session::new("Router");
        s.mode = Mode::GlobalConfig;
        assert!(matches!(
            InterfaceCmd.execute(&["x9"], &mut s),
            Err(CliError::Validation(_))
        ));
        assert!(matches!(
            InterfaceCmd.execute(&[], &mut s),
            Err(CliError::Incomplete(_))
        ));
        assert_eq!(s.mode, Mode::GlobalConfig);
        assert_eq!(s.device.interface_count(), 0);
    }

    #[test]
    fn ip_address_assigns_and_recomputes() {
        let mut s = if_session("GigabitEthernet0/0");
        no_shutdown(&[], &mut s).unwrap();
        IpCmd
            .execute(&["address", "10.0.0.1", "255.255.255.0"], &mut s)
            .unwrap();
        let st = s.device.interface("GigabitEthernet0/0").unwrap();
        assert_eq!(st.ip_address.as_deref(), Some("10.0.0.1"));
        assert_eq!(st.subnet_mask.as_deref(), Some("255.255.255.0"));
        assert_eq!(st.oper, OperStatus::Up);
    }

    #[test]
    fn ip_address_abbreviated_subcommand() {
        let mut s = if_session("GigabitEthernet0/0");
        IpCmd
            .execute(&["a", "10.0.0.1", "255.255.255.0"], &mut s)
            .unwrap();
        assert!(s.device.interface("GigabitEthernet0/0").unwrap().ip_address.is_some());
    }

    #[test]
    fn ip_address_error_taxonomy() {
        let mut s = if_session("GigabitEthernet0/0");
        // Missing sub-phrase entirely.
        assert!(matches!(
            IpCmd.execute(&[], &mut s),
            Err(CliError::Incomplete(_))
        ));
        assert!(matches!(
            IpCmd.execute(&["route", "10.0.0.1"], &mut s),
            Err(CliError::Incomplete(_))
        ));
        // Sub-phrase identified but wrong count.
        assert!(matches!(
            IpCmd.execute(&["address", "10.0.0.1"], &mut s),
            Err(CliError::BadArguments(_))
        ));
        // Bad literals.
        assert!(matches!(
            IpCmd.execute(&["address", "999.0.0.1", "255.255.255.0"], &mut s),
            Err(CliError::Validation(_))
        ));
        assert!(matches!(
            IpCmd.execute(&["address", "10.0.0.1", "mask"], &mut s),
            Err(CliError::Validation(_))
        ));
        // No partial mutation happened.
        let st = s.device.interface("GigabitEthernet0/0").unwrap();
        assert!(st.ip_address.is_none());
        assert!(st.subnet_mask.is_none());
    }

    #[test]
    fn shutdown_then_no_shutdown_without_ip() {
        let mut s = if_session("FastEthernet0/1");
        ShutdownCmd.execute(&[], &mut s).unwrap();
        let st = s.device.interface("FastEthernet0/1").unwrap();
        assert_eq!(st.oper, OperStatus::AdministrativelyDown);

        NoCmd.execute(&["shutdown"], &mut s).unwrap();
        let st = s.device.interface("FastEthernet0/1").unwrap();
        assert_eq!(st.admin, AdminStatus::Up);
        assert_eq!(st.oper, OperStatus::Down);
    }

    #[test]
    fn shutdown_rejects_arguments() {
        let mut s = if_session("FastEthernet0/1");
        assert!(matches!(
            ShutdownCmd.execute(&["now"], &mut s),
            Err(CliError::BadArguments(_))
        ));
        assert!(matches!(
            NoCmd.execute(&["shutdown", "now"], &mut s),
            Err(CliError::BadArguments(_))
        ));
    }

    #[test]
    fn no_ip_address_clears_and_drops_oper() {
        let mut s = if_session("GigabitEthernet0/0");
        no_shutdown(&[], &mut s).unwrap();
        IpCmd
            .execute(&["address", "10.0.0.1", "255.255.255.0"], &mut s)
            .unwrap();

        NoCmd.execute(&["ip", "address"], &mut s).unwrap();
        let st = s.device.interface("GigabitEthernet0/0").unwrap();
        assert!(st.ip_address.is_none());
        assert!(st.subnet_mask.is_none());
        assert_eq!(st.admin, AdminStatus::Up);
        assert_eq!(st.oper, OperStatus::Down);
    }

    #[test]
    fn no_target_resolution_in_interface_mode() {
        let mut s = if_session("GigabitEthernet0/0");
        // "s" and "i" are unambiguous in interface-config mode.
        NoCmd.execute(&["s"], &mut s).unwrap();
        NoCmd.execute(&["i", "a"], &mut s).unwrap();
        assert!(matches!(
            NoCmd.execute(&["x"], &mut s),
            Err(CliError::InvalidInput(_))
        ));
        assert!(matches!(
            NoCmd.execute(&["ip"], &mut s),
            Err(CliError::Incomplete(_))
        ));
        assert!(matches!(
            NoCmd.execute(&["ip", "address", "extra"], &mut s),
            Err(CliError::BadArguments(_))
        ));
        assert!(matches!(
            NoCmd.execute(&[], &mut s),
            Err(CliError::Incomplete(_))
        ));
    }

    #[test]
    fn global_no_targets_are_semantic_errors() {
        let mut s = Session::new("Router");
        s.mode = Mode::GlobalConfig;
        assert!(matches!(
            NoCmd.execute(&["hostname"], &mut s),
            Err(CliError::Semantic(_))
        ));
        assert!(matches!(
            NoCmd.execute(&["int"], &mut s),
            Err(CliError::Semantic(_))
        ));
        // "shutdown" is not negatable in global config.
        assert!(matches!(
            NoCmd.execute(&["shutdown"], &mut s),
            Err(CliError::InvalidInput(_))
        ));
    }
}
