//! Read-only `show` renderers: version, running-config, ip interface brief,
//! history.

use std::fmt::Write as _;
use std::time::Duration;

use iosim_types::{AdminStatus, CliError, Mode, Result};

use crate::registry::{Command, CommandOutput};
use crate::resolver::{self, is_abbrev};
use crate::session::Session;

/// `show` subcommand targets. `run` is a registered alias of
/// `running-config`, so the exact token `run` resolves even though the two
/// names share a prefix.
#[derive(Debug, Clone, Copy)]
enum ShowTarget {
    Version,
    RunningConfig,
    IpInterfaceBrief,
    History,
}

const SHOW_TARGETS: &[(&str, ShowTarget)] = &[
    ("version", ShowTarget::Version),
    ("running-config", ShowTarget::RunningConfig),
    ("run", ShowTarget::RunningConfig),
    ("ip", ShowTarget::IpInterfaceBrief),
    ("history", ShowTarget::History),
];

pub(crate) struct ShowCmd;
impl Command for ShowCmd {
    fn name(&self) -> &str {
        "show"
    }
    fn description(&self) -> &str {
        "Display device information"
    }
    fn usage(&self) -> &str {
        "show <version|running-config|ip interface brief|history>"
    }
    fn modes(&self) -> &[Mode] {
        &[Mode::PrivilegedExec]
    }
    fn execute(&self, args: &[&str], session: &mut Session) -> Result<CommandOutput> {
        let [sub, rest @ ..] = args else {
            return Err(CliError::Incomplete(
                "expecting 'show <subcommand>'".to_string(),
            ));
        };

        match resolver::resolve(sub, SHOW_TARGETS)? {
            ShowTarget::Version => {
                ensure_no_extra("show version", rest)?;
                Ok(CommandOutput::Text(render_version(session)))
            },
            ShowTarget::RunningConfig => {
                ensure_no_extra("show running-config", rest)?;
                Ok(CommandOutput::Text(render_running_config(session)))
            },
            ShowTarget::IpInterfaceBrief => {
                parse_ip_brief_args(rest)?;
                Ok(CommandOutput::Text(render_ip_interface_brief(session)))
            },
            ShowTarget::History => {
                ensure_no_extra("show history", rest)?;
                Ok(CommandOutput::Text(render_history(session)))
            },
        }
    }
}

fn ensure_no_extra(phrase: &str, rest: &[&str]) -> Result<()> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(CliError::BadArguments(format!(
            "'{phrase}' takes no arguments"
        )))
    }
}

/// Validate the `interface brief` tail of `show ip interface brief`.
fn parse_ip_brief_args(rest: &[&str]) -> Result<()> {
    match rest {
        [intf, brief, extra @ ..] if is_abbrev(intf, "interface") && is_abbrev(brief, "brief") => {
            if extra.is_empty() {
                Ok(())
            } else {
                Err(CliError::BadArguments(
                    "extra arguments after 'show ip interface brief'".to_string(),
                ))
            }
        },
        _ => Err(CliError::Incomplete(
            "expecting 'show ip interface brief'".to_string(),
        )),
    }
}

fn render_version(session: &Session) -> String {
    let mut out = String::new();
    out.push_str("iosim IOS-style CLI simulator\n");
    out.push_str("Version: 1.0\n");
    let _ = writeln!(out, "Hostname: {}", session.device.hostname());
    let _ = write!(out, "Uptime: {}", format_uptime(session.uptime()));
    out
}

fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    format!(
        "{:02}h {:02}m {:02}s",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

fn render_running_config(session: &Session) -> String {
    let mut out = String::new();
    out.push_str("Building configuration...\n");
    out.push_str("!\n");
    out.push_str("version 1.0\n");
    out.push_str("!\n");
    let _ = writeln!(out, "hostname {}", session.device.hostname());
    out.push_str("!\n");

    for name in session.device.sorted_names() {
        let state = session
            .device
            .interface(name)
            .expect("sorted_names yields existing interfaces");
        let _ = writeln!(out, "interface {name}");
        if let (Some(ip), Some(mask)) = (&state.ip_address, &state.subnet_mask) {
            let _ = writeln!(out, " ip address {ip} {mask}");
        }
        // Only operator intent is part of the configuration; oper status is
        // derived and never rendered here.
        if state.admin == AdminStatus::Down {
            out.push_str(" shutdown\n");
        }
        out.push_str("!\n");
    }

    out.push_str("!\n");
    out.push_str("end");
    out
}

fn render_ip_interface_brief(session: &Session) -> String {
    let mut out = String::from(
        "Interface                  IP-Address      OK? Method Status                Protocol",
    );
    for name in session.device.sorted_names() {
        let state = session
            .device
            .interface(name)
            .expect("sorted_names yields existing interfaces");
        let (ip, ok, method) = match &state.ip_address {
            Some(ip) => (ip.as_str(), "YES", "manual"),
            None => ("unassigned", "NO", "unset"),
        };
        let status = state.oper.to_string();
        let _ = write!(
            out,
            "\n{name:<26} {ip:<15} {ok:<3} {method:<6} {status:<21} {status}"
        );
    }
    out
}

/// Numbered history listing, shared by `history` and `show history`.
pub(crate) fn render_history(session: &Session) -> String {
    let mut out = String::from("Command History:");
    for (i, line) in session.history().iter().enumerate() {
        let _ = write!(out, "\n {}: {}", i + 1, line);
    }
    out
}
