//! tmux backend, driven through the tmux command line.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Output};

use chrono::DateTime;
use tracing::{debug, info, warn};

use super::errors::BackendError;
use super::traits::SessionBackend;
use super::types::{CreateSessionRequest, LiveSession};
use crate::config::PrContext;
use crate::terminal;

const LIST_FORMAT: &str =
    "#S\t#{session_path}\t#{session_attached}\t#{session_windows}\t#{session_activity}";

#[derive(Debug, Clone)]
pub struct TmuxBackend {
    binary: String,
    /// Whether this process runs inside a tmux client (`$TMUX` set)
    inside_client: bool,
}

impl TmuxBackend {
    pub fn new(binary: impl Into<String>, inside_client: bool) -> Self {
        Self {
            binary: binary.into(),
            inside_client,
        }
    }

    pub fn from_context(ctx: &PrContext) -> Self {
        let inside_client = std::env::var_os("TMUX").is_some_and(|v| !v.is_empty());
        Self::new(ctx.tmux_binary.clone(), inside_client)
    }

    fn describe(&self, args: &[OsString]) -> String {
        let mut parts = vec![self.binary.clone()];
        parts.extend(args.iter().map(|a| a.to_string_lossy().into_owned()));
        parts.join(" ")
    }

    fn output(&self, args: &[OsString]) -> Result<Output, BackendError> {
        debug!(event = "core.tmux.command_started", command = %self.describe(args));
        Command::new(&self.binary)
            .args(args)
            .output()
            .map_err(|e| BackendError::SpawnFailed {
                command: self.describe(args),
                source: e,
            })
    }

    /// Run tmux and require a zero exit status.
    fn run(&self, args: &[OsString]) -> Result<String, BackendError> {
        let output = self.output(args)?;
        if output.status.success() {
            return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
        }
        let combined = format!(
            "{}{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        Err(BackendError::CommandFailed {
            command: self.describe(args),
            output: combined.trim().to_string(),
        })
    }
}

impl SessionBackend for TmuxBackend {
    fn name(&self) -> &'static str {
        "tmux"
    }

    /// A failed listing (no server running, tmux missing) counts as no sessions.
    fn list_sessions(&self) -> Result<Vec<LiveSession>, BackendError> {
        let args = os_args(["list-sessions", "-F", LIST_FORMAT]);
        match self.run(&args) {
            Ok(stdout) => {
                let sessions = parse_list_sessions(&stdout);
                debug!(event = "core.tmux.list_completed", count = sessions.len());
                Ok(sessions)
            }
            Err(e) => {
                warn!(event = "core.tmux.list_failed", error = %e);
                Ok(Vec::new())
            }
        }
    }

    fn create_session(&self, request: &CreateSessionRequest<'_>) -> Result<(), BackendError> {
        let args = create_session_args(request);
        self.run(&args)?;
        info!(
            event = "core.tmux.session_created",
            name = request.name,
            dir = %request.dir.display()
        );
        Ok(())
    }

    fn switch_to(&self, name: &str) -> Result<(), BackendError> {
        if self.inside_client {
            self.run(&os_args(["switch-client", "-t", name]))?;
            info!(event = "core.tmux.client_switched", name = name);
            return Ok(());
        }

        let binary = which::which(&self.binary).map_err(|_| BackendError::NotInstalled {
            binary: self.binary.clone(),
        })?;
        info!(event = "core.tmux.attach_started", name = name);
        match terminal::replace_process(&binary, &os_args(["attach", "-t", name])) {
            Ok(never) => match never {},
            Err(e) => Err(e.into()),
        }
    }

    /// Outside a client the switch is an exec of `tmux attach`.
    fn replaces_process(&self) -> bool {
        !self.inside_client
    }

    fn current_session_path(&self) -> Result<PathBuf, BackendError> {
        let stdout = self.run(&os_args(["display-message", "-p", "#{session_path}"]))?;
        Ok(PathBuf::from(stdout.trim()))
    }

    /// tmux silently rewrites `.` and `:` in session names to `_`.
    fn normalize_name(&self, name: &str) -> String {
        name.replace(['.', ':'], "_")
    }
}

fn os_args<const N: usize>(args: [&str; N]) -> Vec<OsString> {
    args.iter().map(OsString::from).collect()
}

/// Arguments for `tmux new`; the start command must come last.
pub fn create_session_args(request: &CreateSessionRequest<'_>) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "new".into(),
        "-c".into(),
        request.dir.as_os_str().to_os_string(),
        "-s".into(),
        request.name.into(),
        "-d".into(),
    ];
    for (key, value) in request.env {
        args.push("-e".into());
        args.push(format!("{}={}", key, value).into());
    }
    if let Some(cmd) = request.cmd.filter(|c| !c.is_empty()) {
        args.push(cmd.into());
    }
    args
}

/// Parse `list-sessions` output in [`LIST_FORMAT`]. Malformed lines are skipped.
pub fn parse_list_sessions(stdout: &str) -> Vec<LiveSession> {
    stdout
        .lines()
        .filter_map(|line| {
            let parts: Vec<&str> = line.split('\t').collect();
            let [name, path, attached, windows, activity] = parts.as_slice() else {
                if !line.trim().is_empty() {
                    debug!(event = "core.tmux.list_line_skipped", line = line);
                }
                return None;
            };
            Some(LiveSession {
                name: name.to_string(),
                path: PathBuf::from(path),
                attached: *attached != "0",
                last_activity: activity
                    .parse::<i64>()
                    .ok()
                    .and_then(|secs| DateTime::from_timestamp(secs, 0)),
                window_count: windows.parse().unwrap_or(0),
            })
        })
        .collect()
}
