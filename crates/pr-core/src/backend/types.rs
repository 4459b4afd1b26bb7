use chrono::{DateTime, Local, Utc};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A session observed in the multiplexer at invocation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveSession {
    pub name: String,
    pub path: PathBuf,
    pub attached: bool,
    /// None when the backend did not report activity
    pub last_activity: Option<DateTime<Utc>>,
    pub window_count: u32,
}

impl LiveSession {
    /// A detached, inactive session. Mostly useful for history entries and tests.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            attached: false,
            last_activity: None,
            window_count: 0,
        }
    }

    /// Activity formatted for display: time of day within the last 24 hours,
    /// month and day otherwise, empty when unknown.
    pub fn format_last_activity(&self, now: DateTime<Utc>) -> String {
        match self.last_activity {
            Some(ts) => {
                let local = ts.with_timezone(&Local);
                if now.signed_duration_since(ts) < chrono::Duration::hours(24) {
                    local.format("%H:%M:%S").to_string()
                } else {
                    local.format("%b %d").to_string()
                }
            }
            None => String::new(),
        }
    }
}

/// Parameters for creating a detached session.
#[derive(Debug, Clone, Copy)]
pub struct CreateSessionRequest<'a> {
    pub name: &'a str,
    pub dir: &'a Path,
    /// Trailing command for the first window
    pub cmd: Option<&'a str>,
    pub env: &'a BTreeMap<String, String>,
}
