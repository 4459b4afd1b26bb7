//! Session backend trait definition.

use std::path::PathBuf;

use super::errors::BackendError;
use super::types::{CreateSessionRequest, LiveSession};

/// Interface to a terminal multiplexer.
///
/// Every call is blocking. Implementations report failures with the
/// multiplexer's own output so the user sees what went wrong.
pub trait SessionBackend {
    /// Short backend name for logs (e.g., "tmux").
    fn name(&self) -> &'static str;

    /// Sessions currently running, in the backend's listing order.
    fn list_sessions(&self) -> Result<Vec<LiveSession>, BackendError>;

    /// Create a detached session bound to `request.dir`.
    fn create_session(&self, request: &CreateSessionRequest<'_>) -> Result<(), BackendError>;

    /// Move the user's client to `name`.
    ///
    /// May hand the terminal over and never return on success.
    fn switch_to(&self, name: &str) -> Result<(), BackendError>;

    /// Whether a successful [`switch_to`](Self::switch_to) replaces this
    /// process, so nothing runs after it.
    fn replaces_process(&self) -> bool {
        false
    }

    /// Working directory of the session the user is currently in.
    fn current_session_path(&self) -> Result<PathBuf, BackendError>;

    /// Map a project name onto a name the backend will keep verbatim.
    fn normalize_name(&self, name: &str) -> String {
        name.to_string()
    }
}
