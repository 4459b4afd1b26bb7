//! Per-project TODO files: a `.todo` file at the project root.

use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::{BackendError, SessionBackend};
use crate::probe;

pub const TODO_FILE_NAME: &str = ".todo";

pub fn todo_path(dir: &Path) -> PathBuf {
    dir.join(TODO_FILE_NAME)
}

/// Contents of the project's TODO file, empty when there is none.
///
/// Read failures are logged and shown as empty so one unreadable file
/// does not break the whole listing.
pub fn todo_contents(dir: &Path) -> String {
    let path = todo_path(dir);
    if !probe::is_file(&path) {
        return String::new();
    }
    match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(
                event = "core.todo.read_failed",
                path = %path.display(),
                error = %e
            );
            String::new()
        }
    }
}

/// TODO file of the session the user is currently in.
pub fn current_todo_path(backend: &dyn SessionBackend) -> Result<PathBuf, BackendError> {
    Ok(todo_path(&backend.current_session_path()?))
}
