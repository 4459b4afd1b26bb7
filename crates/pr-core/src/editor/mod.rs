//! Open files in the user's editor by handing the terminal over to it.

use std::convert::Infallible;
use std::ffi::OsString;
use std::path::Path;

use tracing::info;

use crate::config::PrContext;
use crate::errors::PrError;
use crate::terminal::{self, HandoffError};

pub const DEFAULT_EDITOR: &str = "nano";

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("Cannot locate editor '{editor}' in PATH")]
    NotFound { editor: String },

    #[error(transparent)]
    Handoff {
        #[from]
        source: HandoffError,
    },
}

impl PrError for EditorError {
    fn error_code(&self) -> &'static str {
        match self {
            EditorError::NotFound { .. } => "EDITOR_NOT_FOUND",
            EditorError::Handoff { .. } => "EDITOR_HANDOFF_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, EditorError::NotFound { .. })
    }
}

/// Determine which editor to use based on precedence:
/// config `editor.command` > $EDITOR environment variable > "nano"
pub fn select_editor(configured: Option<&str>) -> String {
    configured
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var("EDITOR").ok().filter(|e| !e.is_empty()))
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
}

/// Replace this process with the editor open on `file`.
pub fn open_in_editor(ctx: &PrContext, file: &Path) -> Result<Infallible, EditorError> {
    let editor = select_editor(ctx.editor.as_deref());
    let program = which::which(&editor).map_err(|_| EditorError::NotFound {
        editor: editor.clone(),
    })?;

    info!(
        event = "core.editor.open_started",
        editor = %editor,
        file = %file.display()
    );

    Ok(terminal::replace_process(
        &program,
        &[OsString::from(file.as_os_str())],
    )?)
}
