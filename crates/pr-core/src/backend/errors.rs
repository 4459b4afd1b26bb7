use crate::errors::PrError;
use crate::terminal::HandoffError;

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Failed to run '{command}': {source}")]
    SpawnFailed {
        command: String,
        source: std::io::Error,
    },

    #[error("'{command}' failed: {output}")]
    CommandFailed { command: String, output: String },

    #[error("tmux executable '{binary}' not found in PATH")]
    NotInstalled { binary: String },

    #[error(transparent)]
    Handoff {
        #[from]
        source: HandoffError,
    },
}

impl PrError for BackendError {
    fn error_code(&self) -> &'static str {
        match self {
            BackendError::SpawnFailed { .. } => "BACKEND_SPAWN_FAILED",
            BackendError::CommandFailed { .. } => "BACKEND_COMMAND_FAILED",
            BackendError::NotInstalled { .. } => "BACKEND_NOT_INSTALLED",
            BackendError::Handoff { .. } => "BACKEND_HANDOFF_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, BackendError::NotInstalled { .. })
    }
}
