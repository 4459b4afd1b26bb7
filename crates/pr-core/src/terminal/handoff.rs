use std::convert::Infallible;
use std::ffi::OsString;
use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::Command;

use crate::errors::PrError;

#[derive(Debug, thiserror::Error)]
#[error("Failed to hand terminal over to {program}: {source}")]
pub struct HandoffError {
    pub program: String,
    pub source: std::io::Error,
}

impl PrError for HandoffError {
    fn error_code(&self) -> &'static str {
        "TERMINAL_HANDOFF_FAILED"
    }
}

/// Replace the current process image with `program`.
///
/// Control never comes back on success. The inherited environment and
/// standard streams go to the new program unchanged.
pub fn replace_process(program: &Path, args: &[OsString]) -> Result<Infallible, HandoffError> {
    tracing::info!(
        event = "core.terminal.handoff_started",
        program = %program.display()
    );
    let source = Command::new(program).args(args).exec();
    tracing::error!(
        event = "core.terminal.handoff_failed",
        program = %program.display(),
        error = %source
    );
    Err(HandoffError {
        program: program.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_returns_error() {
        let err = replace_process(Path::new("/nonexistent/definitely/missing"), &[]).unwrap_err();
        assert_eq!(err.source.kind(), std::io::ErrorKind::NotFound);
        assert!(err.to_string().contains("/nonexistent/definitely/missing"));
        assert_eq!(err.error_code(), "TERMINAL_HANDOFF_FAILED");
    }
}
