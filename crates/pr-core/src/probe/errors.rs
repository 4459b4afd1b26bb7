use crate::errors::PrError;

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error(
        "Reached max number of temporary projects ({max}). Please clean your {root}/t* folders."
    )]
    TempNamespaceExhausted { root: String, max: usize },

    #[error("Cannot create directory {path}: {source}")]
    CreateFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("Cannot read directory {path}: {source}")]
    ReadDirFailed {
        path: String,
        source: std::io::Error,
    },
}

impl PrError for ProbeError {
    fn error_code(&self) -> &'static str {
        match self {
            ProbeError::TempNamespaceExhausted { .. } => "PROBE_TEMP_NAMESPACE_EXHAUSTED",
            ProbeError::CreateFailed { .. } => "PROBE_CREATE_FAILED",
            ProbeError::ReadDirFailed { .. } => "PROBE_READ_DIR_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ProbeError::TempNamespaceExhausted { .. })
    }
}
