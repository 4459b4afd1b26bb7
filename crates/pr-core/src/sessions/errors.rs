use crate::backend::BackendError;
use crate::errors::PrError;
use crate::favourites::FavouritesError;
use crate::probe::ProbeError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("No such project '{token}': no session, favourite or ~/{token}* directory matches")]
    NoSuchProject { token: String },

    #[error("Cannot switch to a previous session (too few sessions: {count})")]
    TooFewSessions { count: usize },

    #[error("Cannot switch to {path} (directory does not exist): use -c flag to create a new directory")]
    DirectoryNotFound { path: String },

    #[error("Cannot switch to {path}: looks like a dir but does not exist and cannot be created")]
    ParentNotFound { path: String },

    #[error("Cannot switch to {path}: not a directory")]
    NotADirectory { path: String },

    #[error("Cannot create session {name} because names {name}, {name}1..{name}9 are occupied")]
    NamesExhausted { name: String },

    #[error(transparent)]
    Probe {
        #[from]
        source: ProbeError,
    },

    #[error(transparent)]
    Backend {
        #[from]
        source: BackendError,
    },

    #[error(transparent)]
    Favourites {
        #[from]
        source: FavouritesError,
    },
}

impl PrError for SessionError {
    fn error_code(&self) -> &'static str {
        match self {
            SessionError::NoSuchProject { .. } => "SESSION_NO_SUCH_PROJECT",
            SessionError::TooFewSessions { .. } => "SESSION_TOO_FEW_SESSIONS",
            SessionError::DirectoryNotFound { .. } => "SESSION_DIRECTORY_NOT_FOUND",
            SessionError::ParentNotFound { .. } => "SESSION_PARENT_NOT_FOUND",
            SessionError::NotADirectory { .. } => "SESSION_NOT_A_DIRECTORY",
            SessionError::NamesExhausted { .. } => "SESSION_NAMES_EXHAUSTED",
            SessionError::Probe { source } => source.error_code(),
            SessionError::Backend { source } => source.error_code(),
            SessionError::Favourites { source } => source.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            SessionError::NoSuchProject { .. }
            | SessionError::TooFewSessions { .. }
            | SessionError::DirectoryNotFound { .. }
            | SessionError::ParentNotFound { .. }
            | SessionError::NotADirectory { .. }
            | SessionError::NamesExhausted { .. } => true,

            SessionError::Probe { source } => source.is_user_error(),
            SessionError::Backend { source } => source.is_user_error(),
            SessionError::Favourites { source } => source.is_user_error(),
        }
    }
}
