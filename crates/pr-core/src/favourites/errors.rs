use crate::errors::PrError;

#[derive(Debug, thiserror::Error)]
pub enum FavouritesError {
    #[error("Failed to read favourites file {path}: {source}")]
    LoadFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("Favourites file {path} is corrupted: {message}. Fix it with 'pr --edit'.")]
    Corrupted { path: String, message: String },

    #[error("Failed to save favourites: {message}")]
    SaveFailed { message: String },
}

impl PrError for FavouritesError {
    fn error_code(&self) -> &'static str {
        match self {
            FavouritesError::LoadFailed { .. } => "FAVOURITES_LOAD_FAILED",
            FavouritesError::Corrupted { .. } => "FAVOURITES_CORRUPTED",
            FavouritesError::SaveFailed { .. } => "FAVOURITES_SAVE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            FavouritesError::Corrupted { .. } => true,
            FavouritesError::LoadFailed { .. } | FavouritesError::SaveFailed { .. } => false,
        }
    }
}
