//! Favourites file persistence
//!
//! The document is replaced atomically: written to a sibling temp file
//! (owner read/write only) and renamed over the original.

use std::fs;
use std::io::Write;
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::Path;

use serde::Serialize;

use super::errors::FavouritesError;
use super::types::{FavouriteSession, FavouritesData};

const FILE_MODE: u32 = 0o600;

/// Load favourites from `path`.
///
/// A missing file yields an empty list. Unreadable or malformed files are errors.
pub fn load_favourites(path: &Path) -> Result<Vec<FavouriteSession>, FavouritesError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                event = "core.favourites.file_not_found",
                path = %path.display()
            );
            return Ok(Vec::new());
        }
        Err(e) => {
            tracing::error!(
                event = "core.favourites.load_failed",
                path = %path.display(),
                error = %e
            );
            return Err(FavouritesError::LoadFailed {
                path: path.display().to_string(),
                source: e,
            });
        }
    };

    let data: FavouritesData = serde_json::from_str(&content).map_err(|e| {
        tracing::error!(
            event = "core.favourites.json_parse_failed",
            path = %path.display(),
            error = %e
        );
        FavouritesError::Corrupted {
            path: path.display().to_string(),
            message: e.to_string(),
        }
    })?;

    tracing::debug!(
        event = "core.favourites.loaded",
        path = %path.display(),
        count = data.sessions.len()
    );

    Ok(data.sessions)
}

/// Save favourites to `path`, creating the parent directory when needed.
pub fn save_favourites(path: &Path, sessions: &[FavouriteSession]) -> Result<(), FavouritesError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| FavouritesError::SaveFailed {
            message: format!("Failed to create directory ({}): {}", parent.display(), e),
        })?;
    }

    let data = FavouritesData {
        sessions: sessions.to_vec(),
    };
    let json = to_indented_json(&data).map_err(|e| FavouritesError::SaveFailed {
        message: format!("Failed to serialize favourites: {}", e),
    })?;

    let temp_file = path.with_extension("json.tmp");

    if let Err(e) = write_private(&temp_file, &json) {
        cleanup_temp_file(&temp_file, &e);
        return Err(FavouritesError::SaveFailed {
            message: format!("Failed to write {}: {}", temp_file.display(), e),
        });
    }

    if let Err(e) = fs::rename(&temp_file, path) {
        cleanup_temp_file(&temp_file, &e);
        return Err(FavouritesError::SaveFailed {
            message: format!("Failed to replace {}: {}", path.display(), e),
        });
    }

    tracing::info!(
        event = "core.favourites.saved",
        path = %path.display(),
        count = sessions.len()
    );

    Ok(())
}

/// Pretty JSON with four-space indentation.
fn to_indented_json<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}

fn write_private(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(FILE_MODE)
        .open(path)?;
    // mode() only applies on creation; a stale temp file keeps its old bits
    file.set_permissions(fs::Permissions::from_mode(FILE_MODE))?;
    file.write_all(content)?;
    file.sync_all()
}

fn cleanup_temp_file(temp_file: &Path, original_error: &std::io::Error) {
    if let Err(cleanup_err) = fs::remove_file(temp_file) {
        tracing::warn!(
            event = "core.favourites.temp_file_cleanup_failed",
            temp_file = %temp_file.display(),
            original_error = %original_error,
            cleanup_error = %cleanup_err
        );
    }
}
