//! Bring a resolved target to life in the backend.
//!
//! Sessions are keyed by (name, directory). When the bare name is taken by a
//! session bound elsewhere, numbered variants are tried; a foreign session is
//! never reused or modified.

use tracing::{debug, info};

use super::errors::SessionError;
use super::types::{Materialized, ResolvedTarget};
use crate::backend::{CreateSessionRequest, LiveSession, SessionBackend};
use crate::favourites::FavouritesStore;

/// Suffixes tried in order after the session base name.
pub const NAME_SUFFIXES: [&str; 10] = ["", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Find or create the backend session for `target` and switch to it.
///
/// The favourites store is touched before the session is created and saved
/// around the switch: before it when the switch replaces this process, after
/// it otherwise, so a failed switch leaves the document untouched.
pub fn materialize(
    backend: &dyn SessionBackend,
    favourites: &mut FavouritesStore,
    target: &ResolvedTarget,
    live: &[LiveSession],
) -> Result<Materialized, SessionError> {
    let base = backend.normalize_name(&target.name);

    for suffix in NAME_SUFFIXES {
        let candidate = format!("{}{}", base, suffix);
        // The bare name is remembered under the project's own name
        let favourite_name = if suffix.is_empty() {
            target.name.as_str()
        } else {
            candidate.as_str()
        };

        match live.iter().find(|s| s.name == candidate) {
            Some(existing) if existing.path == target.dir => {
                info!(
                    event = "core.session.reusing_live",
                    name = %candidate,
                    dir = %target.dir.display()
                );
                favourites.touch(favourite_name, &target.dir);
                switch_and_save(backend, favourites, &candidate)?;
                return Ok(Materialized {
                    name: candidate,
                    created: false,
                });
            }
            Some(existing) => {
                debug!(
                    event = "core.session.name_collision",
                    name = %candidate,
                    wanted_dir = %target.dir.display(),
                    existing_dir = %existing.path.display()
                );
            }
            None => {
                favourites.touch(favourite_name, &target.dir);
                backend.create_session(&CreateSessionRequest {
                    name: &candidate,
                    dir: &target.dir,
                    cmd: target.cmd.as_deref(),
                    env: &target.env,
                })?;
                switch_and_save(backend, favourites, &candidate)?;
                return Ok(Materialized {
                    name: candidate,
                    created: true,
                });
            }
        }
    }

    Err(SessionError::NamesExhausted { name: base })
}

fn switch_and_save(
    backend: &dyn SessionBackend,
    favourites: &mut FavouritesStore,
    name: &str,
) -> Result<(), SessionError> {
    if backend.replaces_process() {
        favourites.save()?;
        backend.switch_to(name)?;
    } else {
        backend.switch_to(name)?;
        favourites.save()?;
    }
    Ok(())
}
