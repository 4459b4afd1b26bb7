//! Token resolution.
//!
//! Turns what the user typed into a session name and directory. Rules are
//! tried in a fixed order and the first hit wins:
//!
//! 1. `.`: the current directory
//! 2. absolute path, created on demand with `-c` or under the temp root
//! 3. `-`, `--`, ...: the N-th most recently active live session
//! 4. exact live session name
//! 5. live session name prefix (the *last* match in listing order)
//! 6. exact favourite name, then exact alias
//! 7. favourite name prefix (the *first* match in history order)
//! 8. exact directory under the projects root
//! 9. directory name prefix under the projects root
//!
//! Running sessions shadow history, history shadows the filesystem.

use std::path::Path;

use tracing::{debug, info};

use super::errors::SessionError;
use super::types::{MatchSource, ResolvedTarget};
use crate::backend::LiveSession;
use crate::config::PrContext;
use crate::favourites::FavouritesStore;
use crate::probe;

/// Token meaning "the current directory".
pub const HERE_MARKER: &str = ".";
/// Repeated to select earlier sessions: `-` is the previous one.
pub const PREVIOUS_MARKER: char = '-';

pub fn resolve(
    ctx: &PrContext,
    token: &str,
    live: &[LiveSession],
    favourites: &FavouritesStore,
    allow_create_dir: bool,
) -> Result<ResolvedTarget, SessionError> {
    let target = resolve_inner(ctx, token, live, favourites, allow_create_dir)?;
    info!(
        event = "core.session.resolved",
        token = token,
        name = %target.name,
        dir = %target.dir.display(),
        matched_by = target.source.as_str()
    );
    Ok(target)
}

fn resolve_inner(
    ctx: &PrContext,
    token: &str,
    live: &[LiveSession],
    favourites: &FavouritesStore,
    allow_create_dir: bool,
) -> Result<ResolvedTarget, SessionError> {
    if token.is_empty() {
        return Err(no_such_project(token));
    }

    if token == HERE_MARKER {
        return Ok(ResolvedTarget::for_dir(&ctx.cwd, MatchSource::CurrentDir));
    }

    if token.starts_with('/') {
        return resolve_absolute(ctx, &probe::clean_path(Path::new(token)), allow_create_dir);
    }

    if let Some(n) = count_repeated(token, PREVIOUS_MARKER) {
        return resolve_previous(live, n);
    }

    if let Some(session) = live.iter().find(|s| s.name == token) {
        return Ok(ResolvedTarget::for_live(session, MatchSource::LiveExact));
    }

    // Last match wins here, unlike the favourites prefix rule below
    if let Some(session) = live.iter().rev().find(|s| s.name.starts_with(token)) {
        return Ok(ResolvedTarget::for_live(session, MatchSource::LivePrefix));
    }

    if let Some(favourite) = favourites.find_exact(token) {
        return Ok(ResolvedTarget::for_favourite(
            favourite,
            MatchSource::FavouriteExact,
        ));
    }

    if let Some(favourite) = favourites.find_prefix(token) {
        return Ok(ResolvedTarget::for_favourite(
            favourite,
            MatchSource::FavouritePrefix,
        ));
    }

    // `..` segments are resolved first so the name is a real directory name
    let exact = probe::clean_path(&ctx.projects_root.join(token));
    if probe::is_dir(&exact) {
        return Ok(ResolvedTarget::for_dir(&exact, MatchSource::ProjectDirExact));
    }

    if let Some(dir) = probe::find_dir_with_prefix(&ctx.projects_root, token)? {
        return Ok(ResolvedTarget::for_dir(&dir, MatchSource::ProjectDirPrefix));
    }

    Err(no_such_project(token))
}

fn no_such_project(token: &str) -> SessionError {
    debug!(event = "core.session.resolve_no_match", token = token);
    SessionError::NoSuchProject {
        token: token.to_string(),
    }
}

fn resolve_absolute(
    ctx: &PrContext,
    path: &Path,
    allow_create_dir: bool,
) -> Result<ResolvedTarget, SessionError> {
    if probe::is_dir(path) {
        return Ok(ResolvedTarget::for_dir(path, MatchSource::AbsolutePath));
    }

    let display = path.display().to_string();
    if path.exists() {
        return Err(SessionError::NotADirectory { path: display });
    }
    if !path.parent().is_some_and(probe::is_dir) {
        return Err(SessionError::ParentNotFound { path: display });
    }
    if !allow_create_dir && !ctx.is_ephemeral(path) {
        return Err(SessionError::DirectoryNotFound { path: display });
    }

    probe::create_project_dir(path)?;
    Ok(ResolvedTarget::for_dir(path, MatchSource::AbsolutePath))
}

/// The `n`-th most recently active session; `n` is clamped to the oldest.
fn resolve_previous(live: &[LiveSession], n: usize) -> Result<ResolvedTarget, SessionError> {
    if live.len() < 2 {
        return Err(SessionError::TooFewSessions { count: live.len() });
    }

    let mut sorted: Vec<&LiveSession> = live.iter().collect();
    // Stable: equal activity keeps listing order; unknown activity sorts last
    sorted.sort_by(|a, b| b.last_activity.cmp(&a.last_activity));

    let index = n.min(sorted.len() - 1);
    Ok(ResolvedTarget::for_live(
        sorted[index],
        MatchSource::PreviousSession,
    ))
}

/// Length of `token` if it consists only of `marker`.
fn count_repeated(token: &str, marker: char) -> Option<usize> {
    if !token.is_empty() && token.chars().all(|c| c == marker) {
        Some(token.chars().count())
    } else {
        None
    }
}
