use std::path::PathBuf;

use tracing::{error, info};

use super::errors::SessionError;
use super::materialize::materialize;
use super::resolve::resolve;
use super::types::Materialized;
use crate::backend::SessionBackend;
use crate::config::PrContext;
use crate::favourites::FavouritesStore;
use crate::probe;

/// Resolve `token`, make sure its session exists and switch the client to it.
pub fn switch_session(
    ctx: &PrContext,
    backend: &dyn SessionBackend,
    favourites: &mut FavouritesStore,
    token: &str,
    allow_create_dir: bool,
) -> Result<Materialized, SessionError> {
    info!(
        event = "core.session.switch_started",
        token = token,
        backend = backend.name(),
        allow_create_dir = allow_create_dir
    );

    let live = backend.list_sessions()?;
    let result = resolve(ctx, token, &live, favourites, allow_create_dir)
        .and_then(|target| materialize(backend, favourites, &target, &live));

    match &result {
        Ok(materialized) => info!(
            event = "core.session.switch_completed",
            name = %materialized.name,
            created = materialized.created
        ),
        Err(e) => error!(event = "core.session.switch_failed", token = token, error = %e),
    }
    result
}

/// Allocate a fresh `tN` directory under the temp root.
pub fn create_temp_project(ctx: &PrContext) -> Result<PathBuf, SessionError> {
    Ok(probe::allocate_temp_project(&ctx.temp_root)?)
}
