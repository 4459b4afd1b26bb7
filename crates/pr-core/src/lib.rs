//! pr-core: Core library for switching between tmux project sessions
//!
//! This library resolves a short token typed by the user to a project
//! directory, finds or creates the matching tmux session and keeps a
//! most-recently-used list of projects. It is used by the `pr` CLI.
//!
//! # Main Entry Points
//!
//! - [`sessions`] - Resolve tokens and switch to sessions
//! - [`favourites`] - Most-recently-used project store
//! - [`backend`] - tmux session backend
//! - [`listing`] - Live and remembered sessions for display
//! - [`config`] - Configuration management

pub mod backend;
pub mod config;
pub mod editor;
pub mod errors;
pub mod events;
pub mod favourites;
pub mod listing;
pub mod logging;
pub mod probe;
pub mod sessions;
pub mod terminal;
pub mod todo;

// Re-export commonly used types at crate root for convenience
pub use backend::{BackendError, LiveSession, SessionBackend, TmuxBackend};
pub use config::{PrConfig, PrContext};
pub use editor::EditorError;
pub use errors::PrError;
pub use favourites::{FavouriteSession, FavouritesError, FavouritesStore};
pub use listing::{ListingEntry, collect_listing};
pub use sessions::{Materialized, ResolvedTarget, SessionError};

// Re-export handler modules as the primary API
pub use sessions::handler as session_ops;

// Re-export logging initialization
pub use logging::init_logging;
