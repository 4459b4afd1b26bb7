//! Session backend: the boundary to the terminal multiplexer.
//!
//! The core only talks to [`SessionBackend`]; [`tmux::TmuxBackend`] is the
//! production implementation.

pub mod errors;
pub mod tmux;
pub mod traits;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;

pub use errors::BackendError;
pub use tmux::TmuxBackend;
pub use traits::SessionBackend;
pub use types::{CreateSessionRequest, LiveSession};
