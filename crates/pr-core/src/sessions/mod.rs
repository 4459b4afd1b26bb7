pub mod errors;
pub mod handler;
pub mod materialize;
pub mod resolve;
pub mod types;

pub use errors::SessionError;
pub use handler::{create_temp_project, switch_session};
pub use materialize::{NAME_SUFFIXES, materialize};
pub use resolve::{HERE_MARKER, PREVIOUS_MARKER, resolve};
pub use types::{MatchSource, Materialized, ResolvedTarget};
