//! Terminal handoff: give the user's terminal to another program.

pub mod handoff;

pub use handoff::{HandoffError, replace_process};
