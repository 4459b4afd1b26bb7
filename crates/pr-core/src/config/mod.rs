//! # Configuration System
//!
//! Optional TOML user configuration for pr, plus the runtime [`PrContext`]
//! gathered once at startup and passed by reference to the core operations.
//!
//! ## Configuration Sources
//!
//! Later sources override earlier ones:
//! 1. **Hardcoded defaults** - `/tmp` temp root, `~/.config/pr.json` favourites
//! 2. **User config** - `~/.config/pr.toml` (or `$PR_CONFIG_FILE`)
//! 3. **Environment** - `$PR_FAVOURITES_FILE` for the favourites document
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.config/pr.toml
//! [paths]
//! temp_root = "/tmp"
//! projects_root = "/home/me/src"
//!
//! [editor]
//! command = "nvim"
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use pr_core::config::{PrConfig, PrContext};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PrConfig::load()?;
//!     let ctx = PrContext::from_config(&config)?;
//!     println!("favourites at {}", ctx.favourites_path.display());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;

pub use types::{EditorConfig, PathsConfig, PrConfig, PrContext, TmuxConfig};

impl PrConfig {
    /// Load the user configuration.
    ///
    /// See [`loading::load_user_config`] for details.
    pub fn load() -> Result<Self, crate::errors::ConfigError> {
        loading::load_user_config()
    }
}

impl PrContext {
    /// Build the runtime context from a loaded configuration.
    ///
    /// See [`loading::build_context`] for details.
    pub fn from_config(config: &PrConfig) -> Result<Self, crate::errors::ConfigError> {
        loading::build_context(config)
    }
}
