//! Configuration type definitions for pr.
//!
//! # Example Configuration
//!
//! ```toml
//! [paths]
//! favourites = "/home/me/.config/pr.json"
//! temp_root = "/tmp"
//! projects_root = "/home/me"
//!
//! [editor]
//! command = "vim"
//!
//! [tmux]
//! binary = "/usr/local/bin/tmux"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration loaded from the TOML user config file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PrConfig {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub editor: EditorConfig,

    #[serde(default)]
    pub tmux: TmuxConfig,
}

/// Filesystem locations.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PathsConfig {
    /// Favourites document. Default: `~/.config/pr.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favourites: Option<PathBuf>,

    /// Ephemeral root. Sessions under it are never remembered and
    /// missing directories under it are created without `-c`.
    /// Default: `/tmp`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_root: Option<PathBuf>,

    /// Directory scanned for project names. Default: home directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects_root: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EditorConfig {
    /// Editor command; takes precedence over `$EDITOR`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TmuxConfig {
    /// tmux executable name or path. Default: `tmux`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary: Option<String>,
}

/// Runtime context, constructed once at process start.
#[derive(Debug, Clone)]
pub struct PrContext {
    /// Directory whose subdirectories are treated as projects
    pub projects_root: PathBuf,
    /// Working directory of the process, used for the `.` token
    pub cwd: PathBuf,
    pub favourites_path: PathBuf,
    pub temp_root: PathBuf,
    /// Editor from config, if any. `$EDITOR` is consulted at use.
    pub editor: Option<String>,
    pub tmux_binary: String,
}

impl PrContext {
    /// Whether `path` lies strictly below the ephemeral root.
    pub fn is_ephemeral(&self, path: &std::path::Path) -> bool {
        crate::probe::is_under(&self.temp_root, path)
    }
}
