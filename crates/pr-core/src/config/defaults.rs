//! Default values for configuration.

use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "pr.toml";
pub const FAVOURITES_FILE_NAME: &str = "pr.json";

/// Environment variable overriding the config file location.
pub const CONFIG_FILE_ENV: &str = "PR_CONFIG_FILE";
/// Environment variable overriding the favourites document location.
pub const FAVOURITES_FILE_ENV: &str = "PR_FAVOURITES_FILE";

pub fn default_temp_root() -> PathBuf {
    PathBuf::from("/tmp")
}

pub fn default_tmux_binary() -> String {
    "tmux".to_string()
}

pub fn default_config_path(home: &Path) -> PathBuf {
    home.join(".config").join(CONFIG_FILE_NAME)
}

pub fn default_favourites_path(home: &Path) -> PathBuf {
    home.join(".config").join(FAVOURITES_FILE_NAME)
}
