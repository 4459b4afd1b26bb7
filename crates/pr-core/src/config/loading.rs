//! Configuration loading and runtime context construction.
//!
//! A missing config file is not an error; a config file that exists but
//! cannot be parsed is.

use crate::config::defaults::{
    CONFIG_FILE_ENV, FAVOURITES_FILE_ENV, default_config_path, default_favourites_path,
    default_temp_root, default_tmux_binary,
};
use crate::config::types::{PrConfig, PrContext};
use crate::errors::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Load the user configuration from `~/.config/pr.toml`.
///
/// `$PR_CONFIG_FILE` overrides the location.
pub fn load_user_config() -> Result<PrConfig, ConfigError> {
    let path = match env_path(CONFIG_FILE_ENV) {
        Some(path) => path,
        None => default_config_path(&dirs::home_dir().ok_or(ConfigError::HomeNotFound)?),
    };
    load_config_file(&path)
}

/// Load a configuration file, returning defaults when it does not exist.
pub fn load_config_file(path: &Path) -> Result<PrConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(
                event = "core.config.file_not_found",
                path = %path.display()
            );
            return Ok(PrConfig::default());
        }
        Err(e) => return Err(ConfigError::IoError { source: e }),
    };

    let config: PrConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    info!(event = "core.config.loaded", path = %path.display());
    Ok(config)
}

/// Build the runtime context for this process.
pub fn build_context(config: &PrConfig) -> Result<PrContext, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::HomeNotFound)?;
    let cwd = std::env::current_dir()?;
    Ok(context_for(config, &home, cwd))
}

/// Resolve every path in `config` against `home`.
///
/// `$PR_FAVOURITES_FILE` wins over the configured favourites path.
pub fn context_for(config: &PrConfig, home: &Path, cwd: PathBuf) -> PrContext {
    let favourites_path = env_path(FAVOURITES_FILE_ENV)
        .or_else(|| config.paths.favourites.clone())
        .unwrap_or_else(|| default_favourites_path(home));

    PrContext {
        projects_root: config
            .paths
            .projects_root
            .clone()
            .unwrap_or_else(|| home.to_path_buf()),
        cwd,
        favourites_path,
        temp_root: config
            .paths
            .temp_root
            .clone()
            .unwrap_or_else(default_temp_root),
        editor: config.editor.command.clone(),
        tmux_binary: config
            .tmux
            .binary
            .clone()
            .unwrap_or_else(default_tmux_binary),
    }
}

fn env_path(var: &str) -> Option<PathBuf> {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => None,
    }
}

/// Test utilities for env-dependent configuration.
#[doc(hidden)]
pub mod test_helpers {
    use std::sync::Mutex;

    /// Serializes tests that modify pr environment variables.
    pub static ENV_LOCK: Mutex<()> = Mutex::new(());
}

#[cfg(test)]
mod tests {
    use super::test_helpers::ENV_LOCK;
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_config_file(&temp_dir.path().join("absent.toml")).unwrap();
        assert!(config.paths.temp_root.is_none());
        assert!(config.editor.command.is_none());
    }

    #[test]
    fn test_invalid_config_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pr.toml");
        fs::write(&path, "invalid toml [[[").unwrap();

        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("pr.toml"));
    }

    #[test]
    fn test_partial_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pr.toml");
        fs::write(
            &path,
            r#"
[editor]
command = "hx"
"#,
        )
        .unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.editor.command.as_deref(), Some("hx"));
        assert!(config.tmux.binary.is_none());
    }

    #[test]
    fn test_context_defaults() {
        let _lock = ENV_LOCK.lock().unwrap();
        // SAFETY: We hold ENV_LOCK to serialize test access
        unsafe { std::env::remove_var(FAVOURITES_FILE_ENV) };

        let home = PathBuf::from("/home/me");
        let ctx = context_for(&PrConfig::default(), &home, PathBuf::from("/home/me/pr"));

        assert_eq!(ctx.projects_root, home);
        assert_eq!(ctx.cwd, PathBuf::from("/home/me/pr"));
        assert_eq!(ctx.favourites_path, PathBuf::from("/home/me/.config/pr.json"));
        assert_eq!(ctx.temp_root, PathBuf::from("/tmp"));
        assert_eq!(ctx.tmux_binary, "tmux");
        assert!(ctx.editor.is_none());
    }

    #[test]
    fn test_context_uses_configured_paths() {
        let _lock = ENV_LOCK.lock().unwrap();
        // SAFETY: We hold ENV_LOCK to serialize test access
        unsafe { std::env::remove_var(FAVOURITES_FILE_ENV) };

        let config: PrConfig = toml::from_str(
            r#"
[paths]
favourites = "/data/pr.json"
temp_root = "/var/tmp"
projects_root = "/home/me/src"

[tmux]
binary = "/opt/bin/tmux"
"#,
        )
        .unwrap();
        let ctx = context_for(&config, Path::new("/home/me"), PathBuf::from("/"));

        assert_eq!(ctx.favourites_path, PathBuf::from("/data/pr.json"));
        assert_eq!(ctx.temp_root, PathBuf::from("/var/tmp"));
        assert_eq!(ctx.projects_root, PathBuf::from("/home/me/src"));
        assert_eq!(ctx.tmux_binary, "/opt/bin/tmux");
    }

    #[test]
    fn test_favourites_env_override_wins() {
        let _lock = ENV_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        let custom = temp_dir.path().join("favs.json");

        // SAFETY: We hold ENV_LOCK to serialize test access
        unsafe { std::env::set_var(FAVOURITES_FILE_ENV, &custom) };

        let mut config = PrConfig::default();
        config.paths.favourites = Some(PathBuf::from("/ignored/pr.json"));
        let ctx = context_for(&config, Path::new("/home/me"), PathBuf::from("/"));
        assert_eq!(ctx.favourites_path, custom);

        // SAFETY: We hold ENV_LOCK to serialize test access
        unsafe { std::env::remove_var(FAVOURITES_FILE_ENV) };
    }

    #[test]
    fn test_empty_env_var_uses_default() {
        let _lock = ENV_LOCK.lock().unwrap();

        // SAFETY: We hold ENV_LOCK to serialize test access
        unsafe { std::env::set_var(FAVOURITES_FILE_ENV, "") };

        let ctx = context_for(&PrConfig::default(), Path::new("/home/me"), PathBuf::from("/"));
        assert_eq!(ctx.favourites_path, PathBuf::from("/home/me/.config/pr.json"));

        // SAFETY: We hold ENV_LOCK to serialize test access
        unsafe { std::env::remove_var(FAVOURITES_FILE_ENV) };
    }
}
