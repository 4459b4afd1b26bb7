use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::backend::LiveSession;
use crate::favourites::FavouriteSession;

/// Which resolution rule produced a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource {
    CurrentDir,
    AbsolutePath,
    PreviousSession,
    LiveExact,
    LivePrefix,
    FavouriteExact,
    FavouritePrefix,
    ProjectDirExact,
    ProjectDirPrefix,
}

impl MatchSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchSource::CurrentDir => "current_dir",
            MatchSource::AbsolutePath => "absolute_path",
            MatchSource::PreviousSession => "previous_session",
            MatchSource::LiveExact => "live_exact",
            MatchSource::LivePrefix => "live_prefix",
            MatchSource::FavouriteExact => "favourite_exact",
            MatchSource::FavouritePrefix => "favourite_prefix",
            MatchSource::ProjectDirExact => "project_dir_exact",
            MatchSource::ProjectDirPrefix => "project_dir_prefix",
        }
    }
}

/// Where a token leads: session name, directory and creation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub name: String,
    pub dir: PathBuf,
    pub cmd: Option<String>,
    pub env: BTreeMap<String, String>,
    pub source: MatchSource,
}

impl ResolvedTarget {
    /// Target named after the last component of `dir`.
    pub fn for_dir(dir: &Path, source: MatchSource) -> Self {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| dir.display().to_string());
        Self {
            name,
            dir: dir.to_path_buf(),
            cmd: None,
            env: BTreeMap::new(),
            source,
        }
    }

    pub fn for_live(session: &LiveSession, source: MatchSource) -> Self {
        Self {
            name: session.name.clone(),
            dir: session.path.clone(),
            cmd: None,
            env: BTreeMap::new(),
            source,
        }
    }

    pub fn for_favourite(favourite: &FavouriteSession, source: MatchSource) -> Self {
        Self {
            name: favourite.name.clone(),
            dir: favourite.path.clone(),
            cmd: favourite.cmd.clone(),
            env: favourite.env.clone(),
            source,
        }
    }
}

/// Outcome of bringing a target to life.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materialized {
    /// Backend session name, possibly suffixed
    pub name: String,
    /// Whether a new backend session was created
    pub created: bool,
}
