//! In-memory favourites history, most recently used first.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::errors::FavouritesError;
use super::persistence::{load_favourites, save_favourites};
use super::types::FavouriteSession;
use crate::config::PrContext;
use crate::probe;

/// Recency-ordered list of remembered sessions backed by a JSON document.
///
/// Loaded once, mutated only through [`FavouritesStore::touch`], and written
/// back by [`FavouritesStore::save`] only when something changed.
#[derive(Debug)]
pub struct FavouritesStore {
    path: PathBuf,
    temp_root: PathBuf,
    sessions: Vec<FavouriteSession>,
    dirty: bool,
}

impl FavouritesStore {
    /// Load the store described by `ctx`.
    pub fn open(ctx: &PrContext) -> Result<Self, FavouritesError> {
        Self::load(&ctx.favourites_path, &ctx.temp_root)
    }

    /// Load the document at `path`. Paths under `temp_root` are never remembered.
    pub fn load(path: &Path, temp_root: &Path) -> Result<Self, FavouritesError> {
        let sessions = load_favourites(path)?;
        Ok(Self::with_sessions(path, temp_root, sessions))
    }

    /// A clean (not dirty) store holding `sessions`.
    pub fn with_sessions(path: &Path, temp_root: &Path, sessions: Vec<FavouriteSession>) -> Self {
        Self {
            path: path.to_path_buf(),
            temp_root: temp_root.to_path_buf(),
            sessions,
            dirty: false,
        }
    }

    pub fn sessions(&self) -> &[FavouriteSession] {
        &self.sessions
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// First record whose name or alias equals `token`.
    pub fn find_exact(&self, token: &str) -> Option<&FavouriteSession> {
        self.sessions.iter().find(|fav| fav.answers_to(token))
    }

    /// First record whose name starts with `token`. Aliases are not prefix-matched.
    pub fn find_prefix(&self, token: &str) -> Option<&FavouriteSession> {
        self.sessions.iter().find(|fav| fav.name.starts_with(token))
    }

    /// Move `name` to the front of the history, inserting it if unknown.
    ///
    /// Existing records keep their path, command, aliases and environment.
    /// Returns whether the order changed.
    pub fn touch(&mut self, name: &str, path: &Path) -> bool {
        if probe::is_under(&self.temp_root, path) {
            debug!(
                event = "core.favourites.touch_skipped_ephemeral",
                name = name,
                path = %path.display()
            );
            return false;
        }

        let record = match self.sessions.iter().position(|fav| fav.name == name) {
            Some(0) => return false,
            Some(index) => self.sessions.remove(index),
            None => FavouriteSession::new(name, path),
        };

        info!(
            event = "core.favourites.touched",
            name = name,
            path = %record.path.display()
        );

        self.sessions.insert(0, record);
        self.dirty = true;
        true
    }

    /// Write the document if it was modified since load or the last save.
    pub fn save(&mut self) -> Result<(), FavouritesError> {
        if !self.dirty {
            debug!(event = "core.favourites.save_skipped_clean");
            return Ok(());
        }
        save_favourites(&self.path, &self.sessions)?;
        self.dirty = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn names(store: &FavouritesStore) -> Vec<&str> {
        store.sessions().iter().map(|f| f.name.as_str()).collect()
    }

    fn store_with(names: &[&str]) -> FavouritesStore {
        let sessions = names
            .iter()
            .map(|n| FavouriteSession::new(*n, format!("/home/u/{}", n)))
            .collect();
        FavouritesStore::with_sessions(Path::new("/unused/pr.json"), Path::new("/tmp"), sessions)
    }

    #[test]
    fn test_touch_first_record_is_idempotent() {
        let mut store = store_with(&["a", "b"]);

        assert!(!store.touch("a", Path::new("/home/u/a")));
        assert!(!store.touch("a", Path::new("/home/u/a")));
        assert_eq!(names(&store), vec!["a", "b"]);
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_touch_twice_leaves_state_unchanged_after_second_call() {
        let mut store = store_with(&["a", "b"]);

        assert!(store.touch("b", Path::new("/home/u/b")));
        let order_after_first: Vec<String> = names(&store).iter().map(|s| s.to_string()).collect();
        assert!(!store.touch("b", Path::new("/home/u/b")));

        assert_eq!(names(&store), order_after_first);
        assert!(store.is_dirty());
    }

    #[test]
    fn test_touch_new_name_prepends_blank_record() {
        let mut store = store_with(&["a", "b", "c"]);

        assert!(store.touch("new", Path::new("/home/u/new")));

        assert_eq!(names(&store), vec!["new", "a", "b", "c"]);
        let first = &store.sessions()[0];
        assert_eq!(first.path, PathBuf::from("/home/u/new"));
        assert!(first.aliases.is_empty());
        assert!(first.env.is_empty());
        assert!(first.cmd.is_none());
        assert!(store.is_dirty());
    }

    #[test]
    fn test_touch_existing_moves_record_and_keeps_fields() {
        let mut sessions = vec![
            FavouriteSession::new("a", "/home/u/a"),
            FavouriteSession::new("b", "/home/u/b"),
            FavouriteSession::new("c", "/home/u/c"),
        ];
        sessions[2].aliases.push("cc".to_string());
        sessions[2].cmd = Some("make watch".to_string());
        sessions[2]
            .env
            .insert("MODE".to_string(), "dev".to_string());
        let mut store =
            FavouritesStore::with_sessions(Path::new("/unused"), Path::new("/tmp"), sessions);

        // The stored path wins over the touched one
        assert!(store.touch("c", Path::new("/elsewhere/c")));

        assert_eq!(names(&store), vec!["c", "a", "b"]);
        let first = &store.sessions()[0];
        assert_eq!(first.path, PathBuf::from("/home/u/c"));
        assert_eq!(first.aliases, vec!["cc"]);
        assert_eq!(first.cmd.as_deref(), Some("make watch"));
        assert_eq!(first.env.get("MODE").map(String::as_str), Some("dev"));
    }

    #[test]
    fn test_touch_ephemeral_path_is_ignored() {
        let mut store = store_with(&["a"]);

        assert!(!store.touch("t0", Path::new("/tmp/t0")));
        assert_eq!(names(&store), vec!["a"]);
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_find_exact_matches_name_then_alias_in_store_order() {
        let mut sessions = vec![
            FavouriteSession::new("alpha", "/a"),
            FavouriteSession::new("project", "/p"),
        ];
        sessions[0].aliases.push("x".to_string());
        sessions[1].aliases.push("p".to_string());
        sessions[1].aliases.push("x".to_string());
        let store = FavouritesStore::with_sessions(Path::new("/unused"), Path::new("/tmp"), sessions);

        assert_eq!(store.find_exact("project").unwrap().name, "project");
        assert_eq!(store.find_exact("p").unwrap().name, "project");
        assert_eq!(store.find_exact("x").unwrap().name, "alpha");
        assert!(store.find_exact("proj").is_none());
    }

    #[test]
    fn test_find_prefix_ignores_aliases() {
        let mut sessions = vec![FavouriteSession::new("project", "/p")];
        sessions[0].aliases.push("website".to_string());
        let store = FavouritesStore::with_sessions(Path::new("/unused"), Path::new("/tmp"), sessions);

        assert_eq!(store.find_prefix("pro").unwrap().name, "project");
        assert!(store.find_prefix("web").is_none());
    }

    #[test]
    fn test_save_without_changes_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pr.json");
        let mut store = FavouritesStore::load(&path, Path::new("/tmp")).unwrap();

        store.save().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_save_after_touch_writes_and_clears_dirty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pr.json");
        let mut store = FavouritesStore::load(&path, Path::new("/tmp")).unwrap();

        store.touch("pr", Path::new("/home/u/pr"));
        store.save().unwrap();
        assert!(path.exists());
        assert!(!store.is_dirty());

        let reloaded = FavouritesStore::load(&path, Path::new("/tmp")).unwrap();
        assert_eq!(names(&reloaded), vec!["pr"]);

        // Second save is a no-op: removing the file proves nothing is rewritten
        std::fs::remove_file(&path).unwrap();
        store.save().unwrap();
        assert!(!path.exists());
    }
}
