use std::fs;
use std::os::unix::fs::DirBuilderExt;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};

use super::errors::ProbeError;

/// Upper bound of the `t0..tN` temp project namespace.
pub const MAX_TEMP_PROJECTS: usize = 1024;

const TEMP_DIR_MODE: u32 = 0o750;

/// Whether `path` is an existing directory (symlinks followed).
pub fn is_dir(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// Whether `path` is an existing regular file (symlinks followed).
pub fn is_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// Whether `path` lies strictly below `root`. Compares components, not strings.
pub fn is_under(root: &Path, path: &Path) -> bool {
    path != root && path.starts_with(root)
}

/// Resolve `.` and `..` components without touching the filesystem.
///
/// `..` at the root stays at the root, so `/..` cleans to `/`.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir) => {}
                _ => cleaned.push(".."),
            },
            other => cleaned.push(other.as_os_str()),
        }
    }
    if cleaned.as_os_str().is_empty() {
        cleaned.push(".");
    }
    cleaned
}

/// First directory in `root` whose name starts with `prefix`.
///
/// Entries are visited in file name order so the result does not depend on
/// the filesystem's internal ordering.
pub fn find_dir_with_prefix(root: &Path, prefix: &str) -> Result<Option<PathBuf>, ProbeError> {
    let entries = fs::read_dir(root).map_err(|e| ProbeError::ReadDirFailed {
        path: root.display().to_string(),
        source: e,
    })?;

    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.starts_with(prefix))
        .collect();
    names.sort();

    let found = names
        .into_iter()
        .map(|name| root.join(name))
        .find(|path| is_dir(path));

    debug!(
        event = "core.probe.prefix_search_completed",
        root = %root.display(),
        prefix = prefix,
        found = ?found
    );
    Ok(found)
}

/// Create a single project directory; the parent must already exist.
pub fn create_project_dir(path: &Path) -> Result<(), ProbeError> {
    fs::create_dir(path).map_err(|e| ProbeError::CreateFailed {
        path: path.display().to_string(),
        source: e,
    })?;
    info!(event = "core.probe.dir_created", path = %path.display());
    Ok(())
}

/// Create the first free `root/tN` directory and return its path.
pub fn allocate_temp_project(root: &Path) -> Result<PathBuf, ProbeError> {
    let mut builder = fs::DirBuilder::new();
    builder.mode(TEMP_DIR_MODE);

    for i in 0..MAX_TEMP_PROJECTS {
        let path = root.join(format!("t{}", i));
        match builder.create(&path) {
            Ok(()) => {
                info!(event = "core.probe.temp_project_created", path = %path.display());
                return Ok(path);
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => continue,
            Err(e) => {
                return Err(ProbeError::CreateFailed {
                    path: path.display().to_string(),
                    source: e,
                });
            }
        }
    }

    Err(ProbeError::TempNamespaceExhausted {
        root: root.display().to_string(),
        max: MAX_TEMP_PROJECTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_under() {
        let root = Path::new("/tmp");
        assert!(is_under(root, Path::new("/tmp/t0")));
        assert!(!is_under(root, Path::new("/tmp")));
        assert!(!is_under(root, Path::new("/tmpfoo/t0")));
    }

    #[test]
    fn test_clean_path() {
        assert_eq!(clean_path(Path::new("/home/u/..")), PathBuf::from("/home"));
        assert_eq!(clean_path(Path::new("/home/u/../v/./w")), PathBuf::from("/home/v/w"));
        assert_eq!(clean_path(Path::new("/home/u/.")), PathBuf::from("/home/u"));
        assert_eq!(clean_path(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(clean_path(Path::new("a/../..")), PathBuf::from(".."));
        assert_eq!(clean_path(Path::new("a/..")), PathBuf::from("."));
    }

    #[test]
    fn test_is_dir_and_is_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("f");
        fs::write(&file, "x").unwrap();

        assert!(is_dir(temp_dir.path()));
        assert!(!is_dir(&file));
        assert!(is_file(&file));
        assert!(!is_file(temp_dir.path()));
        assert!(!is_dir(&temp_dir.path().join("missing")));
    }

    #[test]
    fn test_allocate_temp_project_skips_existing() {
        let temp_dir = TempDir::new().unwrap();
        for i in 0..4 {
            fs::create_dir(temp_dir.path().join(format!("t{}", i))).unwrap();
        }

        let path = allocate_temp_project(temp_dir.path()).unwrap();
        assert_eq!(path, temp_dir.path().join("t4"));
        assert!(is_dir(&path));
    }

    #[test]
    fn test_allocate_temp_project_never_reuses() {
        let temp_dir = TempDir::new().unwrap();
        let first = allocate_temp_project(temp_dir.path()).unwrap();
        let second = allocate_temp_project(temp_dir.path()).unwrap();
        assert_eq!(first, temp_dir.path().join("t0"));
        assert_eq!(second, temp_dir.path().join("t1"));
    }

    #[test]
    fn test_allocate_temp_project_treats_files_as_taken() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("t0"), "not a dir").unwrap();

        let path = allocate_temp_project(temp_dir.path()).unwrap();
        assert_eq!(path, temp_dir.path().join("t1"));
    }

    #[test]
    fn test_allocate_temp_project_missing_root_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = allocate_temp_project(&temp_dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, ProbeError::CreateFailed { .. }));
    }

    #[test]
    fn test_find_dir_with_prefix_first_in_name_order() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("project-b")).unwrap();
        fs::create_dir(temp_dir.path().join("project-a")).unwrap();
        fs::write(temp_dir.path().join("proj-file"), "x").unwrap();

        let found = find_dir_with_prefix(temp_dir.path(), "proj").unwrap();
        assert_eq!(found, Some(temp_dir.path().join("project-a")));
    }

    #[test]
    fn test_find_dir_with_prefix_skips_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("notes"), "x").unwrap();

        assert_eq!(find_dir_with_prefix(temp_dir.path(), "no").unwrap(), None);
    }

    #[test]
    fn test_create_project_dir_requires_parent() {
        let temp_dir = TempDir::new().unwrap();
        let ok = temp_dir.path().join("new");
        create_project_dir(&ok).unwrap();
        assert!(is_dir(&ok));

        let nested = temp_dir.path().join("a").join("b");
        assert!(create_project_dir(&nested).is_err());
    }
}
