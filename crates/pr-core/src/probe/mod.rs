//! Filesystem probes for project directories.

pub mod errors;
pub mod operations;

pub use errors::ProbeError;
pub use operations::{
    MAX_TEMP_PROJECTS, allocate_temp_project, clean_path, create_project_dir, find_dir_with_prefix,
    is_dir, is_file, is_under,
};
