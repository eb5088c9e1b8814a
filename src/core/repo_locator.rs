//! Repository root discovery.
//!
//! Walks upward from a starting directory and returns the first ancestor (or the
//! directory itself) that contains a `.git` directory. Probing is read-only.

use crate::core::error::{ComposerError, Result};
use std::path::{Path, PathBuf};

/// Name of the version-control metadata directory
pub const GIT_DIR_NAME: &str = ".git";

/// Find the repository root starting from the process working directory
pub fn locate_repo_root_from_cwd() -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(ComposerError::CurrentDirUnavailable)?;
    locate_repo_root(&cwd)
}

/// Find the repository root starting from `start`
pub fn locate_repo_root(start: &Path) -> Result<PathBuf> {
    for dir in start.ancestors() {
        if dir.join(GIT_DIR_NAME).is_dir() {
            log::debug!("Repository root found at {}", dir.display());
            return Ok(dir.to_path_buf());
        }
    }

    Err(ComposerError::repository_not_found(start))
}
