use crate::core::error::{ComposerError, Result};
use std::path::PathBuf;

/// File name of the user's global git configuration in the home directory
pub const GLOBAL_GITCONFIG_FILE: &str = ".gitconfig";

pub fn get_home_directory() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| ComposerError::author_config_missing("failed to get home directory"))
}

pub fn get_global_gitconfig_path() -> Result<PathBuf> {
    Ok(get_home_directory()?.join(GLOBAL_GITCONFIG_FILE))
}
