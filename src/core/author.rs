//! Committer identity resolution.
//!
//! The repository-local `user.name` / `user.email` pair wins when both values are
//! non-empty. Otherwise the whole identity comes from the global git configuration
//! file; partial local values are never merged with global ones.
//!
//! # Public API
//! - [`Author`]: A resolved, fully populated identity
//! - [`AuthorResolver`]: Local-then-global lookup against a [`GitRepo`]

use crate::core::{
    dirs::get_global_gitconfig_path,
    error::{ComposerError, Result},
    git::GitRepo,
};
use chrono::{DateTime, Local};
use git2::{Config, Signature};
use std::path::{Path, PathBuf};

/// Committer identity. Both fields are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    name: String,
    email: String,
}

impl Author {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let email = email.into();
        if name.trim().is_empty() {
            return Err(ComposerError::author_config_missing("user.name is empty"));
        }
        if email.trim().is_empty() {
            return Err(ComposerError::author_config_missing("user.email is empty"));
        }
        Ok(Self { name, email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Build a git signature stamped with `when`, keeping its UTC offset
    pub fn signature_at(&self, when: DateTime<Local>) -> Result<Signature<'static>> {
        let offset_minutes = when.offset().local_minus_utc() / 60;
        let time = git2::Time::new(when.timestamp(), offset_minutes);
        Ok(Signature::new(&self.name, &self.email, &time)?)
    }
}

/// Resolves the committer identity for a repository
#[derive(Debug, Clone, Default)]
pub struct AuthorResolver {
    global_config_path: Option<PathBuf>,
}

impl AuthorResolver {
    /// Resolver that falls back to `~/.gitconfig`
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver that falls back to the given global config file
    pub fn with_global_config(path: impl Into<PathBuf>) -> Self {
        Self {
            global_config_path: Some(path.into()),
        }
    }

    pub fn resolve(&self, repo: &GitRepo) -> Result<Author> {
        let local = repo.local_identity()?;
        if let (Some(name), Some(email)) = (local.name, local.email) {
            if !name.trim().is_empty() && !email.trim().is_empty() {
                log::debug!("Using repository-local author identity");
                return Author::new(name, email);
            }
        }

        log::debug!("Local author identity incomplete, falling back to global config");
        let path = match &self.global_config_path {
            Some(path) => path.clone(),
            None => get_global_gitconfig_path()?,
        };
        load_global_author(&path)
    }
}

/// Read the `[user]` section of a global git config file
pub fn load_global_author(path: &Path) -> Result<Author> {
    if !path.is_file() {
        return Err(ComposerError::author_config_missing(format!(
            "failed to load global config file {}: file not found",
            path.display()
        )));
    }

    let mut config = Config::open(path).map_err(|e| {
        ComposerError::author_config_missing(format!(
            "failed to load global config file {}: {}",
            path.display(),
            e.message()
        ))
    })?;
    let snapshot = config.snapshot().map_err(|e| {
        ComposerError::author_config_missing(format!(
            "failed to parse global config file {}: {}",
            path.display(),
            e.message()
        ))
    })?;

    let name = read_user_key(&snapshot, "name", path)?;
    let email = read_user_key(&snapshot, "email", path)?;
    log::debug!("Using global author identity from {}", path.display());
    Author::new(name, email)
}

fn read_user_key(config: &Config, key: &str, path: &Path) -> Result<String> {
    let full_key = format!("user.{key}");
    match config.get_string(&full_key) {
        Ok(value) if value.trim().is_empty() => Err(ComposerError::author_config_missing(
            format!("{full_key} is empty in {}", path.display()),
        )),
        Ok(value) => Ok(value),
        Err(e) if e.code() == git2::ErrorCode::NotFound => Err(
            ComposerError::author_config_missing(format!(
                "failed to get {full_key} key from [user] section of {}",
                path.display()
            )),
        ),
        Err(e) => Err(ComposerError::author_config_missing(format!(
            "failed to read {full_key} from {}: {}",
            path.display(),
            e.message()
        ))),
    }
}
