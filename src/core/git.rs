//! Git repository operations used by the commit pipeline.
//!
//! This module provides a high-level interface to git operations through the [`GitRepo`] struct.
//! It wraps the `git2` library with exactly what git-commit-composer needs: reading the
//! repository-local identity, listing staged changes, and writing a commit from the index.
//!
//! # Public API
//! - [`GitRepo`]: Repository handle opened from a located root
//! - [`LocalIdentity`]: Raw `user.name` / `user.email` values from the local config level

use crate::core::{
    error::{ComposerError, Result},
    git_status::{StageState, StagedChange},
};
use git2::{ConfigLevel, Repository, Signature, StatusOptions};
use std::path::{Path, PathBuf};

/// Identity values as found in the repository-local configuration.
/// Either field may be missing or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalIdentity {
    pub name: Option<String>,
    pub email: Option<String>,
}

pub struct GitRepo {
    repo: Repository,
    root: PathBuf,
}

impl GitRepo {
    /// Open the repository whose working tree root is `root`
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        let repo = Repository::open(root)
            .map_err(|e| ComposerError::repository_open_failed(root, e))?;
        Ok(GitRepo {
            repo,
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn get_repository(&self) -> &Repository {
        &self.repo
    }

    /// Read `user.name` and `user.email` from the repository-local config level only
    pub fn local_identity(&self) -> Result<LocalIdentity> {
        let config = self.repo.config()?;
        let mut local = match config.open_level(ConfigLevel::Local) {
            Ok(local) => local,
            Err(e) if e.code() == git2::ErrorCode::NotFound => {
                log::debug!("Repository has no local config level: {e}");
                return Ok(LocalIdentity::default());
            }
            Err(e) => return Err(e.into()),
        };
        // Typed getters only work on a snapshot
        let local = local.snapshot()?;

        Ok(LocalIdentity {
            name: read_optional(&local, "user.name"),
            email: read_optional(&local, "user.email"),
        })
    }

    /// List every path whose staging state is not unmodified, untracked files included
    pub fn staged_changes(&self) -> Result<Vec<StagedChange>> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(false);

        let statuses = self
            .repo
            .statuses(Some(&mut opts))
            .map_err(ComposerError::StatusFailed)?;

        let mut changes: Vec<StagedChange> = statuses
            .iter()
            .filter_map(|entry| {
                let state = StageState::from_git2(entry.status())?;
                let path = PathBuf::from(String::from_utf8_lossy(entry.path_bytes()).into_owned());
                Some(StagedChange { path, state })
            })
            .collect();

        changes.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(changes)
    }

    /// Write the index as a tree and commit it on top of `HEAD`.
    /// Returns the new commit id as a hex string. A tree identical to the parent's, or
    /// an empty tree on an unborn branch, is refused as an empty commit.
    pub fn create_commit(&self, signature: &Signature<'_>, body: &str) -> Result<String> {
        let mut index = self.repo.index().map_err(ComposerError::CommitFailed)?;
        let tree_id = index.write_tree().map_err(ComposerError::CommitFailed)?;
        let tree = self
            .repo
            .find_tree(tree_id)
            .map_err(ComposerError::CommitFailed)?;

        let parent = self.head_commit()?;
        let unchanged = match &parent {
            Some(parent) => parent.tree_id() == tree_id,
            None => tree.is_empty(),
        };
        if unchanged {
            return Err(ComposerError::empty_commit());
        }
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        let oid = self
            .repo
            .commit(Some("HEAD"), signature, signature, body, &tree, &parents)
            .map_err(ComposerError::CommitFailed)?;

        log::debug!("Created commit {oid}");
        Ok(oid.to_string())
    }

    /// The commit `HEAD` points at, or `None` on an unborn branch
    fn head_commit(&self) -> Result<Option<git2::Commit<'_>>> {
        match self.repo.head() {
            Ok(head) => {
                let commit = head.peel_to_commit().map_err(ComposerError::CommitFailed)?;
                Ok(Some(commit))
            }
            Err(e)
                if e.code() == git2::ErrorCode::UnbornBranch
                    || e.code() == git2::ErrorCode::NotFound =>
            {
                Ok(None)
            }
            Err(e) => Err(ComposerError::CommitFailed(e)),
        }
    }
}

/// A missing key is `None`; any other read failure is logged and treated as missing
fn read_optional(config: &git2::Config, key: &str) -> Option<String> {
    match config.get_string(key) {
        Ok(value) => Some(value),
        Err(e) if e.code() == git2::ErrorCode::NotFound => None,
        Err(e) => {
            log::warn!("Failed to read {key} from local config: {}", e.message());
            None
        }
    }
}
