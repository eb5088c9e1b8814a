//! Type-safe classification of staged index entries.
//!
//! This module defines [`StageState`], the staging side of a git status entry.
//! A path counts as staged when its staging state is anything but unmodified, which
//! includes untracked files. Worktree-only edits to tracked files never produce a
//! [`StageState`].
//!
//! # Public API
//! - [`StageState`]: How a path differs between `HEAD` and the index
//! - [`StagedChange`]: A staged path paired with its [`StageState`]

use std::fmt;
use std::path::PathBuf;

/// Index-side status of a path relative to `HEAD`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageState {
    /// New file in index (A)
    Added,
    /// Modified file in index (M)
    Modified,
    /// Deleted from index (D)
    Deleted,
    /// Renamed in index (R)
    Renamed,
    /// Type changed in index (T)
    TypeChanged,
    /// Not tracked at all (?)
    Untracked,
}

impl StageState {
    /// Convert git2 status flags to a stage state.
    /// Returns `None` when nothing about the path is staged.
    pub fn from_git2(flags: git2::Status) -> Option<StageState> {
        if flags.contains(git2::Status::INDEX_NEW) {
            return Some(StageState::Added);
        }
        if flags.contains(git2::Status::INDEX_MODIFIED) {
            return Some(StageState::Modified);
        }
        if flags.contains(git2::Status::INDEX_DELETED) {
            return Some(StageState::Deleted);
        }
        if flags.contains(git2::Status::INDEX_RENAMED) {
            return Some(StageState::Renamed);
        }
        if flags.contains(git2::Status::INDEX_TYPECHANGE) {
            return Some(StageState::TypeChanged);
        }
        if flags.contains(git2::Status::WT_NEW) {
            return Some(StageState::Untracked);
        }

        None
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StageState::Added => "A",
            StageState::Modified => "M",
            StageState::Deleted => "D",
            StageState::Renamed => "R",
            StageState::TypeChanged => "T",
            StageState::Untracked => "?",
        }
    }
}

impl fmt::Display for StageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A path with a staged or untracked change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedChange {
    pub path: PathBuf,
    pub state: StageState,
}
