//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`ComposerError`] which covers every failure that can end a
//! git-commit-composer run. It uses `thiserror` for ergonomic error definitions and
//! includes constructors for the failures that carry context.
//!
//! # Public API
//! - [`ComposerError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, ComposerError>`
//!
//! # Error Categories
//! - **Repository discovery**: working directory, repository root, opening the repository
//! - **Author identity**: missing or unreadable `[user]` configuration
//! - **Committing**: nothing staged, status failures, rejected commits
//! - **Interactive form**: terminal failures and exhausted input
//!
//! A user cancelling the form is not an error; see [`crate::commands::Outcome`].

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-commit-composer
#[derive(Error, Debug)]
pub enum ComposerError {
    // Repository discovery errors
    #[error("failed to get current directory: {0}")]
    CurrentDirUnavailable(#[source] std::io::Error),

    #[error("git repository not found (searched upward from {})", start.display())]
    RepositoryNotFound { start: PathBuf },

    #[error("failed to open repository at {}: {source}", path.display())]
    RepositoryOpenFailed { path: PathBuf, source: git2::Error },

    // Author identity errors
    #[error("author configuration missing: {reason}")]
    AuthorConfigMissing { reason: String },

    // Commit errors
    #[error("no files are staged")]
    NoStagedChanges,

    #[error("failed to get status: {0}")]
    StatusFailed(#[source] git2::Error),

    #[error("failed to commit: {0}")]
    CommitFailed(#[source] git2::Error),

    #[error("summary is {len} characters long (at most {max} allowed)")]
    SummaryTooLong { len: usize, max: usize },

    // Interactive form errors
    #[error("terminal error: {0}")]
    Terminal(#[source] std::io::Error),

    #[error("input closed before the form was completed")]
    InputClosed,

    #[error("git error: {0}")]
    Git(#[from] git2::Error),
}

/// Convenience type alias for Results using ComposerError
pub type Result<T> = std::result::Result<T, ComposerError>;

impl ComposerError {
    /// Create an author configuration error with the given reason
    pub fn author_config_missing(reason: impl Into<String>) -> Self {
        Self::AuthorConfigMissing {
            reason: reason.into(),
        }
    }

    /// Create a repository open error for the given root
    pub fn repository_open_failed(path: impl Into<PathBuf>, source: git2::Error) -> Self {
        Self::RepositoryOpenFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a repository not found error for the directory the search started from
    pub fn repository_not_found(start: impl Into<PathBuf>) -> Self {
        Self::RepositoryNotFound {
            start: start.into(),
        }
    }

    /// Create an empty-commit rejection, reported as a commit failure
    pub fn empty_commit() -> Self {
        Self::CommitFailed(git2::Error::from_str(
            "cannot create an empty commit: staged tree matches HEAD",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ComposerError::NoStagedChanges;
        assert_eq!(err.to_string(), "no files are staged");
    }

    #[test]
    fn test_repository_not_found_mentions_start() {
        let err = ComposerError::repository_not_found("/tmp/somewhere");
        assert!(err.to_string().contains("git repository not found"));
        assert!(err.to_string().contains("/tmp/somewhere"));
    }

    #[test]
    fn test_author_config_missing_error() {
        let err = ComposerError::author_config_missing("user.email is not set");
        assert_eq!(
            err.to_string(),
            "author configuration missing: user.email is not set"
        );
    }

    #[test]
    fn test_repository_open_failed() {
        let source = git2::Error::from_str("corrupt HEAD");
        let err = ComposerError::repository_open_failed("/test/repo", source);
        assert!(err.to_string().contains("/test/repo"));
        assert!(err.to_string().contains("corrupt HEAD"));
    }

    #[test]
    fn test_empty_commit_is_a_commit_failure() {
        let err = ComposerError::empty_commit();
        assert!(matches!(err, ComposerError::CommitFailed(_)));
        assert!(err.to_string().starts_with("failed to commit:"));
        assert!(err.to_string().contains("empty commit"));
    }

    #[test]
    fn test_summary_too_long() {
        let err = ComposerError::SummaryTooLong { len: 120, max: 100 };
        assert_eq!(
            err.to_string(),
            "summary is 120 characters long (at most 100 allowed)"
        );
    }
}
