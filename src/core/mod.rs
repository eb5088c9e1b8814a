//! Core functionality for git-commit-composer.
//!
//! This module provides repository discovery, author resolution, the commit message
//! model, git operations, error handling, and output formatting.

pub mod author;
pub mod dirs;
pub mod error;
pub mod git;
pub mod git_status;
pub mod message;
pub mod output;
pub mod repo_locator;

// === Error handling ===
pub use error::{ComposerError, Result};

// === Git operations ===
// Repository handle for identity lookup, staged changes, and committing
pub use git::{GitRepo, LocalIdentity};

// === Git status types ===
pub use git_status::{StageState, StagedChange};

// === Repository discovery ===
pub use repo_locator::{locate_repo_root, locate_repo_root_from_cwd};

// === Author identity ===
pub use author::{Author, AuthorResolver};

// === Commit message ===
pub use message::{CommitMessage, Prefix, SUMMARY_MAX_CHARS};

// === Output formatting ===
pub use output::{print_commit_created, print_error, print_quit_selected};
