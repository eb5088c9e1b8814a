//! Git repository management and setup utilities
//!
//! Repositories are created with `git2` directly so the tests do not depend
//! on a `git` binary being installed.

#![allow(dead_code)]

use anyhow::{Context, Result};
use git2::Repository;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A repository in a temporary directory. The TempDir must be kept alive for
/// the duration of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
    pub repo: Repository,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of commits reachable from HEAD, 0 for an unborn branch
    pub fn commit_count(&self) -> Result<usize> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => return Ok(0),
            Err(e) => return Err(e.into()),
        };
        let mut walk = self.repo.revwalk()?;
        walk.push(head.target().context("HEAD has no target")?)?;
        Ok(walk.count())
    }

    pub fn head_commit(&self) -> Result<git2::Commit<'_>> {
        Ok(self.repo.head()?.peel_to_commit()?)
    }
}

/// Sets up a fresh repository with no identity configured
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().to_path_buf();
    let repo = Repository::init(&path).context("failed to init test repository")?;

    Ok(TestRepo {
        temp_dir,
        path,
        repo,
    })
}

/// Sets up a repository whose local config carries `user.name` and `user.email`
pub fn setup_test_repo_with_identity(name: &str, email: &str) -> Result<TestRepo> {
    let repo = setup_test_repo()?;
    set_local_identity(&repo, Some(name), Some(email))?;
    Ok(repo)
}

/// Writes the given keys into the repository's local config
pub fn set_local_identity(repo: &TestRepo, name: Option<&str>, email: Option<&str>) -> Result<()> {
    let mut config = repo.repo.config()?.open_level(git2::ConfigLevel::Local)?;
    if let Some(name) = name {
        config.set_str("user.name", name)?;
    }
    if let Some(email) = email {
        config.set_str("user.email", email)?;
    }
    Ok(())
}

pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    let path = repo_path.join(filename);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Adds a file to the index
pub fn stage_file(repo: &TestRepo, filename: &str) -> Result<()> {
    let mut index = repo.repo.index()?;
    index.add_path(Path::new(filename))?;
    index.write()?;
    Ok(())
}

/// Creates and stages a file in one step
pub fn create_staged_file(repo: &TestRepo, filename: &str, content: &str) -> Result<()> {
    create_file(&repo.path, filename, content)?;
    stage_file(repo, filename)
}

/// Commits the current index directly through git2
pub fn git_commit(repo: &TestRepo, message: &str) -> Result<git2::Oid> {
    let signature = git2::Signature::now("Fixture", "fixture@example.com")?;
    let mut index = repo.repo.index()?;
    let tree = repo.repo.find_tree(index.write_tree()?)?;
    let parent = match repo.repo.head() {
        Ok(head) => Some(head.peel_to_commit()?),
        Err(_) => None,
    };
    let parents: Vec<&git2::Commit> = parent.iter().collect();
    Ok(repo
        .repo
        .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)?)
}

/// Writes a global gitconfig file next to the repository and returns its path
pub fn write_global_config(repo: &TestRepo, contents: &str) -> Result<PathBuf> {
    let dir = repo.temp_dir.path().join("home");
    fs::create_dir_all(&dir)?;
    let path = dir.join(".gitconfig");
    fs::write(&path, contents)?;
    Ok(path)
}
