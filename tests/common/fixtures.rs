//! Predefined repository scenarios and key scripts

#![allow(dead_code)]

use super::repository::*;
use anyhow::Result;
use git_commit_composer::{Key, ScriptedKeys};

/// Repository with one staged file and a local identity
pub fn repo_with_staged_file() -> Result<TestRepo> {
    let repo = setup_test_repo_with_identity("Test User", "test@example.com")?;
    create_staged_file(&repo, "x.txt", "x\n")?;
    Ok(repo)
}

/// Repository with a commit, then a modified and staged file
pub fn repo_with_history() -> Result<TestRepo> {
    let repo = setup_test_repo_with_identity("Test User", "test@example.com")?;
    create_staged_file(&repo, "initial.txt", "initial content\n")?;
    git_commit(&repo, "Initial commit")?;
    create_staged_file(&repo, "initial.txt", "changed content\n")?;
    Ok(repo)
}

/// Focus the summary, type it, then move to the Commit button and press it
pub fn commit_keys(summary: &str) -> ScriptedKeys {
    ScriptedKeys::new([Key::Tab, Key::Enter])
        .type_text(summary)
        .then([Key::Esc, Key::Tab, Key::Tab, Key::Enter])
}

/// Pick the prefix at `index` in the dropdown, fill both fields, and commit
pub fn commit_keys_with(prefix_index: usize, summary: &str, description: &str) -> ScriptedKeys {
    let mut keys = ScriptedKeys::new([Key::Enter]);
    for _ in 0..prefix_index {
        keys = keys.then([Key::Down]);
    }
    keys.then([Key::Enter, Key::Tab, Key::Enter])
        .type_text(summary)
        .then([Key::Tab, Key::Enter])
        .type_text(description)
        .then([Key::Esc, Key::Tab, Key::Enter])
}

/// Move focus backward onto the Quit button and press it
pub fn quit_keys() -> ScriptedKeys {
    ScriptedKeys::new([Key::BackTab, Key::Enter])
}
