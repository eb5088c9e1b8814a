use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;
use common::{assertions, repository::*};

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn test_version_flag_prints_banner() -> anyhow::Result<()> {
        let mut cmd = Command::cargo_bin("git-commit-composer")?;

        cmd.arg("--version")
            .assert()
            .success()
            .stdout(assertions::version_line())
            .stderr(predicate::str::is_empty());

        Ok(())
    }

    #[test]
    fn test_short_version_flag_skips_form() -> anyhow::Result<()> {
        // Outside any repository, so the pipeline would fail if it ran
        let dir = tempfile::TempDir::new()?;
        let mut cmd = Command::cargo_bin("git-commit-composer")?;

        cmd.arg("-v")
            .current_dir(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::starts_with(format!(
                "v{} (rev: ",
                env!("CARGO_PKG_VERSION")
            )));

        Ok(())
    }

    #[test]
    fn test_outside_repository_fails() -> anyhow::Result<()> {
        let dir = tempfile::TempDir::new()?;
        let mut cmd = Command::cargo_bin("git-commit-composer")?;

        cmd.current_dir(dir.path())
            .env_remove("RUST_LOG")
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(assertions::error_line())
            .stderr(assertions::repository_not_found());

        Ok(())
    }

    #[test]
    fn test_missing_author_fails_before_form() -> anyhow::Result<()> {
        let repo = setup_test_repo()?;
        create_staged_file(&repo, "x.txt", "x\n")?;
        // Empty home directory, so there is no global config either
        let home = tempfile::TempDir::new()?;
        let mut cmd = Command::cargo_bin("git-commit-composer")?;

        cmd.current_dir(repo.path())
            .env("HOME", home.path())
            .env_remove("RUST_LOG")
            .assert()
            .code(1)
            .stderr(assertions::error_line())
            .stderr(assertions::author_config_missing());

        assert_eq!(repo.commit_count()?, 0);
        Ok(())
    }
}
