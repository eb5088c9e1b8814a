use crate::composer::{
    run_composer, ComposerOutcome, KeySource, Screen, TerminalKeys, TerminalSession,
};
use crate::core::{
    author::{Author, AuthorResolver},
    error::{ComposerError, Result},
    git::GitRepo,
    message::CommitMessage,
    repo_locator::{locate_repo_root, locate_repo_root_from_cwd},
};
use chrono::Local;
use std::path::Path;

/// Result of one run of the composer
#[derive(Debug)]
pub enum Outcome {
    /// A commit was created; holds its id
    Committed(String),
    /// The user quit the form
    Cancelled,
    Failed(ComposerError),
}

impl Outcome {
    /// 0 for a commit or a cancellation, 1 for any failure
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Committed(_) | Outcome::Cancelled => 0,
            Outcome::Failed(_) => 1,
        }
    }
}

/// Check that something is staged, then commit the index with `message`.
/// Returns the new commit id.
pub fn execute_commit(repo: &GitRepo, author: &Author, message: &CommitMessage) -> Result<String> {
    let staged = repo.staged_changes()?;
    if staged.is_empty() {
        return Err(ComposerError::NoStagedChanges);
    }
    for change in &staged {
        log::debug!("Staged: {} {}", change.state, change.path.display());
    }

    let signature = author.signature_at(Local::now())?;
    repo.create_commit(&signature, &message.body())
}

/// Locate the repository from `start_dir`, resolve the author, run the form through
/// `compose`, and commit when the form is submitted
pub fn run_pipeline<F>(start_dir: &Path, resolver: &AuthorResolver, compose: F) -> Outcome
where
    F: FnOnce() -> Result<ComposerOutcome>,
{
    into_outcome(
        locate_repo_root(start_dir).and_then(|root| commit_in_repo(&root, resolver, compose)),
    )
}

/// [`run_pipeline`] with scripted input and a caller-provided screen
pub fn run_pipeline_with(
    start_dir: &Path,
    resolver: &AuthorResolver,
    keys: &mut dyn KeySource,
    screen: &mut dyn Screen,
) -> Outcome {
    run_pipeline(start_dir, resolver, || run_composer(keys, screen))
}

/// Full interactive run from the working directory on the real terminal
pub fn execute_compose() -> Outcome {
    let resolver = AuthorResolver::new();
    into_outcome(locate_repo_root_from_cwd().and_then(|root| {
        commit_in_repo(&root, &resolver, || {
            // Dropped before anything is printed, restoring the terminal
            let mut session = TerminalSession::start()?;
            run_composer(&mut TerminalKeys, &mut session)
        })
    }))
}

fn commit_in_repo<F>(root: &Path, resolver: &AuthorResolver, compose: F) -> Result<Option<String>>
where
    F: FnOnce() -> Result<ComposerOutcome>,
{
    let repo = GitRepo::open(root)?;
    let author = resolver.resolve(&repo)?;
    log::debug!("Committing as {} <{}>", author.name(), author.email());

    match compose()? {
        ComposerOutcome::Submitted(message) => {
            execute_commit(&repo, &author, &message).map(Some)
        }
        ComposerOutcome::Cancelled => Ok(None),
    }
}

fn into_outcome(result: Result<Option<String>>) -> Outcome {
    match result {
        Ok(Some(id)) => Outcome::Committed(id),
        Ok(None) => Outcome::Cancelled,
        Err(e) => Outcome::Failed(e),
    }
}
