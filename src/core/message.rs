//! Commit message model.
//!
//! A [`CommitMessage`] is a conventional-commit [`Prefix`], a single-line summary of at
//! most [`SUMMARY_MAX_CHARS`] characters, and a free-form description. Its body is
//! always `"<prefix>: <summary>\n\n<description>"`.

use crate::core::error::{ComposerError, Result};
use std::fmt;

/// Upper bound on the summary length, in characters
pub const SUMMARY_MAX_CHARS: usize = 100;

/// Conventional commit type, in dropdown order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Prefix {
    #[default]
    Feat,
    Fix,
    Refactor,
    Test,
    Style,
    Chore,
    Docs,
}

impl Prefix {
    /// Every prefix in declared order. Index 0 is the default.
    pub const ALL: [Prefix; 7] = [
        Prefix::Feat,
        Prefix::Fix,
        Prefix::Refactor,
        Prefix::Test,
        Prefix::Style,
        Prefix::Chore,
        Prefix::Docs,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn as_str(&self) -> &'static str {
        match self {
            Prefix::Feat => "feat",
            Prefix::Fix => "fix",
            Prefix::Refactor => "refactor",
            Prefix::Test => "test",
            Prefix::Style => "style",
            Prefix::Chore => "chore",
            Prefix::Docs => "docs",
        }
    }

    /// Position in [`Prefix::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Prefix> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A completed commit message, handed from the form to the commit step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    prefix: Prefix,
    summary: String,
    description: String,
}

impl CommitMessage {
    pub fn new(
        prefix: Prefix,
        summary: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self> {
        let mut summary = summary.into();
        // The summary field never produces line breaks; keep the first line only
        if let Some(end) = summary.find(['\n', '\r']) {
            summary.truncate(end);
        }
        let len = summary.chars().count();
        if len > SUMMARY_MAX_CHARS {
            return Err(ComposerError::SummaryTooLong {
                len,
                max: SUMMARY_MAX_CHARS,
            });
        }

        Ok(Self {
            prefix,
            summary,
            description: description.into(),
        })
    }

    pub fn prefix(&self) -> Prefix {
        self.prefix
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The full commit message body
    pub fn body(&self) -> String {
        format!("{}: {}\n\n{}", self.prefix, self.summary, self.description)
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body())
    }
}
