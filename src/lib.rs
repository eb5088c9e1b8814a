//! Git Commit Composer - compose a prefixed commit message in a terminal form and commit it.
//!
//! The library is split into three layers:
//! - [`core`]: repository discovery, author resolution, the message model, and git operations
//! - [`composer`]: the interactive form (key model, state machine, rendering, terminal)
//! - [`commands`]: the pipeline tying the two together into a single [`Outcome`]
//!
//! # Public API
//! Most callers only need [`execute_compose`] for the interactive run, or
//! [`run_pipeline_with`] to drive the same pipeline with scripted keys.

pub mod commands;
pub mod composer;
pub mod core;

pub use commands::{execute_commit, execute_compose, run_pipeline, run_pipeline_with, Outcome};

pub use composer::{
    run_composer, ComposerOutcome, ComposerState, FocusSlot, Key, KeySource, RecordingScreen,
    Screen, ScriptedKeys,
};

pub use core::{
    // Author identity
    Author,
    AuthorResolver,
    // Commit message
    CommitMessage,
    // Error handling
    ComposerError,
    // Git operations
    GitRepo,
    Prefix,
    Result,
};
