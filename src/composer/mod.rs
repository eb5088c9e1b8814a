//! Interactive commit form.
//!
//! The form is split into a pure state machine ([`state`]), a pure renderer ([`view`]),
//! and a driving loop ([`run_composer`]) that reads keys from a [`KeySource`] and draws
//! frames to a [`Screen`]. The real terminal implementations live in [`terminal`].

pub mod keys;
pub mod state;
pub mod terminal;
pub mod text_area;
pub mod text_field;
pub mod view;

pub use keys::Key;
pub use state::{transition, ComposerState, FocusSlot, FormExit, Mode};
pub use terminal::{TerminalKeys, TerminalSession};
pub use view::{render, render_plain};

use crate::core::error::{ComposerError, Result};
use crate::core::message::CommitMessage;
use std::collections::VecDeque;

/// Blocking source of form keys
pub trait KeySource {
    fn next_key(&mut self) -> Result<Key>;
}

/// Destination for rendered frames
pub trait Screen {
    fn draw(&mut self, frame: &str) -> Result<()>;
}

/// What the form produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerOutcome {
    Submitted(CommitMessage),
    Cancelled,
}

/// Run the form until it is submitted or cancelled, redrawing after every key
pub fn run_composer(keys: &mut dyn KeySource, screen: &mut dyn Screen) -> Result<ComposerOutcome> {
    let mut state = ComposerState::new();
    loop {
        screen.draw(&render(&state))?;
        let key = keys.next_key()?;
        match state.apply(key) {
            Some(FormExit::Commit) => {
                let message = state.message()?;
                log::debug!("Form submitted with prefix '{}'", message.prefix());
                return Ok(ComposerOutcome::Submitted(message));
            }
            Some(FormExit::Cancel) => {
                log::debug!("Form cancelled");
                return Ok(ComposerOutcome::Cancelled);
            }
            None => {}
        }
    }
}

/// A fixed key sequence; fails with [`ComposerError::InputClosed`] once exhausted
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Append each character of `text` as a key press
    pub fn type_text(mut self, text: &str) -> Self {
        self.keys.extend(text.chars().map(Key::Char));
        self
    }

    pub fn then(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.keys.extend(keys);
        self
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> Result<Key> {
        self.keys.pop_front().ok_or(ComposerError::InputClosed)
    }
}

/// Screen that keeps every frame it was asked to draw
#[derive(Debug, Clone, Default)]
pub struct RecordingScreen {
    pub frames: Vec<String>,
}

impl Screen for RecordingScreen {
    fn draw(&mut self, frame: &str) -> Result<()> {
        self.frames.push(frame.to_string());
        Ok(())
    }
}
