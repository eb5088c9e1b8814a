//! Crossterm-backed terminal for the commit form.
//!
//! [`TerminalSession`] switches the terminal to raw mode on the alternate screen and
//! restores it when dropped, on success and error paths alike. [`TerminalKeys`] reads
//! key presses while a session is active.

use crate::composer::{keys::Key, KeySource, Screen};
use crate::core::error::{ComposerError, Result};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event},
    execute, queue,
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io::{self, Stdout, Write};

pub struct TerminalSession {
    stdout: Stdout,
}

impl TerminalSession {
    pub fn start() -> Result<Self> {
        enable_raw_mode().map_err(ComposerError::Terminal)?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(ComposerError::Terminal(e));
        }
        log::debug!("Terminal switched to raw mode");
        Ok(Self { stdout })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.stdout, Show, LeaveAlternateScreen) {
            log::warn!("Failed to leave alternate screen: {e}");
        }
        if let Err(e) = disable_raw_mode() {
            log::warn!("Failed to disable raw mode: {e}");
        }
    }
}

/// Blocking key reader for an active [`TerminalSession`]
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> Result<Key> {
        loop {
            if let Event::Key(key_event) = event::read().map_err(ComposerError::Terminal)? {
                if let Some(key) = Key::from_event(key_event) {
                    return Ok(key);
                }
            }
        }
    }
}

impl Screen for TerminalSession {
    fn draw(&mut self, frame: &str) -> Result<()> {
        queue!(self.stdout, MoveTo(0, 0), Clear(ClearType::All))
            .map_err(ComposerError::Terminal)?;
        // Raw mode does not translate \n into a carriage return
        let frame = frame.replace('\n', "\r\n");
        self.stdout
            .write_all(frame.as_bytes())
            .map_err(ComposerError::Terminal)?;
        self.stdout.flush().map_err(ComposerError::Terminal)
    }
}
