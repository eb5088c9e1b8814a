//! Commit form state and its transition function.
//!
//! The form has five focus slots arranged in a cycle. At most one sub-mode is active at
//! a time, and only on its own slot: the prefix dropdown, summary editing, or
//! description editing. [`Mode`] encodes the focus slot together with that sub-mode, so
//! a state with two active modes, or a mode on the wrong slot, cannot be built.
//!
//! Keys are handled in this order:
//! 1. [`Key::Interrupt`] cancels from anywhere, including while editing.
//! 2. `q` cancels unless a text field is being edited. This fires while the dropdown
//!    is open or a button has focus; it is the quickest way out of an open dropdown.
//! 3. Tab / Shift+Tab close whatever is open on the current slot without committing
//!    a pending dropdown highlight, then move focus one slot forward / backward.
//! 4. Otherwise the key goes to the focused slot.

use crate::composer::{keys::Key, text_area::TextArea, text_field::TextField};
use crate::core::error::Result;
use crate::core::message::{CommitMessage, Prefix, SUMMARY_MAX_CHARS};

/// Display width of the summary field
pub const SUMMARY_WIDTH: usize = 50;
/// Display width of the description area
pub const DESCRIPTION_WIDTH: usize = 50;
/// Visible rows of the description area
pub const DESCRIPTION_HEIGHT: usize = 3;

/// One of the five regions keyboard input can be routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusSlot {
    Prefix,
    Summary,
    Description,
    CommitButton,
    QuitButton,
}

impl FocusSlot {
    /// Slots in focus order
    pub const ALL: [FocusSlot; 5] = [
        FocusSlot::Prefix,
        FocusSlot::Summary,
        FocusSlot::Description,
        FocusSlot::CommitButton,
        FocusSlot::QuitButton,
    ];

    pub fn position(&self) -> usize {
        *self as usize
    }

    pub fn next(&self) -> FocusSlot {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> FocusSlot {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Focus slot plus the sub-mode active on it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Focus rests on a slot with nothing open
    Browsing(FocusSlot),
    /// Prefix dropdown is open with `highlighted` under the cursor
    PrefixDropdownOpen { highlighted: Prefix },
    EditingSummary,
    EditingDescription,
}

impl Mode {
    pub fn focus(&self) -> FocusSlot {
        match self {
            Mode::Browsing(slot) => *slot,
            Mode::PrefixDropdownOpen { .. } => FocusSlot::Prefix,
            Mode::EditingSummary => FocusSlot::Summary,
            Mode::EditingDescription => FocusSlot::Description,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Mode::EditingSummary | Mode::EditingDescription)
    }
}

/// How the form ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormExit {
    /// The commit button was pressed
    Commit,
    /// Quit, `q`, or an interrupt
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerState {
    mode: Mode,
    prefix: Prefix,
    summary: TextField,
    description: TextArea,
}

impl Default for ComposerState {
    fn default() -> Self {
        Self::new()
    }
}

impl ComposerState {
    /// Fresh form: prefix focused, first prefix confirmed, nothing open
    pub fn new() -> Self {
        Self {
            mode: Mode::Browsing(FocusSlot::Prefix),
            prefix: Prefix::default(),
            summary: TextField::new(SUMMARY_MAX_CHARS, SUMMARY_WIDTH),
            description: TextArea::new(DESCRIPTION_WIDTH, DESCRIPTION_HEIGHT),
        }
    }

    /// Fresh form with focus resting on `slot`
    pub fn focused_on(slot: FocusSlot) -> Self {
        Self {
            mode: Mode::Browsing(slot),
            ..Self::new()
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn focus(&self) -> FocusSlot {
        self.mode.focus()
    }

    /// The confirmed prefix
    pub fn prefix(&self) -> Prefix {
        self.prefix
    }

    /// Highlighted dropdown index while the dropdown is open
    pub fn dropdown_index(&self) -> Option<usize> {
        match self.mode {
            Mode::PrefixDropdownOpen { highlighted } => Some(highlighted.index()),
            _ => None,
        }
    }

    pub fn summary(&self) -> &TextField {
        &self.summary
    }

    pub fn description(&self) -> &TextArea {
        &self.description
    }

    /// Assemble the message from the confirmed prefix and both buffers
    pub fn message(&self) -> Result<CommitMessage> {
        CommitMessage::new(
            self.prefix,
            self.summary.value(),
            self.description.value(),
        )
    }

    /// Apply one key. Returns `Some` when the form is finished.
    pub fn apply(&mut self, key: Key) -> Option<FormExit> {
        match key {
            Key::Interrupt => return Some(FormExit::Cancel),
            Key::Char('q') if !self.mode.is_editing() => return Some(FormExit::Cancel),
            Key::Tab => {
                self.mode = Mode::Browsing(self.focus().next());
                return None;
            }
            Key::BackTab => {
                self.mode = Mode::Browsing(self.focus().previous());
                return None;
            }
            _ => {}
        }

        match self.mode {
            Mode::Browsing(FocusSlot::Prefix) => {
                if key == Key::Enter {
                    self.mode = Mode::PrefixDropdownOpen {
                        highlighted: self.prefix,
                    };
                }
            }
            Mode::PrefixDropdownOpen { highlighted } => match key {
                Key::Up | Key::Char('k') => {
                    let index = highlighted.index().saturating_sub(1);
                    self.mode = Mode::PrefixDropdownOpen {
                        highlighted: Prefix::from_index(index).unwrap_or(highlighted),
                    };
                }
                Key::Down | Key::Char('j') => {
                    self.mode = Mode::PrefixDropdownOpen {
                        highlighted: Prefix::from_index(highlighted.index() + 1)
                            .unwrap_or(highlighted),
                    };
                }
                Key::Enter => {
                    self.prefix = highlighted;
                    self.mode = Mode::Browsing(FocusSlot::Prefix);
                }
                Key::Esc => self.mode = Mode::Browsing(FocusSlot::Prefix),
                _ => {}
            },
            Mode::Browsing(FocusSlot::Summary) => {
                if is_edit_key(key) {
                    self.mode = Mode::EditingSummary;
                }
            }
            Mode::EditingSummary => {
                if key == Key::Esc {
                    self.mode = Mode::Browsing(FocusSlot::Summary);
                } else {
                    self.summary.handle_key(key);
                }
            }
            Mode::Browsing(FocusSlot::Description) => {
                if is_edit_key(key) {
                    self.mode = Mode::EditingDescription;
                }
            }
            Mode::EditingDescription => {
                if key == Key::Esc {
                    self.mode = Mode::Browsing(FocusSlot::Description);
                } else {
                    self.description.handle_key(key);
                }
            }
            Mode::Browsing(FocusSlot::CommitButton) => {
                if key == Key::Enter {
                    return Some(FormExit::Commit);
                }
            }
            Mode::Browsing(FocusSlot::QuitButton) => {
                if key == Key::Enter {
                    return Some(FormExit::Cancel);
                }
            }
        }

        None
    }
}

fn is_edit_key(key: Key) -> bool {
    matches!(key, Key::Enter | Key::Insert | Key::Char('i'))
}

/// Pure form of [`ComposerState::apply`]
pub fn transition(mut state: ComposerState, key: Key) -> (ComposerState, Option<FormExit>) {
    let exit = state.apply(key);
    (state, exit)
}
