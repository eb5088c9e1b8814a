//! Single-line text editor used for the summary.
//!
//! Positions are grapheme indices. The optional limit counts chars, so a combining
//! mark takes up room even though it joins the previous grapheme. For display the
//! editor keeps a horizontal window of `width` graphemes around the cursor.

use crate::composer::keys::Key;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor: usize,
    char_limit: usize,
    width: usize,
    offset: usize,
}

impl TextField {
    /// `char_limit` of 0 means unbounded
    pub fn new(char_limit: usize, width: usize) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            char_limit,
            width: width.max(1),
            offset: 0,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn len(&self) -> usize {
        self.value.graphemes(true).count()
    }

    /// Apply an editing key. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Char(c) => self.insert_char(c),
            Key::Backspace => self.delete_backward(),
            Key::Delete => self.delete_forward(),
            Key::DeleteWordBackward => self.delete_word_backward(),
            Key::Left => self.cursor = self.cursor.saturating_sub(1),
            Key::Right => self.cursor = (self.cursor + 1).min(self.len()),
            Key::Home => self.cursor = 0,
            Key::End => self.cursor = self.len(),
            _ => return false,
        }
        self.ensure_cursor_visible();
        true
    }

    pub fn insert_char(&mut self, c: char) {
        if c == '\n' || c == '\r' {
            return;
        }
        if self.char_limit > 0 && self.value.chars().count() >= self.char_limit {
            return;
        }
        let byte_offset = grapheme_to_byte_offset(&self.value, self.cursor);
        self.value.insert(byte_offset, c);
        // A combining mark may merge into the previous grapheme
        self.cursor = self.value[..byte_offset + c.len_utf8()].graphemes(true).count();
    }

    pub fn delete_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = grapheme_to_byte_offset(&self.value, self.cursor - 1);
        let end = grapheme_to_byte_offset(&self.value, self.cursor);
        self.value.replace_range(start..end, "");
        self.cursor -= 1;
    }

    pub fn delete_forward(&mut self) {
        if self.cursor >= self.len() {
            return;
        }
        let start = grapheme_to_byte_offset(&self.value, self.cursor);
        let end = grapheme_to_byte_offset(&self.value, self.cursor + 1);
        self.value.replace_range(start..end, "");
    }

    pub fn delete_word_backward(&mut self) {
        let target = word_start_before(&self.value, self.cursor);
        let start = grapheme_to_byte_offset(&self.value, target);
        let end = grapheme_to_byte_offset(&self.value, self.cursor);
        self.value.replace_range(start..end, "");
        self.cursor = target;
    }

    /// The slice of the value currently inside the display window, and the cursor
    /// position relative to that slice
    pub fn visible(&self) -> (String, usize) {
        let text: String = self
            .value
            .graphemes(true)
            .skip(self.offset)
            .take(self.width)
            .collect();
        (text, self.cursor - self.offset)
    }

    fn ensure_cursor_visible(&mut self) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + self.width {
            self.offset = self.cursor + 1 - self.width;
        }
    }
}

pub(crate) fn grapheme_to_byte_offset(text: &str, index: usize) -> usize {
    text.grapheme_indices(true)
        .nth(index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

/// Grapheme index where the word ending at `cursor` starts, skipping trailing spaces first
pub(crate) fn word_start_before(text: &str, cursor: usize) -> usize {
    let graphemes: Vec<&str> = text.graphemes(true).take(cursor).collect();
    let mut pos = graphemes.len();
    while pos > 0 && graphemes[pos - 1].trim().is_empty() {
        pos -= 1;
    }
    while pos > 0 && !graphemes[pos - 1].trim().is_empty() {
        pos -= 1;
    }
    pos
}
