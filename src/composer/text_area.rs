//! Multi-line text editor used for the description.
//!
//! Lines are stored separately; the cursor is a (row, grapheme column) pair. There is
//! no length bound. For display the editor keeps `height` rows in view and shows a
//! window of `width` graphemes on the cursor row.

use crate::composer::keys::Key;
use crate::composer::text_field::{grapheme_to_byte_offset, word_start_before};
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextArea {
    lines: Vec<String>,
    row: usize,
    col: usize,
    width: usize,
    height: usize,
    scroll: usize,
}

impl TextArea {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
            width: width.max(1),
            height: height.max(1),
            scroll: 0,
        }
    }

    /// Contents joined with `\n`
    pub fn value(&self) -> String {
        self.lines.join("\n")
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Apply an editing key. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Char(c) => self.insert_char(c),
            Key::Enter => self.insert_newline(),
            Key::Backspace => self.delete_backward(),
            Key::Delete => self.delete_forward(),
            Key::DeleteWordBackward => self.delete_word_backward(),
            Key::Left => self.move_left(),
            Key::Right => self.move_right(),
            Key::Up => self.move_vertical(-1),
            Key::Down => self.move_vertical(1),
            Key::Home => self.col = 0,
            Key::End => self.col = line_len(&self.lines[self.row]),
            _ => return false,
        }
        self.ensure_cursor_visible();
        true
    }

    pub fn insert_char(&mut self, c: char) {
        if c == '\n' {
            self.insert_newline();
            return;
        }
        let line = &mut self.lines[self.row];
        let byte_offset = grapheme_to_byte_offset(line, self.col);
        line.insert(byte_offset, c);
        self.col = line[..byte_offset + c.len_utf8()].graphemes(true).count();
    }

    pub fn insert_newline(&mut self) {
        let line = &mut self.lines[self.row];
        let byte_offset = grapheme_to_byte_offset(line, self.col);
        let rest = line.split_off(byte_offset);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    pub fn delete_backward(&mut self) {
        if self.col > 0 {
            let line = &mut self.lines[self.row];
            let start = grapheme_to_byte_offset(line, self.col - 1);
            let end = grapheme_to_byte_offset(line, self.col);
            line.replace_range(start..end, "");
            self.col -= 1;
        } else if self.row > 0 {
            let current = self.lines.remove(self.row);
            self.row -= 1;
            self.col = line_len(&self.lines[self.row]);
            self.lines[self.row].push_str(&current);
        }
    }

    pub fn delete_forward(&mut self) {
        let len = line_len(&self.lines[self.row]);
        if self.col < len {
            let line = &mut self.lines[self.row];
            let start = grapheme_to_byte_offset(line, self.col);
            let end = grapheme_to_byte_offset(line, self.col + 1);
            line.replace_range(start..end, "");
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        }
    }

    pub fn delete_word_backward(&mut self) {
        if self.col == 0 {
            self.delete_backward();
            return;
        }
        let line = &mut self.lines[self.row];
        let target = word_start_before(line, self.col);
        let start = grapheme_to_byte_offset(line, target);
        let end = grapheme_to_byte_offset(line, self.col);
        line.replace_range(start..end, "");
        self.col = target;
    }

    fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = line_len(&self.lines[self.row]);
        }
    }

    fn move_right(&mut self) {
        if self.col < line_len(&self.lines[self.row]) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    fn move_vertical(&mut self, delta: isize) {
        let target = self.row as isize + delta;
        if target < 0 || target as usize >= self.lines.len() {
            return;
        }
        self.row = target as usize;
        self.col = self.col.min(line_len(&self.lines[self.row]));
    }

    /// Rows currently in view, each clipped to the display width, padded to `height`.
    /// Also returns the cursor position relative to the returned rows.
    pub fn visible(&self) -> (Vec<String>, (usize, usize)) {
        let col_offset = if self.col >= self.width {
            self.col + 1 - self.width
        } else {
            0
        };

        let mut rows: Vec<String> = self
            .lines
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(self.height)
            .map(|(i, line)| {
                let skip = if i == self.row { col_offset } else { 0 };
                line.graphemes(true).skip(skip).take(self.width).collect()
            })
            .collect();
        rows.resize(self.height, String::new());

        (rows, (self.row - self.scroll, self.col - col_offset))
    }

    fn ensure_cursor_visible(&mut self) {
        if self.row < self.scroll {
            self.scroll = self.row;
        } else if self.row >= self.scroll + self.height {
            self.scroll = self.row + 1 - self.height;
        }
    }
}

fn line_len(line: &str) -> usize {
    line.graphemes(true).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(area: &mut TextArea, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                area.handle_key(Key::Enter);
            } else {
                area.handle_key(Key::Char(c));
            }
        }
    }

    #[test]
    fn test_starts_empty() {
        let area = TextArea::new(50, 3);
        assert_eq!(area.value(), "");
        assert_eq!(area.cursor(), (0, 0));
    }

    #[test]
    fn test_enter_splits_lines() {
        let mut area = TextArea::new(50, 3);
        type_str(&mut area, "first\nsecond");
        assert_eq!(area.value(), "first\nsecond");
        assert_eq!(area.cursor(), (1, 6));
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut area = TextArea::new(50, 3);
        type_str(&mut area, "ab\ncd");
        area.handle_key(Key::Home);
        area.handle_key(Key::Backspace);
        assert_eq!(area.value(), "abcd");
        assert_eq!(area.cursor(), (0, 2));
    }

    #[test]
    fn test_delete_joins_next_line() {
        let mut area = TextArea::new(50, 3);
        type_str(&mut area, "ab\ncd");
        area.handle_key(Key::Up);
        area.handle_key(Key::Delete);
        assert_eq!(area.value(), "abcd");
    }

    #[test]
    fn test_vertical_movement_clamps_column() {
        let mut area = TextArea::new(50, 3);
        type_str(&mut area, "a\nlonger line");
        area.handle_key(Key::Up);
        assert_eq!(area.cursor(), (0, 1));
        area.handle_key(Key::Up);
        assert_eq!(area.cursor(), (0, 1));
    }

    #[test]
    fn test_left_right_cross_line_boundaries() {
        let mut area = TextArea::new(50, 3);
        type_str(&mut area, "ab\ncd");
        area.handle_key(Key::Home);
        area.handle_key(Key::Left);
        assert_eq!(area.cursor(), (0, 2));
        area.handle_key(Key::Right);
        assert_eq!(area.cursor(), (1, 0));
    }

    #[test]
    fn test_visible_rows_scroll_with_cursor() {
        let mut area = TextArea::new(50, 3);
        type_str(&mut area, "1\n2\n3\n4\n5");
        let (rows, cursor) = area.visible();
        assert_eq!(rows, vec!["3", "4", "5"]);
        assert_eq!(cursor, (2, 1));

        for _ in 0..4 {
            area.handle_key(Key::Up);
        }
        let (rows, cursor) = area.visible();
        assert_eq!(rows, vec!["1", "2", "3"]);
        assert_eq!(cursor, (0, 1));
    }

    #[test]
    fn test_visible_rows_are_padded() {
        let mut area = TextArea::new(50, 3);
        type_str(&mut area, "only");
        let (rows, _) = area.visible();
        assert_eq!(rows, vec!["only", "", ""]);
    }

    #[test]
    fn test_no_length_bound() {
        let mut area = TextArea::new(5, 3);
        let long = "x".repeat(500);
        type_str(&mut area, &long);
        assert_eq!(area.value().len(), 500);
        let (rows, cursor) = area.visible();
        assert_eq!(rows[0], "xxxx");
        assert_eq!(cursor, (0, 4));
    }

    #[test]
    fn test_cursor_ends_on_last_typed_row() {
        let mut area = TextArea::new(50, 3);
        for key in [Key::Char('o'), Key::Char('n'), Key::Char('e'), Key::Enter, Key::Char('t')] {
            area.handle_key(key);
        }
        assert_eq!(area.value(), "one\nt");
        assert_eq!(area.cursor(), (1, 1));
    }
}
