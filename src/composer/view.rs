//! Text projection of the commit form.
//!
//! Rendering is a pure function of [`ComposerState`]: the same state always renders
//! the same text. [`render`] applies terminal colors through `colored`; [`render_plain`]
//! emits no escape codes and marks the focused element as `*text*`, which keeps
//! snapshot assertions readable.

use crate::composer::state::{ComposerState, FocusSlot, Mode};
use crate::core::message::Prefix;
use colored::*;
use unicode_segmentation::UnicodeSegmentation;

const HELP_LINE: &str = "tab/shift+tab: move  enter: select  i: edit  esc: stop editing  q: quit";

/// Styling applied to the pieces of the form
pub trait Theme {
    fn focused(&self, text: &str) -> String;
    fn blurred(&self, text: &str) -> String;
    fn value(&self, text: &str) -> String;
    /// The grapheme under the text cursor, `None` at end of line
    fn cursor(&self, under: Option<&str>) -> String;
}

/// Colors for an interactive terminal
pub struct AnsiTheme;

impl Theme for AnsiTheme {
    fn focused(&self, text: &str) -> String {
        text.truecolor(247, 185, 119).bold().to_string()
    }

    fn blurred(&self, text: &str) -> String {
        text.truecolor(88, 88, 88).to_string()
    }

    fn value(&self, text: &str) -> String {
        text.truecolor(230, 234, 230).to_string()
    }

    fn cursor(&self, under: Option<&str>) -> String {
        under.unwrap_or(" ").reversed().to_string()
    }
}

/// No escape codes; focus is `*text*` and the cursor is `|`
pub struct PlainTheme;

impl Theme for PlainTheme {
    fn focused(&self, text: &str) -> String {
        format!("*{text}*")
    }

    fn blurred(&self, text: &str) -> String {
        text.to_string()
    }

    fn value(&self, text: &str) -> String {
        text.to_string()
    }

    fn cursor(&self, under: Option<&str>) -> String {
        format!("|{}", under.unwrap_or(""))
    }
}

pub fn render(state: &ComposerState) -> String {
    render_with(state, &AnsiTheme)
}

pub fn render_plain(state: &ComposerState) -> String {
    render_with(state, &PlainTheme)
}

pub fn render_with(state: &ComposerState, theme: &dyn Theme) -> String {
    let focus = state.focus();
    let label = |slot: FocusSlot, text: &str| {
        if focus == slot {
            theme.focused(text)
        } else {
            theme.blurred(text)
        }
    };

    let mut out = String::with_capacity(512);

    // Prefix and the open dropdown
    out.push_str(&label(FocusSlot::Prefix, "Prefix"));
    out.push_str(": ");
    out.push_str(&theme.value(state.prefix().as_str()));
    out.push('\n');
    if let Mode::PrefixDropdownOpen { highlighted } = state.mode() {
        for option in Prefix::ALL {
            if option == highlighted {
                out.push_str(&theme.focused(&format!("> {option}")));
            } else {
                out.push_str(&theme.blurred(&format!("  {option}")));
            }
            out.push('\n');
        }
    }
    out.push('\n');

    // Summary
    out.push_str(&label(FocusSlot::Summary, "Summary"));
    out.push_str(": ");
    let (text, cursor) = state.summary().visible();
    let editing_summary = state.mode() == Mode::EditingSummary;
    out.push_str(&render_line(&text, editing_summary.then_some(cursor), theme));
    out.push_str("\n\n");

    // Description
    out.push_str(&label(FocusSlot::Description, "Description"));
    out.push_str(":\n");
    let (rows, (cursor_row, cursor_col)) = state.description().visible();
    let editing_description = state.mode() == Mode::EditingDescription;
    for (i, row) in rows.iter().enumerate() {
        let cursor = (editing_description && i == cursor_row).then_some(cursor_col);
        out.push_str(&render_line(row, cursor, theme));
        out.push('\n');
    }
    out.push('\n');

    // Buttons
    out.push_str(&label(FocusSlot::CommitButton, "[ Commit ]"));
    out.push_str("    ");
    out.push_str(&label(FocusSlot::QuitButton, "[ Quit ]"));
    out.push_str("\n\n");
    out.push_str(&theme.blurred(HELP_LINE));
    out.push('\n');

    out
}

/// Style a line of field text, drawing the cursor at grapheme `cursor` when given
fn render_line(text: &str, cursor: Option<usize>, theme: &dyn Theme) -> String {
    let Some(cursor) = cursor else {
        return theme.value(text);
    };

    let graphemes: Vec<&str> = text.graphemes(true).collect();
    let split = cursor.min(graphemes.len());
    let before: String = graphemes[..split].concat();
    let under = graphemes.get(split).copied();
    let after: String = graphemes.get(split + 1..).map(|g| g.concat()).unwrap_or_default();

    let mut line = theme.value(&before);
    line.push_str(&theme.cursor(under));
    line.push_str(&theme.value(&after));
    line
}
