//! Final status lines printed by the binary.
//!
//! Every run ends with exactly one of these lines:
//! - `Commit created: <id>` on stdout after a successful commit
//! - `Quit selected` on stdout when the user quit the form
//! - `Error: <message>` on stderr for any failure

use colored::*;
use std::io::{self, IsTerminal};

pub const QUIT_SELECTED: &str = "Quit selected";

/// `Error: <message>`, with a red label only when `colorize` is set
pub fn format_error(message: &str, colorize: bool) -> String {
    if colorize {
        format!("{} {}", "Error:".red(), message)
    } else {
        format!("Error: {message}")
    }
}

/// Prints `Error: <message>` to stderr as a single line.
/// `colored` only checks stdout, so stderr is checked here.
pub fn print_error(message: &str) {
    let colorize =
        io::stderr().is_terminal() && colored::control::SHOULD_COLORIZE.should_colorize();
    eprintln!("{}", format_error(message, colorize));
}

pub fn print_commit_created(id: &str) {
    println!("Commit created: {}", id.green());
}

pub fn print_quit_selected() {
    println!("{QUIT_SELECTED}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_functions_do_not_panic() {
        print_error("no files are staged");
        print_commit_created("0123abcd");
        print_quit_selected();
    }

    #[test]
    fn test_error_line_is_plain_without_color() {
        let line = format_error("no files are staged", false);
        assert_eq!(line, "Error: no files are staged");
        assert!(!line.contains('\x1b'));
    }

    #[test]
    fn test_error_line_keeps_message_with_color() {
        let line = format_error("no files are staged", true);
        assert!(line.ends_with(" no files are staged"));
        assert!(line.contains("Error:"));
    }

    #[test]
    fn test_quit_line() {
        assert_eq!(QUIT_SELECTED, "Quit selected");
    }
}
