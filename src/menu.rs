// src/menu.rs
//
// Numbered-menu primitive shared by every navigation state. Generic over
// BufRead/Write so tests drive it with a Cursor instead of stdin.

use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Zero-based index into the choices slice.
    Pick(usize),
    Cancel,
}

/// Print each label with a 1-based ordinal, plus "0) Cancel" when allowed,
/// then prompt until the entered token matches a printed ordinal. Invalid
/// tokens re-prompt; they never crash or silently default.
///
/// Two deliberate policies beyond the prompt loop:
/// - an empty choice list auto-cancels after a notice instead of hanging on
///   a prompt nothing can satisfy;
/// - end of input counts as cancel, so a closed stdin unwinds the menus
///   instead of spinning.
pub fn show_menu<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    choices: &[String],
    allow_cancel: bool,
) -> io::Result<MenuChoice> {
    if choices.is_empty() {
        writeln!(out, "(nothing to select here)")?;
        return Ok(MenuChoice::Cancel);
    }

    for (index, choice) in choices.iter().enumerate() {
        writeln!(out, "{}) {}", index + 1, choice)?;
    }
    if allow_cancel {
        writeln!(out, "0) Cancel")?;
    }

    loop {
        write!(out, "Select an option: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(MenuChoice::Cancel);
        }
        let token = line.trim();

        if allow_cancel && token == "0" {
            return Ok(MenuChoice::Cancel);
        }
        // Exact string match against printed ordinals: "01" or "1.0" are
        // invalid even though they parse.
        if let Some(index) = (1..=choices.len()).find(|i| token == i.to_string()) {
            return Ok(MenuChoice::Pick(index - 1));
        }
        writeln!(out, "Invalid selection")?;
    }
}

/// ANSI clear + home. Cosmetic only.
pub fn clear<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "\x1b[2J\x1b[H")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str, choices: &[&str], allow_cancel: bool) -> (MenuChoice, String) {
        let choices: Vec<String> = choices.iter().map(|c| s!(*c)).collect();
        let mut input = Cursor::new(script.as_bytes());
        let mut out = Vec::new();
        let choice = show_menu(&mut input, &mut out, &choices, allow_cancel).unwrap();
        (choice, String::from_utf8(out).unwrap())
    }

    #[test]
    fn invalid_tokens_reprompt_then_cancel() {
        let (choice, out) = run("x\n5\n0\n", &["A", "B", "C"], true);
        assert_eq!(choice, MenuChoice::Cancel);
        assert_eq!(out.matches("Invalid selection").count(), 2);
        assert_eq!(out.matches("Select an option: ").count(), 3);
    }

    #[test]
    fn valid_pick_is_zero_based() {
        let (choice, out) = run("2\n", &["A", "B", "C"], true);
        assert_eq!(choice, MenuChoice::Pick(1));
        assert!(out.contains("1) A\n2) B\n3) C\n0) Cancel\n"));
    }

    #[test]
    fn zero_without_cancel_is_invalid() {
        let (choice, out) = run("0\n3\n", &["A", "B", "C"], false);
        assert_eq!(choice, MenuChoice::Pick(2));
        assert_eq!(out.matches("Invalid selection").count(), 1);
        assert!(!out.contains("0) Cancel"));
    }

    #[test]
    fn padded_ordinals_are_invalid() {
        let (choice, out) = run("01\n1\n", &["A"], true);
        assert_eq!(choice, MenuChoice::Pick(0));
        assert_eq!(out.matches("Invalid selection").count(), 1);
    }

    #[test]
    fn empty_menu_auto_cancels() {
        let (choice, out) = run("", &[], true);
        assert_eq!(choice, MenuChoice::Cancel);
        assert!(out.contains("(nothing to select here)"));
        assert!(!out.contains("Select an option:"));
    }

    #[test]
    fn eof_counts_as_cancel() {
        let (choice, _) = run("", &["A"], true);
        assert_eq!(choice, MenuChoice::Cancel);
    }
}
