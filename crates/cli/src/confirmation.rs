//! Terminal confirmation prompt.

use std::io::{self, stdin, stdout, BufRead, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetForegroundColor};
use jobtrack_core::confirmation::{Confirmation, ConfirmationConfig};
use log::{info, warn};

/// Asks on the terminal before destructive actions go ahead.
///
/// The prompt blocks until the user answers. When the configuration says
/// to auto-approve, nothing is printed and every request is approved.
#[derive(Debug, Clone, Copy)]
pub struct TerminalConfirmation {
    config: ConfirmationConfig,
}

impl TerminalConfirmation {
    #[must_use]
    pub fn new(config: ConfirmationConfig) -> Self {
        Self { config }
    }
}

impl Confirmation for TerminalConfirmation {
    fn confirm(&self, title: &str, header: &str, body: &str) -> bool {
        if self.config.auto_approve {
            info!("Auto-approving `{title}`");
            return true;
        }

        match prompt_for_confirmation(&mut stdin().lock(), &mut stdout(), title, header, body) {
            Ok(answer) => answer,
            Err(e) => {
                warn!("Could not read confirmation, treating it as declined: {e}");
                false
            }
        }
    }
}

/// Prints the confirmation text and reads answers until one is recognized.
///
/// An empty answer or end of input declines.
///
/// # Errors
///
/// Returns an error if writing the prompt or reading the answer fails.
pub fn prompt_for_confirmation(
    input: &mut impl BufRead,
    output: &mut impl Write,
    title: &str,
    header: &str,
    body: &str,
) -> io::Result<bool> {
    queue!(
        output,
        SetAttribute(Attribute::Bold),
        Print(title),
        SetAttribute(Attribute::Reset),
        Print("\n"),
        SetForegroundColor(Color::Yellow),
        Print(header),
        SetAttribute(Attribute::Reset),
        Print("\n"),
        Print(body),
        Print("\n")
    )?;

    loop {
        write!(output, "Proceed? ([y]es/[N]o): ")?;
        output.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            return Ok(false);
        }

        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "" | "n" | "no" => return Ok(false),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answer(input: &str) -> (bool, String) {
        let mut output = Vec::new();
        let answer = prompt_for_confirmation(
            &mut Cursor::new(input),
            &mut output,
            "Delete applications",
            "Delete 1 application(s)?",
            "1. Acme",
        )
        .unwrap();
        (answer, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_yes_approves() {
        assert!(answer("y\n").0);
        assert!(answer("YES\n").0);
    }

    #[test]
    fn test_default_declines() {
        assert!(!answer("\n").0);
        assert!(!answer("n\n").0);
        assert!(!answer("").0);
    }

    #[test]
    fn test_unrecognized_answer_asks_again() {
        let (approved, output) = answer("maybe\ny\n");
        assert!(approved);
        assert_eq!(output.matches("Proceed?").count(), 2);
    }

    #[test]
    fn test_prompt_shows_affected_records() {
        let (_, output) = answer("n\n");
        assert!(output.contains("Delete 1 application(s)?"));
        assert!(output.contains("1. Acme"));
    }

    #[test]
    fn test_auto_approve_skips_prompt() {
        let confirmation = TerminalConfirmation::new(ConfirmationConfig { auto_approve: true });
        assert!(confirmation.confirm("title", "header", "body"));
    }
}
