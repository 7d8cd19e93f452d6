//! Rendering of command results, records and errors on the terminal.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetForegroundColor};
use indexmap::IndexMap;
use itertools::Itertools;
use jobtrack_core::commands::CommandResult;
use jobtrack_core::error::Error;
use jobtrack_core::fields::Status;
use jobtrack_core::parser::ALL_USAGES;
use jobtrack_core::record::Record;

const EMPTY_LIST_MESSAGE: &str = "No applications to show.";

/// Usage of every command, separated by blank lines.
#[must_use]
pub fn help_text() -> String {
    ALL_USAGES.join("\n\n")
}

/// One line per status with its record count, followed by the total.
#[must_use]
pub fn metrics_text(counts: &IndexMap<Status, usize>) -> String {
    let width = counts
        .keys()
        .map(|status| status.as_str().len())
        .max()
        .unwrap_or_default();
    let total: usize = counts.values().sum();

    counts
        .iter()
        .map(|(status, count)| format!("{:<width$}  {count}", status.as_str()))
        .chain([format!("{:<width$}  {total}", "total")])
        .join("\n")
}

/// The displayed records, numbered from 1 the way commands address them.
#[must_use]
pub fn record_listing(records: &[&Record]) -> String {
    if records.is_empty() {
        return EMPTY_LIST_MESSAGE.to_string();
    }

    records
        .iter()
        .enumerate()
        .map(|(position, record)| format!("{}. {record}", position + 1))
        .join("\n")
}

/// Prints feedback in green, or yellow when the user called the command off.
///
/// # Errors
///
/// Returns an error if writing to `output` fails.
pub fn print_result(output: &mut impl Write, result: &CommandResult) -> io::Result<()> {
    let color = if result.is_cancelled() {
        Color::Yellow
    } else {
        Color::Green
    };
    print_colored(output, &result.feedback, color)
}

/// Prints an error in red.
///
/// # Errors
///
/// Returns an error if writing to `output` fails.
pub fn print_error(output: &mut impl Write, error: &Error) -> io::Result<()> {
    print_colored(output, &error.to_string(), Color::Red)
}

/// Prints plain text followed by a newline.
///
/// # Errors
///
/// Returns an error if writing to `output` fails.
pub fn print_plain(output: &mut impl Write, text: &str) -> io::Result<()> {
    writeln!(output, "{text}")?;
    output.flush()
}

fn print_colored(output: &mut impl Write, text: &str, color: Color) -> io::Result<()> {
    queue!(
        output,
        SetForegroundColor(color),
        Print(text),
        SetAttribute(Attribute::Reset),
        Print("\n")
    )?;
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobtrack_core::fields::Name;

    #[test]
    fn test_help_lists_every_command() {
        let help = help_text();
        for word in ["add:", "edit:", "status:", "delete:", "filter:", "list:", "exit:"] {
            assert!(help.contains(word), "missing `{word}`");
        }
    }

    #[test]
    fn test_metrics_text() {
        let mut counts: IndexMap<Status, usize> =
            Status::ALL.into_iter().map(|status| (status, 0)).collect();
        counts.insert(Status::Applied, 2);
        counts.insert(Status::Offer, 1);

        let text = metrics_text(&counts);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), Status::ALL.len() + 1);
        assert_eq!(lines[1].split_whitespace().collect_vec(), ["applied", "2"]);
        assert_eq!(
            lines.last().map(|line| line.split_whitespace().collect_vec()),
            Some(vec!["total", "3"])
        );
        assert_eq!(lines[0].find('0'), lines[1].find('2'));
    }

    #[test]
    fn test_record_listing() {
        let acme = Record::named(Name::parse("Acme").unwrap());
        let globex = Record::named(Name::parse("Globex").unwrap());

        let listing = record_listing(&[&acme, &globex]);
        assert!(listing.starts_with("1. Acme | Status: to-apply"));
        assert!(listing.contains("\n2. Globex"));

        assert_eq!(record_listing(&[]), EMPTY_LIST_MESSAGE);
    }

    #[test]
    fn test_print_result_writes_feedback() {
        let mut output = Vec::new();
        print_result(&mut output, &CommandResult::cancelled("Deletion cancelled.")).unwrap();
        assert!(String::from_utf8(output)
            .unwrap()
            .contains("Deletion cancelled."));
    }
}
