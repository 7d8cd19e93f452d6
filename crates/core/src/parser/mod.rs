//! Turns a raw command line into a [`Command`].
//!
//! Parsing runs in fixed stages: the [`tokenizer`] splits arguments into a
//! preamble and prefixed values, the [`prefix_guard`] rejects repeated
//! single-valued fields, the field validators build value objects, and the
//! [`index_expression`] resolvers turn the preamble into positions. Nothing
//! here looks at the record list.

pub mod add;
pub mod delete;
pub mod edit;
pub mod filter;
pub mod index_expression;
pub mod prefix_guard;
pub mod status;
pub mod syntax;
pub mod tokenizer;
mod values;

use log::debug;

use crate::commands::{
    add as add_command, delete as delete_command, edit as edit_command,
    filter as filter_command, general, status as status_command, Command, ExitCommand,
    HelpCommand, ListCommand, MetricsCommand,
};
use crate::error::{Error, Result};

// Re-exports for convenience
pub use index_expression::{
    parse_comma_separated, parse_comma_separated_strict, parse_index, parse_whitespace_separated,
};
pub use prefix_guard::ensure_single_valued;
pub use syntax::Prefix;
pub use tokenizer::{tokenize, FieldMap};

/// Usage text of every command, in the order `help` lists them.
pub const ALL_USAGES: [&str; 9] = [
    add_command::MESSAGE_USAGE,
    edit_command::MESSAGE_USAGE,
    status_command::MESSAGE_USAGE,
    delete_command::MESSAGE_USAGE,
    filter_command::MESSAGE_USAGE,
    general::LIST_USAGE,
    general::METRICS_USAGE,
    general::HELP_USAGE,
    general::EXIT_USAGE,
];

/// Parses one command line.
///
/// The first word selects the command; the rest is handed to that
/// command's parser.
///
/// # Errors
///
/// Returns [`Error::UnknownCommand`] for an unrecognized command word and
/// [`Error::InvalidCommandFormat`] for a blank line; otherwise the command
/// parser's error.
pub fn parse_command(input: &str) -> Result<Command> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Error::InvalidCommandFormat {
            usage: general::HELP_USAGE,
        });
    }

    let (command_word, arguments) = match input.split_once(char::is_whitespace) {
        Some((command_word, arguments)) => (command_word, arguments),
        None => (input, ""),
    };
    debug!("Parsing `{}` command with arguments `{}`", command_word, arguments);

    match command_word {
        add_command::COMMAND_WORD => add::parse(arguments).map(Command::Add),
        edit_command::COMMAND_WORD => edit::parse(arguments),
        delete_command::COMMAND_WORD => delete::parse(arguments).map(Command::Delete),
        filter_command::COMMAND_WORD => filter::parse(arguments).map(Command::Filter),
        status_command::COMMAND_WORD => status::parse(arguments).map(Command::Status),
        general::LIST_COMMAND_WORD => Ok(Command::List(ListCommand)),
        general::HELP_COMMAND_WORD => Ok(Command::Help(HelpCommand)),
        general::METRICS_COMMAND_WORD => Ok(Command::Metrics(MetricsCommand)),
        general::EXIT_COMMAND_WORD => Ok(Command::Exit(ExitCommand)),
        unknown => Err(Error::UnknownCommand(unknown.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_command_word() {
        assert!(matches!(parse_command("add n/Acme"), Ok(Command::Add(_))));
        assert!(matches!(parse_command("edit 1 s/offer"), Ok(Command::Edit(_))));
        assert!(matches!(parse_command("edit 1,2 s/offer"), Ok(Command::BatchEdit(_))));
        assert!(matches!(parse_command("delete 1"), Ok(Command::Delete(_))));
        assert!(matches!(parse_command("filter s/offer"), Ok(Command::Filter(_))));
        assert!(matches!(parse_command("status 1 s/offer"), Ok(Command::Status(_))));
        assert!(matches!(parse_command("  list  "), Ok(Command::List(_))));
        assert!(matches!(parse_command("help"), Ok(Command::Help(_))));
        assert!(matches!(parse_command("metrics"), Ok(Command::Metrics(_))));
        assert!(matches!(parse_command("exit"), Ok(Command::Exit(_))));
    }

    #[test]
    fn test_unknown_and_blank() {
        assert!(matches!(parse_command("frobnicate 1"), Err(Error::UnknownCommand(ref word)) if word == "frobnicate"));
        assert!(matches!(parse_command("   "), Err(Error::InvalidCommandFormat { .. })));
    }

    #[test]
    fn test_command_words_are_case_sensitive() {
        assert!(matches!(parse_command("ADD n/Acme"), Err(Error::UnknownCommand(_))));
    }
}
