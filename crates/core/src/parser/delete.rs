use crate::commands::delete::MESSAGE_USAGE;
use crate::commands::DeleteCommand;
use crate::error::{Error, Result};
use crate::parser::index_expression::{parse_comma_separated, parse_whitespace_separated};

/// Parses the index list of a `delete`. Lists containing a comma use the
/// comma form, anything else the whitespace form.
///
/// # Errors
///
/// Returns [`Error::InvalidCommandFormat`] for an empty list, or the index
/// resolver's error.
pub fn parse(arguments: &str) -> Result<DeleteCommand> {
    let expression = arguments.trim();

    if expression.is_empty() {
        return Err(Error::InvalidCommandFormat {
            usage: MESSAGE_USAGE,
        });
    }

    if expression.contains(',') {
        parse_comma_form(expression)
    } else {
        parse_whitespace_form(expression)
    }
}

/// `delete 1 3 5-7`
///
/// # Errors
///
/// Returns the whitespace resolver's error for a malformed token.
pub fn parse_whitespace_form(expression: &str) -> Result<DeleteCommand> {
    parse_whitespace_separated(expression).map(DeleteCommand::new)
}

/// `delete 1,3,5-7`
///
/// # Errors
///
/// Returns the comma resolver's error for an empty or malformed token.
pub fn parse_comma_form(expression: &str) -> Result<DeleteCommand> {
    parse_comma_separated(expression).map(DeleteCommand::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_based(command: &DeleteCommand) -> Vec<usize> {
        command.indices().iter().map(|index| index.one_based()).collect()
    }

    #[test]
    fn test_whitespace_form() {
        assert_eq!(one_based(&parse(" 3 1-2  3").unwrap()), [3, 1, 2]);
    }

    #[test]
    fn test_comma_form() {
        assert_eq!(one_based(&parse(" 3, 1-2,3").unwrap()), [3, 1, 2]);
    }

    #[test]
    fn test_forms_are_not_mixed() {
        assert!(matches!(parse(" 1,2 3"), Err(Error::NotANumber(_))));
        assert!(matches!(parse(" 1,,2"), Err(Error::EmptyIndex(_))));
    }

    #[test]
    fn test_empty_is_format_error() {
        assert!(matches!(parse("   "), Err(Error::InvalidCommandFormat { .. })));
    }

    #[test]
    fn test_reversed_range() {
        assert!(matches!(parse(" 4-2"), Err(Error::ReversedRange { .. })));
    }
}
