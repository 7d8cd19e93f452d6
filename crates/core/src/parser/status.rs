use crate::commands::status::MESSAGE_USAGE;
use crate::commands::StatusCommand;
use crate::error::{Error, Result};
use crate::fields::Status;
use crate::parser::index_expression::parse_index;
use crate::parser::prefix_guard::ensure_single_valued;
use crate::parser::syntax::PREFIX_STATUS;
use crate::parser::tokenizer::tokenize;

/// Parses `INDEX s/STATUS`.
///
/// # Errors
///
/// Fails without an index or status, on a repeated status, or on an invalid
/// index or status value.
pub fn parse(arguments: &str) -> Result<StatusCommand> {
    let field_map = tokenize(arguments, &[PREFIX_STATUS]);

    let Some(status) = field_map.value(PREFIX_STATUS) else {
        return Err(Error::InvalidCommandFormat {
            usage: MESSAGE_USAGE,
        });
    };
    if field_map.preamble().is_empty() {
        return Err(Error::InvalidCommandFormat {
            usage: MESSAGE_USAGE,
        });
    }

    ensure_single_valued(&field_map, &[PREFIX_STATUS])?;

    let status = Status::parse(status)?;
    let index = parse_index(field_map.preamble())?;

    Ok(StatusCommand::new(index, status))
}
