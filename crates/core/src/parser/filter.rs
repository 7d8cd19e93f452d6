use crate::commands::filter::MESSAGE_USAGE;
use crate::commands::FilterCommand;
use crate::error::{Error, Result};
use crate::fields::Status;
use crate::filter::RecordFilter;
use crate::parser::prefix_guard::ensure_single_valued;
use crate::parser::syntax::{PREFIX_STATUS, PREFIX_TAG};
use crate::parser::tokenizer::tokenize;

/// Parses `[s/STATUS] [t/KEYWORD]...`; at least one must be present.
///
/// # Errors
///
/// Fails on a preamble, a repeated status, an unknown status, a blank
/// keyword, or when neither criterion is given.
pub fn parse(arguments: &str) -> Result<FilterCommand> {
    let field_map = tokenize(arguments, &[PREFIX_STATUS, PREFIX_TAG]);

    if !field_map.preamble().is_empty() {
        return Err(Error::InvalidCommandFormat {
            usage: MESSAGE_USAGE,
        });
    }

    ensure_single_valued(&field_map, &[PREFIX_STATUS])?;

    let status = field_map.value(PREFIX_STATUS).map(Status::parse).transpose()?;

    let keywords = field_map.all_values(PREFIX_TAG);
    if keywords.iter().any(|keyword| keyword.trim().is_empty()) {
        return Err(Error::BlankFilterKeyword);
    }

    if status.is_none() && keywords.is_empty() {
        return Err(Error::MissingFilterCriteria);
    }

    Ok(FilterCommand::new(RecordFilter::new(status, keywords)))
}
