use crate::commands::add::MESSAGE_USAGE;
use crate::commands::AddCommand;
use crate::error::{Error, Result};
use crate::fields::{Address, Email, Name, Phone, Remark, Status};
use crate::parser::prefix_guard::ensure_single_valued;
use crate::parser::syntax::{
    PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE, PREFIX_REMARK, PREFIX_STATUS,
    PREFIX_TAG, RECORD_PREFIXES, SINGLE_VALUED_PREFIXES,
};
use crate::parser::tokenizer::tokenize;
use crate::parser::values::parse_tags;
use crate::record::Record;

/// Parses `n/NAME [p/PHONE] [e/EMAIL] [a/ADDRESS] [r/REMARK] [s/STATUS] [t/TAG]...`.
///
/// Only the name is required. Fields that are left out, or given blank,
/// take their placeholder value.
///
/// # Errors
///
/// Returns [`Error::InvalidCommandFormat`] without a name or with a
/// preamble, [`Error::DuplicatePrefixes`] for repeated single-valued fields,
/// or the first field validation error.
pub fn parse(arguments: &str) -> Result<AddCommand> {
    let field_map = tokenize(arguments, &RECORD_PREFIXES);

    let Some(name) = field_map.value(PREFIX_NAME) else {
        return Err(Error::InvalidCommandFormat {
            usage: MESSAGE_USAGE,
        });
    };
    if !field_map.preamble().is_empty() {
        return Err(Error::InvalidCommandFormat {
            usage: MESSAGE_USAGE,
        });
    }

    ensure_single_valued(&field_map, &SINGLE_VALUED_PREFIXES)?;

    let mut record = Record::named(Name::parse(name)?);

    if let Some(phone) = field_map.value(PREFIX_PHONE) {
        record.phone = Phone::parse_optional(phone)?;
    }
    if let Some(email) = field_map.value(PREFIX_EMAIL) {
        record.email = Email::parse_optional(email)?;
    }
    if let Some(address) = field_map.value(PREFIX_ADDRESS) {
        record.address = Address::parse_optional(address)?;
    }
    if let Some(remark) = field_map.value(PREFIX_REMARK) {
        record.remark = Remark::parse_optional(remark);
    }
    if let Some(status) = field_map.value(PREFIX_STATUS) {
        record.status = Status::parse(status)?;
    }
    record.tags = parse_tags(field_map.all_values(PREFIX_TAG))?;

    Ok(AddCommand::new(record))
}
