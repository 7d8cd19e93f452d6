use crate::commands::edit::MESSAGE_USAGE;
use crate::commands::{BatchEditCommand, Command, EditCommand};
use crate::descriptor::EditDescriptor;
use crate::error::{Error, Result};
use crate::fields::{Address, Email, Name, Phone, Remark, Status};
use crate::parser::index_expression::parse_comma_separated_strict;
use crate::parser::prefix_guard::ensure_single_valued;
use crate::parser::syntax::{
    PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE, PREFIX_REMARK, PREFIX_STATUS,
    PREFIX_TAG, RECORD_PREFIXES, SINGLE_VALUED_PREFIXES,
};
use crate::parser::tokenizer::{tokenize, FieldMap};
use crate::parser::values::parse_tags_for_edit;

/// Parses `INDEX[,INDEX|START-END]... [FIELD]...` into an [`EditCommand`]
/// for one index or a [`BatchEditCommand`] for several.
///
/// # Errors
///
/// Fails on a missing preamble, repeated single-valued fields, invalid field
/// values, an edit that changes nothing, or a malformed or repeated index.
pub fn parse(arguments: &str) -> Result<Command> {
    let field_map = tokenize(arguments, &RECORD_PREFIXES);

    if field_map.preamble().is_empty() {
        return Err(Error::InvalidCommandFormat {
            usage: MESSAGE_USAGE,
        });
    }

    ensure_single_valued(&field_map, &SINGLE_VALUED_PREFIXES)?;

    let descriptor = build_descriptor(&field_map)?;
    if !descriptor.is_any_field_edited() {
        return Err(Error::NothingToEdit);
    }

    let indices = parse_comma_separated_strict(field_map.preamble())?;

    if indices.len() == 1 {
        let index = indices[0];
        Ok(Command::Edit(EditCommand::new(index, descriptor)))
    } else {
        Ok(Command::BatchEdit(BatchEditCommand::new(indices, descriptor)))
    }
}

fn build_descriptor(field_map: &FieldMap) -> Result<EditDescriptor> {
    let mut descriptor = EditDescriptor::new();

    if let Some(name) = field_map.value(PREFIX_NAME) {
        descriptor.set_name(Name::parse(name)?);
    }
    if let Some(phone) = field_map.value(PREFIX_PHONE) {
        descriptor.set_phone(Phone::parse_optional(phone)?);
    }
    if let Some(email) = field_map.value(PREFIX_EMAIL) {
        descriptor.set_email(Email::parse_optional(email)?);
    }
    if let Some(address) = field_map.value(PREFIX_ADDRESS) {
        descriptor.set_address(Address::parse_optional(address)?);
    }
    if let Some(remark) = field_map.value(PREFIX_REMARK) {
        descriptor.set_remark(Remark::parse_optional(remark));
    }
    if let Some(status) = field_map.value(PREFIX_STATUS) {
        descriptor.set_status(Status::parse(status)?);
    }
    if let Some(tags) = parse_tags_for_edit(field_map.all_values(PREFIX_TAG))? {
        descriptor.set_tags(&tags);
    }

    Ok(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_index_builds_edit() {
        let Command::Edit(command) = parse(" 2 s/offer").unwrap() else {
            panic!("Expected a single edit");
        };
        assert_eq!(command.index().one_based(), 2);
        assert_eq!(command.descriptor().status(), Some(Status::Offer));
        assert_eq!(command.descriptor().name(), None);
    }

    #[test]
    fn test_several_indices_build_batch_edit() {
        let Command::BatchEdit(command) = parse(" 1,3-4 t/remote").unwrap() else {
            panic!("Expected a batch edit");
        };
        let indices: Vec<usize> = command.indices().iter().map(|i| i.one_based()).collect();
        assert_eq!(indices, [1, 3, 4]);
    }

    #[test]
    fn test_nothing_to_edit() {
        assert!(matches!(parse(" 1"), Err(Error::NothingToEdit)));
    }

    #[test]
    fn test_missing_index_is_format_error() {
        assert!(matches!(parse(" n/Acme"), Err(Error::InvalidCommandFormat { .. })));
    }

    #[test]
    fn test_duplicate_index_rejected() {
        let error = parse(" 1,1,2 s/applied").unwrap_err();
        assert!(error.to_string().ends_with("duplicate: 1"));
    }

    #[test]
    fn test_blank_remark_is_described_clear() {
        let Command::Edit(command) = parse(" 1 r/").unwrap() else {
            panic!("Expected a single edit");
        };
        assert_eq!(command.descriptor().remark(), Some(None));
        assert!(command.descriptor().is_any_field_edited());
    }

    #[test]
    fn test_empty_tag_clears_tags() {
        let Command::Edit(command) = parse(" 1 t/").unwrap() else {
            panic!("Expected a single edit");
        };
        assert_eq!(command.descriptor().tags().map(|tags| tags.len()), Some(0));
    }

    #[test]
    fn test_blank_name_and_status_rejected() {
        assert!(matches!(parse(" 1 n/"), Err(Error::InvalidName(_))));
        assert!(matches!(parse(" 1 s/"), Err(Error::InvalidStatus(_))));
    }

    #[test]
    fn test_repeated_fields_rejected() {
        assert!(matches!(
            parse(" 1 s/offer s/applied"),
            Err(Error::DuplicatePrefixes(_))
        ));
    }
}
