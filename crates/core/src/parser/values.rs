//! Field-value helpers shared by the command parsers.

use indexmap::IndexSet;

use crate::error::Result;
use crate::fields::Tag;

/// Parses every tag value, failing on the first invalid one.
pub(crate) fn parse_tags(values: &[String]) -> Result<IndexSet<Tag>> {
    values.iter().map(|value| Tag::parse(value)).collect()
}

/// Tags for an edit: `None` when no `t/` was given, an empty set when a
/// single empty `t/` asks to clear them.
pub(crate) fn parse_tags_for_edit(values: &[String]) -> Result<Option<IndexSet<Tag>>> {
    match values {
        [] => Ok(None),
        [only] if only.trim().is_empty() => Ok(Some(IndexSet::new())),
        values => parse_tags(values).map(Some),
    }
}
