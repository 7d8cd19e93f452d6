use crate::error::{Error, Result};
use crate::parser::syntax::Prefix;
use crate::parser::tokenizer::FieldMap;

/// Fails if any prefix in `single_valued` was given more than once.
///
/// All offending prefixes are reported together, in the order of
/// `single_valued`.
///
/// # Errors
///
/// Returns [`Error::DuplicatePrefixes`] listing the repeated prefixes.
pub fn ensure_single_valued(field_map: &FieldMap, single_valued: &[Prefix]) -> Result<()> {
    let repeated: Vec<String> = single_valued
        .iter()
        .filter(|prefix| field_map.occurrences(**prefix) > 1)
        .map(ToString::to_string)
        .collect();

    if repeated.is_empty() {
        Ok(())
    } else {
        Err(Error::DuplicatePrefixes(repeated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::syntax::{RECORD_PREFIXES, SINGLE_VALUED_PREFIXES};
    use crate::parser::tokenizer::tokenize;

    #[test]
    fn test_single_duplicate_named() {
        let map = tokenize("n/A n/B", &RECORD_PREFIXES);
        let error = ensure_single_valued(&map, &SINGLE_VALUED_PREFIXES).unwrap_err();
        assert!(matches!(error, Error::DuplicatePrefixes(ref prefixes) if prefixes == &["n/"]));
    }

    #[test]
    fn test_every_duplicate_named() {
        let map = tokenize("p/123 n/A p/456 e/a@b.co n/B", &RECORD_PREFIXES);
        let error = ensure_single_valued(&map, &SINGLE_VALUED_PREFIXES).unwrap_err();
        assert!(
            matches!(error, Error::DuplicatePrefixes(ref prefixes) if prefixes == &["n/", "p/"])
        );
    }

    #[test]
    fn test_tags_may_repeat() {
        let map = tokenize("n/A t/x t/y", &RECORD_PREFIXES);
        assert!(ensure_single_valued(&map, &SINGLE_VALUED_PREFIXES).is_ok());
    }
}
