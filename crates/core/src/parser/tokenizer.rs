//! Splits command arguments into prefixed field values.
//!
//! A prefix only counts when it starts the text or follows whitespace, so
//! `e/hr@acme.com` inside a remark such as `r/see e/hr` still splits but
//! `r/and/or` does not. No validation happens here.

use indexmap::IndexMap;
use log::debug;

use crate::parser::syntax::Prefix;

/// Field values keyed by prefix, in the order each prefix first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    preamble: String,
    values: IndexMap<Prefix, Vec<String>>,
}

impl FieldMap {
    /// Text before the first recognized prefix, trimmed.
    #[must_use]
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value given for `prefix`.
    #[must_use]
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in input order.
    #[must_use]
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values
            .get(&prefix)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    #[must_use]
    pub fn occurrences(&self, prefix: Prefix) -> usize {
        self.all_values(prefix).len()
    }
}

fn starts_token(arguments: &str, position: usize) -> bool {
    position == 0
        || arguments[..position]
            .chars()
            .next_back()
            .is_some_and(char::is_whitespace)
}

/// Finds every `(position, prefix)` in `arguments`, ordered by position.
fn find_prefix_positions(arguments: &str, prefixes: &[Prefix]) -> Vec<(usize, Prefix)> {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|prefix| {
            arguments
                .match_indices(prefix.as_str())
                .filter(|(position, _)| starts_token(arguments, *position))
                .map(|(position, _)| (position, *prefix))
        })
        .collect();

    // Longest prefix wins when two start at the same place.
    positions.sort_by(|(a, a_prefix), (b, b_prefix)| {
        a.cmp(b)
            .then_with(|| b_prefix.as_str().len().cmp(&a_prefix.as_str().len()))
    });
    positions.dedup_by_key(|(position, _)| *position);
    positions
}

/// Tokenizes `arguments` against the recognized `prefixes`.
#[must_use]
pub fn tokenize(arguments: &str, prefixes: &[Prefix]) -> FieldMap {
    let positions = find_prefix_positions(arguments, prefixes);

    let preamble_end = positions
        .first()
        .map_or(arguments.len(), |(position, _)| *position);

    let mut field_map = FieldMap {
        preamble: arguments[..preamble_end].trim().to_string(),
        values: IndexMap::new(),
    };

    for (i, (position, prefix)) in positions.iter().enumerate() {
        let value_start = position + prefix.as_str().len();
        let value_end = positions
            .get(i + 1)
            .map_or(arguments.len(), |(next, _)| *next);

        field_map
            .values
            .entry(*prefix)
            .or_default()
            .push(arguments[value_start..value_end].trim().to_string());
    }

    debug!(
        "Tokenized `{}` into preamble `{}` and {} prefixed value(s)",
        arguments,
        field_map.preamble,
        positions.len()
    );

    field_map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::syntax::{PREFIX_NAME, PREFIX_REMARK, PREFIX_TAG, RECORD_PREFIXES};

    #[test]
    fn test_preamble_only() {
        let map = tokenize("  1, 2  ", &RECORD_PREFIXES);
        assert_eq!(map.preamble(), "1, 2");
        assert!(!map.contains(PREFIX_NAME));
    }

    #[test]
    fn test_values_and_preamble() {
        let map = tokenize("3 n/Acme Corp  t/remote t/paid", &RECORD_PREFIXES);
        assert_eq!(map.preamble(), "3");
        assert_eq!(map.value(PREFIX_NAME), Some("Acme Corp"));
        assert_eq!(map.all_values(PREFIX_TAG), ["remote", "paid"]);
    }

    #[test]
    fn test_repeated_prefix_keeps_all_values_in_order() {
        let map = tokenize("n/A n/B", &RECORD_PREFIXES);
        assert_eq!(map.all_values(PREFIX_NAME), ["A", "B"]);
        assert_eq!(map.value(PREFIX_NAME), Some("B"));
        assert_eq!(map.occurrences(PREFIX_NAME), 2);
    }

    #[test]
    fn test_embedded_prefix_is_part_of_value() {
        let map = tokenize("r/and/or n/Acme", &RECORD_PREFIXES);
        assert_eq!(map.value(PREFIX_REMARK), Some("and/or"));
        assert_eq!(map.value(PREFIX_NAME), Some("Acme"));
    }

    #[test]
    fn test_unrecognized_prefix_is_inert() {
        let map = tokenize("n/Acme x/ignored", &[PREFIX_NAME]);
        assert_eq!(map.value(PREFIX_NAME), Some("Acme x/ignored"));
    }

    #[test]
    fn test_empty_value() {
        let map = tokenize("1 t/", &RECORD_PREFIXES);
        assert_eq!(map.all_values(PREFIX_TAG), [""]);
    }
}
