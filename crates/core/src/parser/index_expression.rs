//! Resolves index expressions such as `1`, `2-4` or `1,3,5-7` into
//! de-duplicated [`IndexList`]s.
//!
//! Two grammars exist side by side: whitespace-separated tokens (`1 3 5-7`)
//! and comma-separated tokens (`1,3,5-7`). Both accept single indices and
//! inclusive ranges. The comma grammar comes in a permissive flavour that
//! drops repeated indices and a strict flavour that rejects them. Indices are
//! not checked against any list here; that happens when a command runs.

use std::ops::RangeInclusive;

use indexmap::IndexSet;
use log::debug;

use crate::error::{Error, Result};
use crate::index::{Index, IndexList};

/// Largest number of indices a single `START-END` range may expand to.
pub const MAX_RANGE_SPAN: usize = 10_000;

const MAX_INDEX: usize = i32::MAX as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Duplicates {
    Drop,
    Reject,
}

/// Parses a single positive index such as `3`.
///
/// # Errors
///
/// Returns an error naming the problem for empty, non-numeric, zero,
/// negative or oversized input.
pub fn parse_index(text: &str) -> Result<Index> {
    let value = parse_positive(text.trim())?;
    Ok(Index::from_zero_based(value - 1))
}

/// Resolves whitespace-separated indices and ranges, dropping repeats.
///
/// # Errors
///
/// Returns an error if the expression is empty or any token is malformed.
pub fn parse_whitespace_separated(expression: &str) -> Result<IndexList> {
    let tokens: Vec<&str> = expression.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(Error::EmptyIndex(expression.to_string()));
    }
    resolve(expression, &tokens, Duplicates::Drop)
}

/// Resolves comma-separated indices and ranges, dropping repeats.
///
/// # Errors
///
/// Returns an error if any token is empty or malformed.
pub fn parse_comma_separated(expression: &str) -> Result<IndexList> {
    let tokens = split_commas(expression);
    resolve(expression, &tokens, Duplicates::Drop)
}

/// Resolves comma-separated indices and ranges, failing on any index that
/// appears more than once.
///
/// # Errors
///
/// Returns [`Error::DuplicateIndices`] naming every repeated index, or an
/// error for an empty or malformed token.
pub fn parse_comma_separated_strict(expression: &str) -> Result<IndexList> {
    let tokens = split_commas(expression);
    resolve(expression, &tokens, Duplicates::Reject)
}

fn split_commas(expression: &str) -> Vec<&str> {
    expression.split(',').map(str::trim).collect()
}

fn resolve(expression: &str, tokens: &[&str], duplicates: Duplicates) -> Result<IndexList> {
    let mut indices = IndexList::new();
    let mut repeated: IndexSet<usize> = IndexSet::new();

    for token in tokens {
        if token.is_empty() {
            return Err(Error::EmptyIndex(expression.to_string()));
        }

        for one_based in parse_token(token)? {
            if !indices.insert(Index::from_zero_based(one_based - 1))
                && duplicates == Duplicates::Reject
            {
                repeated.insert(one_based);
            }
        }
    }

    if !repeated.is_empty() {
        return Err(Error::DuplicateIndices(repeated.into_iter().collect()));
    }

    debug!("Resolved `{}` to {} index(es)", expression, indices.len());
    Ok(indices)
}

fn parse_token(token: &str) -> Result<RangeInclusive<usize>> {
    if let Some(magnitude) = token.strip_prefix('-') {
        // A leading minus is a negative number, never an open range.
        if magnitude.contains('-') {
            return Err(Error::MalformedRange(token.to_string()));
        }
        let value = parse_positive(token)?;
        return Ok(value..=value);
    }

    let Some((start, end)) = token.split_once('-') else {
        let value = parse_positive(token)?;
        return Ok(value..=value);
    };

    let (start, end) = (start.trim(), end.trim());
    if start.is_empty() || end.is_empty() || end.contains('-') {
        return Err(Error::MalformedRange(token.to_string()));
    }

    let start = parse_positive(start)?;
    let end = parse_positive(end)?;

    if start > end {
        return Err(Error::ReversedRange { start, end });
    }

    let span = end - start + 1;
    if span > MAX_RANGE_SPAN {
        return Err(Error::RangeTooLarge {
            start,
            end,
            span,
            limit: MAX_RANGE_SPAN,
        });
    }

    Ok(start..=end)
}

fn parse_positive(text: &str) -> Result<usize> {
    if text.is_empty() {
        return Err(Error::EmptyIndex(text.to_string()));
    }

    let (negative, digits) = match text.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::NotANumber(text.to_string()));
    }

    if negative {
        return Err(Error::NonPositiveIndex(text.to_string()));
    }

    let value: usize = digits
        .parse()
        .map_err(|_| Error::IndexTooLarge(text.to_string()))?;

    if value > MAX_INDEX {
        return Err(Error::IndexTooLarge(text.to_string()));
    }

    if value == 0 {
        return Err(Error::NonPositiveIndex(text.to_string()));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_based(indices: &IndexList) -> Vec<usize> {
        indices.iter().map(|index| index.one_based()).collect()
    }

    #[test]
    fn test_single_index() {
        assert_eq!(parse_index(" 7 ").unwrap().one_based(), 7);
        assert_eq!(parse_index("+2").unwrap().one_based(), 2);
    }

    #[test]
    fn test_range_expands_inclusively() {
        assert_eq!(one_based(&parse_comma_separated("2-4").unwrap()), [2, 3, 4]);
        assert_eq!(one_based(&parse_whitespace_separated("2-4").unwrap()), [2, 3, 4]);
        assert_eq!(one_based(&parse_comma_separated("3-3").unwrap()), [3]);
    }

    #[test]
    fn test_reversed_range_is_an_error() {
        assert!(matches!(
            parse_comma_separated("4-2"),
            Err(Error::ReversedRange { start: 4, end: 2 })
        ));
        assert!(matches!(
            parse_whitespace_separated("4-2"),
            Err(Error::ReversedRange { .. })
        ));
    }

    #[test]
    fn test_permissive_drops_duplicates_keeping_first_order() {
        assert_eq!(one_based(&parse_comma_separated("1,1,2").unwrap()), [1, 2]);
        assert_eq!(
            one_based(&parse_whitespace_separated("5 1-3 2").unwrap()),
            [5, 1, 2, 3]
        );
    }

    #[test]
    fn test_strict_rejects_duplicates() {
        let error = parse_comma_separated_strict("1,1,2").unwrap_err();
        assert!(matches!(error, Error::DuplicateIndices(ref repeated) if repeated == &[1]));
        assert!(error.to_string().ends_with("duplicate: 1"));

        let error = parse_comma_separated_strict("1-3,2,3,3").unwrap_err();
        assert_eq!(error.to_string(), "Invalid index list, contains duplicate: 2, 3");
    }

    #[test]
    fn test_strict_accepts_unique() {
        assert_eq!(
            one_based(&parse_comma_separated_strict("3, 1-2").unwrap()),
            [3, 1, 2]
        );
    }

    #[test]
    fn test_empty_tokens() {
        assert!(matches!(parse_comma_separated("1,,2"), Err(Error::EmptyIndex(_))));
        assert!(matches!(parse_comma_separated("1,"), Err(Error::EmptyIndex(_))));
        assert!(matches!(parse_comma_separated(""), Err(Error::EmptyIndex(_))));
        assert!(matches!(parse_whitespace_separated("  "), Err(Error::EmptyIndex(_))));
    }

    #[test]
    fn test_distinct_token_failures() {
        assert!(matches!(parse_index("abc"), Err(Error::NotANumber(_))));
        assert!(matches!(parse_index("0"), Err(Error::NonPositiveIndex(_))));
        assert!(matches!(parse_index("-3"), Err(Error::NonPositiveIndex(_))));
        assert!(matches!(
            parse_index("99999999999999999999999"),
            Err(Error::IndexTooLarge(_))
        ));
        assert!(matches!(parse_index("2147483648"), Err(Error::IndexTooLarge(_))));
        assert!(matches!(parse_comma_separated("0-3"), Err(Error::NonPositiveIndex(_))));
        assert!(matches!(parse_comma_separated("3-"), Err(Error::MalformedRange(_))));
        assert!(matches!(parse_comma_separated("1-2-3"), Err(Error::MalformedRange(_))));
        assert!(matches!(parse_comma_separated("-1-3"), Err(Error::MalformedRange(_))));
        assert!(matches!(parse_comma_separated("1-x"), Err(Error::NotANumber(_))));
    }

    #[test]
    fn test_range_span_is_bounded() {
        assert!(parse_comma_separated(&format!("1-{MAX_RANGE_SPAN}")).is_ok());
        assert!(matches!(
            parse_comma_separated(&format!("1-{}", MAX_RANGE_SPAN + 1)),
            Err(Error::RangeTooLarge { .. })
        ));
    }

    #[test]
    fn test_resolution_is_deterministic_and_positive() {
        for expression in ["1", "2-4", "3,1,2", "10-12,1"] {
            let first = parse_comma_separated(expression).unwrap();
            let second = parse_comma_separated(expression).unwrap();
            assert_eq!(one_based(&first), one_based(&second));
            assert!(first.iter().all(|index| index.one_based() >= 1));
        }
    }

    #[test]
    fn test_whitespace_grammar_does_not_split_commas() {
        assert!(matches!(
            parse_whitespace_separated("1,2"),
            Err(Error::NotANumber(_))
        ));
    }
}
