use std::fmt::{Display, Formatter};

use crate::error::{Error, Result};

pub const MESSAGE_CONSTRAINTS: &str = "Phone numbers should only contain digits, \
optionally a leading `+` and single spaces between digit groups, with at least 3 digits.";

const MIN_DIGITS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

#[must_use]
pub fn is_valid(text: &str) -> bool {
    let digits = text.strip_prefix('+').unwrap_or(text);

    // Splitting on a single space yields an empty group for leading,
    // trailing or doubled spaces.
    let groups_ok = digits
        .split(' ')
        .all(|group| !group.is_empty() && group.chars().all(|c| c.is_ascii_digit()));

    groups_ok && digits.chars().filter(char::is_ascii_digit).count() >= MIN_DIGITS
}

impl Phone {
    /// Parses an optional phone number: blank text means no phone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPhone`] if non-blank text is not a phone number.
    pub fn parse_optional(text: &str) -> Result<Option<Self>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        if !is_valid(text) {
            return Err(Error::InvalidPhone(text.to_string()));
        }
        Ok(Some(Self(text.to_string())))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Phone {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phones() {
        assert!(is_valid("911"));
        assert!(is_valid("+65 9123 4567"));
        assert!(is_valid("93121534"));
    }

    #[test]
    fn test_invalid_phones() {
        assert!(!is_valid("91"));
        assert!(!is_valid("+"));
        assert!(!is_valid("9312 1534 "));
        assert!(!is_valid("9312  1534"));
        assert!(!is_valid("phone"));
        assert!(!is_valid("9011p041"));
        assert!(!is_valid("++65 123"));
    }

    #[test]
    fn test_blank_phone_is_absent() {
        assert_eq!(Phone::parse_optional("  ").unwrap(), None);
        assert!(matches!(
            Phone::parse_optional("12"),
            Err(Error::InvalidPhone(_))
        ));
    }
}
