use std::fmt::{Display, Formatter};

use crate::error::{Error, Result};

pub const MESSAGE_CONSTRAINTS: &str =
    "Addresses can take any values, but may not contain line breaks or other control characters.";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

#[must_use]
pub fn is_valid(text: &str) -> bool {
    !text.trim().is_empty() && !text.chars().any(char::is_control)
}

impl Address {
    /// Parses an optional address: blank text means no address.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAddress`] if the text contains control characters.
    pub fn parse_optional(text: &str) -> Result<Option<Self>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        if !is_valid(text) {
            return Err(Error::InvalidAddress(text.to_string()));
        }
        Ok(Some(Self(text.to_string())))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Address {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_values() {
        assert_eq!(
            Address::parse_optional("1 Infinite Loop, #02-25").unwrap().unwrap().as_str(),
            "1 Infinite Loop, #02-25"
        );
        assert_eq!(Address::parse_optional(" ").unwrap(), None);
        assert!(matches!(
            Address::parse_optional("Line one\nLine two"),
            Err(Error::InvalidAddress(_))
        ));
    }
}
