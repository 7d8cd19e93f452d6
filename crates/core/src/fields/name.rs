use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};

pub const MESSAGE_CONSTRAINTS: &str =
    "Names should contain at least one visible character and no control characters.";

/// The company or role name of an application; doubles as its identity.
///
/// Equality ignores letter case but not whitespace, so `Acme Corp` and
/// `acme corp` are the same application while `Acme  Corp` is not.
#[derive(Debug, Clone)]
pub struct Name(String);

#[must_use]
pub fn is_valid(text: &str) -> bool {
    !text.trim().is_empty() && !text.chars().any(char::is_control)
}

impl Name {
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if the text is blank or contains
    /// control characters.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if !is_valid(text) {
            return Err(Error::InvalidName(text.to_string()));
        }
        Ok(Self(text.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }
}

impl Eq for Name {}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_lowercase().hash(state);
    }
}

impl Display for Name {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.0)
    }
}
