use std::fmt::{Display, Formatter};

use crate::error::{Error, Result};

pub const MESSAGE_CONSTRAINTS: &str = "Tags should be alphanumeric segments joined by single \
hyphens, without a leading or trailing hyphen.";

pub const MAX_LENGTH: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

#[must_use]
pub fn is_valid(text: &str) -> bool {
    text.split('-')
        .all(|segment| !segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphanumeric()))
}

impl Tag {
    /// # Errors
    ///
    /// Returns [`Error::TagTooLong`] for tags over [`MAX_LENGTH`] characters and
    /// [`Error::InvalidTag`] for any other malformed tag.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        let length = text.chars().count();
        if length > MAX_LENGTH {
            return Err(Error::TagTooLong {
                tag: text.to_string(),
                length,
            });
        }
        if !is_valid(text) {
            return Err(Error::InvalidTag(text.to_string()));
        }
        Ok(Self(text.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Tag {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "[{}]", self.0)
    }
}
