use std::fmt::{Display, Formatter};

use crate::error::{Error, Result};

pub const MESSAGE_CONSTRAINTS: &str = "Emails should be of the format local-part@domain:\n\
1. The local-part should only contain alphanumeric characters and `+_.-`, \
and may not start or end with a special character.\n\
2. The domain is made of labels separated by periods. Each label starts and ends \
with an alphanumeric character and may contain hyphens. The last label is at least 2 characters long.";

const LOCAL_PART_SPECIALS: &[char] = &['+', '_', '.', '-'];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

fn is_valid_local_part(local_part: &str) -> bool {
    let Some(first) = local_part.chars().next() else {
        return false;
    };
    let Some(last) = local_part.chars().last() else {
        return false;
    };

    first.is_ascii_alphanumeric()
        && last.is_ascii_alphanumeric()
        && local_part
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || LOCAL_PART_SPECIALS.contains(&c))
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[must_use]
pub fn is_valid(text: &str) -> bool {
    let Some((local_part, domain)) = text.split_once('@') else {
        return false;
    };

    let labels: Vec<&str> = domain.split('.').collect();
    let last_label_ok = labels.last().is_some_and(|label| label.len() >= 2);

    is_valid_local_part(local_part) && labels.iter().all(|l| is_valid_label(l)) && last_label_ok
}

impl Email {
    /// Parses an optional email: blank text means no email.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEmail`] if non-blank text is not an email address.
    pub fn parse_optional(text: &str) -> Result<Option<Self>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        if !is_valid(text) {
            return Err(Error::InvalidEmail(text.to_string()));
        }
        Ok(Some(Self(text.to_string())))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Email {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.0)
    }
}
