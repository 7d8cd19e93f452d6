use std::fmt::{Display, Formatter};

/// Free-form note attached to an application.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Remark(String);

impl Remark {
    /// Any non-blank text is a remark; blank text means no remark.
    #[must_use]
    pub fn parse_optional(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(Self(text.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Remark {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.0)
    }
}
