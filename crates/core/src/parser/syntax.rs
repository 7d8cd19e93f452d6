use std::fmt::{Display, Formatter};

/// Marker that introduces a field value in command text, such as `n/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    #[must_use]
    pub const fn new(prefix: &'static str) -> Self {
        Self(prefix)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl Display for Prefix {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_REMARK: Prefix = Prefix::new("r/");
pub const PREFIX_STATUS: Prefix = Prefix::new("s/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");

/// Every prefix an application record understands, in display order.
pub const RECORD_PREFIXES: [Prefix; 7] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_REMARK,
    PREFIX_STATUS,
    PREFIX_TAG,
];

/// Record prefixes that may appear at most once in a command.
pub const SINGLE_VALUED_PREFIXES: [Prefix; 6] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_REMARK,
    PREFIX_STATUS,
];
