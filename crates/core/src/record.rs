use std::fmt::{Display, Formatter};

use indexmap::IndexSet;
use itertools::Itertools;

use crate::fields::{Address, Email, Name, Phone, Remark, Status, Tag};

/// Text shown in place of a field that has no value.
pub const ABSENT_PLACEHOLDER: &str = "-";

/// A tracked job application.
///
/// Two records are the *same application* when their names match ignoring
/// case (see [`Record::is_same`]); the remaining fields only matter for full
/// equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: Name,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub remark: Option<Remark>,
    pub status: Status,
    pub tags: IndexSet<Tag>,
}

impl Record {
    /// A record carrying only a name; every other field takes its
    /// placeholder value.
    #[must_use]
    pub fn named(name: Name) -> Self {
        Self {
            name,
            phone: None,
            email: None,
            address: None,
            remark: None,
            status: Status::default(),
            tags: IndexSet::new(),
        }
    }

    #[must_use]
    pub fn is_same(&self, other: &Record) -> bool {
        self.name == other.name
    }

    #[must_use]
    pub fn with_status(&self, status: Status) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

fn or_placeholder<T: Display>(value: Option<&T>) -> String {
    value.map_or_else(|| ABSENT_PLACEHOLDER.to_string(), ToString::to_string)
}

impl Display for Record {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{} | Status: {} | Phone: {} | Email: {} | Address: {} | Remark: {}",
            self.name,
            self.status,
            or_placeholder(self.phone.as_ref()),
            or_placeholder(self.email.as_ref()),
            or_placeholder(self.address.as_ref()),
            or_placeholder(self.remark.as_ref()),
        )?;

        if !self.tags.is_empty() {
            write!(formatter, " | Tags: {}", self.tags.iter().join(" "))?;
        }

        Ok(())
    }
}
