//! Sparse partial updates to a record.

use indexmap::IndexSet;

use crate::fields::{Address, Email, Name, Phone, Remark, Status, Tag};
use crate::record::Record;

/// The fields an `edit` command changes.
///
/// Every slot left as `None` keeps the record's current value. For the
/// optional fields the inner `Option` is the new value, so `Some(None)`
/// clears the field while `None` leaves it alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDescriptor {
    name: Option<Name>,
    phone: Option<Option<Phone>>,
    email: Option<Option<Email>>,
    address: Option<Option<Address>>,
    remark: Option<Option<Remark>>,
    status: Option<Status>,
    tags: Option<IndexSet<Tag>>,
}

impl EditDescriptor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.remark.is_some()
            || self.status.is_some()
            || self.tags.is_some()
    }

    pub fn set_name(&mut self, name: Name) {
        self.name = Some(name);
    }

    pub fn set_phone(&mut self, phone: Option<Phone>) {
        self.phone = Some(phone);
    }

    pub fn set_email(&mut self, email: Option<Email>) {
        self.email = Some(email);
    }

    pub fn set_address(&mut self, address: Option<Address>) {
        self.address = Some(address);
    }

    pub fn set_remark(&mut self, remark: Option<Remark>) {
        self.remark = Some(remark);
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = Some(status);
    }

    /// Replaces the record's tags with an owned copy of `tags`.
    pub fn set_tags<'a, I>(&mut self, tags: I)
    where
        I: IntoIterator<Item = &'a Tag>,
    {
        self.tags = Some(tags.into_iter().cloned().collect());
    }

    #[must_use]
    pub fn name(&self) -> Option<&Name> {
        self.name.as_ref()
    }

    #[must_use]
    pub fn phone(&self) -> Option<Option<&Phone>> {
        self.phone.as_ref().map(Option::as_ref)
    }

    #[must_use]
    pub fn email(&self) -> Option<Option<&Email>> {
        self.email.as_ref().map(Option::as_ref)
    }

    #[must_use]
    pub fn address(&self) -> Option<Option<&Address>> {
        self.address.as_ref().map(Option::as_ref)
    }

    #[must_use]
    pub fn remark(&self) -> Option<Option<&Remark>> {
        self.remark.as_ref().map(Option::as_ref)
    }

    #[must_use]
    pub fn status(&self) -> Option<Status> {
        self.status
    }

    #[must_use]
    pub fn tags(&self) -> Option<&IndexSet<Tag>> {
        self.tags.as_ref()
    }

    /// Returns `record` with every set slot written over it.
    #[must_use]
    pub fn apply_to(&self, record: &Record) -> Record {
        Record {
            name: self.name.clone().unwrap_or_else(|| record.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| record.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| record.email.clone()),
            address: self
                .address
                .clone()
                .unwrap_or_else(|| record.address.clone()),
            remark: self.remark.clone().unwrap_or_else(|| record.remark.clone()),
            status: self.status.unwrap_or(record.status),
            tags: self.tags.clone().unwrap_or_else(|| record.tags.clone()),
        }
    }
}
