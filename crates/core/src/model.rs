//! The record collection commands run against.

use indexmap::IndexMap;
use log::warn;

use crate::fields::{Name, Status};
use crate::filter::RecordFilter;
use crate::record::Record;

/// Mutation surface a command sees.
///
/// Commands address records through [`RecordCollection::displayed`], the
/// filtered view the user is looking at, and mutate through the remaining
/// methods. Implementations own the records exclusively for the duration of a
/// command.
pub trait RecordCollection {
    /// Whether a record with this identity is already stored.
    fn exists(&self, name: &Name) -> bool;

    fn insert(&mut self, record: Record);

    fn remove(&mut self, record: &Record);

    fn replace(&mut self, target: &Record, edited: Record);

    /// Records that pass the current display filter, in stored order.
    fn displayed(&self) -> Vec<&Record>;

    fn set_display_filter(&mut self, filter: RecordFilter);
}

/// In-memory [`RecordCollection`].
#[derive(Debug, Clone, Default)]
pub struct RecordBook {
    records: Vec<Record>,
    filter: RecordFilter,
}

impl RecordBook {
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            filter: RecordFilter::show_all(),
        }
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn filter(&self) -> &RecordFilter {
        &self.filter
    }

    /// Number of records in each status, listing every status once.
    #[must_use]
    pub fn status_counts(&self) -> IndexMap<Status, usize> {
        let mut counts: IndexMap<Status, usize> =
            Status::ALL.into_iter().map(|status| (status, 0)).collect();

        for record in &self.records {
            *counts.entry(record.status).or_default() += 1;
        }

        counts
    }

    fn position(&self, record: &Record) -> Option<usize> {
        self.records.iter().position(|stored| stored == record)
    }
}

impl RecordCollection for RecordBook {
    fn exists(&self, name: &Name) -> bool {
        self.records.iter().any(|record| record.name == *name)
    }

    fn insert(&mut self, record: Record) {
        self.records.push(record);
    }

    fn remove(&mut self, record: &Record) {
        match self.position(record) {
            Some(position) => {
                self.records.remove(position);
            }
            None => warn!("Tried to remove `{}`, which is not stored", record.name),
        }
    }

    fn replace(&mut self, target: &Record, edited: Record) {
        match self.position(target) {
            Some(position) => self.records[position] = edited,
            None => warn!("Tried to replace `{}`, which is not stored", target.name),
        }
    }

    fn displayed(&self) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|record| self.filter.matches(record))
            .collect()
    }

    fn set_display_filter(&mut self, filter: RecordFilter) {
        self.filter = filter;
    }
}
