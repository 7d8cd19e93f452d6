use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::fields::Status;
use crate::record::Record;

/// Decides which records the displayed list shows.
///
/// A record matches when the status is unspecified or equal, and when no tag
/// keywords are given or some keyword occurs, ignoring case, inside one of the
/// record's tags. The default filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    status: Option<Status>,
    tag_keywords: Vec<String>,
}

impl RecordFilter {
    #[must_use]
    pub fn new(status: Option<Status>, tag_keywords: &[String]) -> Self {
        Self {
            status,
            tag_keywords: tag_keywords
                .iter()
                .map(|keyword| keyword.to_lowercase())
                .collect(),
        }
    }

    #[must_use]
    pub fn show_all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_show_all(&self) -> bool {
        self.status.is_none() && self.tag_keywords.is_empty()
    }

    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        let status_matches = self.status.is_none_or(|status| record.status == status);

        let tags_match = self.tag_keywords.is_empty()
            || self.tag_keywords.iter().any(|keyword| {
                record
                    .tags
                    .iter()
                    .any(|tag| tag.as_str().to_lowercase().contains(keyword.as_str()))
            });

        status_matches && tags_match
    }
}

impl Display for RecordFilter {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match (&self.status, self.tag_keywords.is_empty()) {
            (None, true) => formatter.write_str("all applications"),
            (Some(status), true) => write!(formatter, "status {status}"),
            (None, false) => write!(formatter, "tags matching {}", self.tag_keywords.iter().join(", ")),
            (Some(status), false) => write!(
                formatter,
                "status {status} and tags matching {}",
                self.tag_keywords.iter().join(", ")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Name, Tag};

    fn record_with(status: Status, tags: &[&str]) -> Record {
        let mut record = Record::named(Name::parse("Acme").unwrap());
        record.status = status;
        record.tags = tags.iter().map(|tag| Tag::parse(tag).unwrap()).collect();
        record
    }

    #[test]
    fn test_tag_keyword_is_case_insensitive_substring() {
        let record = record_with(Status::Applied, &["remote-work"]);
        assert!(RecordFilter::new(None, &["rem".to_string()]).matches(&record));
        assert!(RecordFilter::new(None, &["WORK".to_string()]).matches(&record));
        assert!(!RecordFilter::new(None, &["xyz".to_string()]).matches(&record));
    }

    #[test]
    fn test_any_keyword_suffices() {
        let record = record_with(Status::Applied, &["fintech"]);
        let filter = RecordFilter::new(None, &["xyz".to_string(), "fin".to_string()]);
        assert!(filter.matches(&record));
    }

    #[test]
    fn test_status_and_tags_must_both_match() {
        let record = record_with(Status::Offer, &["remote"]);
        let keywords = ["remote".to_string()];
        assert!(RecordFilter::new(Some(Status::Offer), &keywords).matches(&record));
        assert!(!RecordFilter::new(Some(Status::Rejected), &keywords).matches(&record));
        assert!(RecordFilter::new(Some(Status::Offer), &[]).matches(&record));
    }

    #[test]
    fn test_untagged_record_fails_keyword_filter() {
        let record = record_with(Status::Offer, &[]);
        assert!(!RecordFilter::new(None, &["remote".to_string()]).matches(&record));
        assert!(RecordFilter::show_all().matches(&record));
    }
}
