//! Reading and writing the records file used by the shell.
//!
//! Records are stored as YAML entries of plain strings and pass through the
//! same field validators as typed input when loaded. The command parsers and
//! commands never touch this module.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fields::{Address, Email, Name, Phone, Remark, Status, Tag};
use crate::record::Record;

const FILE_DESCRIPTION: &str = "records";

/// On-disk form of a [`Record`].
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RecordEntry {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub remark: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<&Record> for RecordEntry {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name.to_string(),
            phone: record.phone.as_ref().map(ToString::to_string),
            email: record.email.as_ref().map(ToString::to_string),
            address: record.address.as_ref().map(ToString::to_string),
            remark: record.remark.as_ref().map(ToString::to_string),
            status: Some(record.status.to_string()),
            tags: record.tags.iter().map(|tag| tag.as_str().to_string()).collect(),
        }
    }
}

impl RecordEntry {
    /// Validates the entry into a [`Record`].
    ///
    /// # Errors
    ///
    /// Returns the field validator's error for any invalid value.
    pub fn to_record(&self) -> Result<Record> {
        let optional = |value: &Option<String>| value.clone().unwrap_or_default();

        let mut record = Record::named(Name::parse(&self.name)?);
        record.phone = Phone::parse_optional(&optional(&self.phone))?;
        record.email = Email::parse_optional(&optional(&self.email))?;
        record.address = Address::parse_optional(&optional(&self.address))?;
        record.remark = Remark::parse_optional(&optional(&self.remark));
        if let Some(status) = &self.status {
            record.status = Status::parse(status)?;
        }
        record.tags = self
            .tags
            .iter()
            .map(|tag| Tag::parse(tag))
            .collect::<Result<_>>()?;

        Ok(record)
    }
}

fn get_reader(path: &str) -> Result<File> {
    File::open(path)
        .map_err(|e| Error::io_error(FILE_DESCRIPTION.to_string(), path.to_string(), e))
}

fn corrupt(path: &str, reason: String) -> Error {
    Error::CorruptRecord {
        path: path.to_string(),
        reason,
    }
}

/// Loads and validates every record in the records file.
///
/// A missing file is an empty record list.
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but cannot be read
/// - The file contains invalid YAML or entries of the wrong shape
/// - An entry fails field validation
/// - Two entries are the same application
pub fn load_records(path: &str) -> Result<Vec<Record>> {
    if !Path::exists(Path::new(path)) {
        return Ok(Vec::new());
    }

    let mut content = String::new();
    get_reader(path)?
        .read_to_string(&mut content)
        .map_err(|e| Error::io_error(FILE_DESCRIPTION.to_string(), path.to_string(), e))?;

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let entries: Vec<RecordEntry> = serde_yaml::from_str(&content).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            FILE_DESCRIPTION.to_string(),
            path.to_string(),
            e,
        )
    })?;

    let mut names = HashSet::new();
    let mut records = Vec::new();

    for entry in entries {
        let record = entry
            .to_record()
            .map_err(|e| corrupt(path, format!("`{}`: {e}", entry.name)))?;

        if !names.insert(record.name.clone()) {
            return Err(corrupt(
                path,
                format!("`{}` appears more than once", record.name),
            ));
        }

        records.push(record);
    }

    Ok(records)
}

/// Writes every record to the records file, creating its directory if needed.
///
/// # Errors
///
/// Returns an error if:
/// - The directory or file cannot be created or written to
/// - Serialization to YAML fails
pub fn write_records(path: &str, records: &[Record]) -> Result<()> {
    let io_error =
        |e: std::io::Error| Error::io_error(FILE_DESCRIPTION.to_string(), path.to_string(), e);

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
    }

    let file = File::create(path).map_err(io_error)?;
    let entries: Vec<RecordEntry> = records.iter().map(RecordEntry::from).collect();

    serde_yaml::to_writer(file, &entries).map_err(|e| {
        Error::yaml_error(
            "writing".to_string(),
            FILE_DESCRIPTION.to_string(),
            path.to_string(),
            e,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn write_temp(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{content}").unwrap();
        temp_file
    }

    #[test]
    fn test_missing_file_is_empty() {
        let records = load_records("/this/path/does/not/exist.yml").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_empty_file_is_empty() {
        let temp_file = write_temp("");
        let records = load_records(temp_file.path().to_str().unwrap()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_load_valid_entries() {
        let temp_file = write_temp(
            r#"
- name: "Acme"
  phone: "+65 6123 4567"
  status: "HR_Interview"
  tags: ["remote"]
- name: "Globex"
"#,
        );

        let records = load_records(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].status, Status::HrInterview);
        assert_eq!(records[0].tags.len(), 1);
        assert_eq!(records[1], Record::named(Name::parse("Globex").unwrap()));
    }

    #[test]
    fn test_invalid_entry_is_corrupt() {
        let temp_file = write_temp("- name: \"Acme\"\n  email: \"not-an-email\"\n");
        let result = load_records(temp_file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::CorruptRecord { .. })));
    }

    #[test]
    fn test_duplicate_entries_are_corrupt() {
        let temp_file = write_temp("- name: \"Acme\"\n- name: \"ACME\"\n");
        let result = load_records(temp_file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::CorruptRecord { .. })));
    }

    #[test]
    fn test_invalid_yaml() {
        let temp_file = write_temp("invalid: yaml: content: [");
        let result = load_records(temp_file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::Yaml { .. })));
    }

    #[test]
    fn test_write_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("applications.yml");
        let path = path.to_str().unwrap();

        let mut record = Record::named(Name::parse("Initech").unwrap());
        record.remark = Remark::parse_optional("TPS reports");
        record.status = Status::Offer;

        write_records(path, &[record.clone()]).unwrap();
        assert_eq!(load_records(path).unwrap(), vec![record]);
    }
}
