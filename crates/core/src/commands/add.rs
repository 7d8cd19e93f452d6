use log::warn;

use crate::error::{Error, Result};
use crate::model::RecordCollection;
use crate::record::Record;

use super::CommandResult;

pub const COMMAND_WORD: &str = "add";

pub const MESSAGE_USAGE: &str = "add: Adds an application. \
Parameters: n/NAME [p/PHONE] [e/EMAIL] [a/ADDRESS] [r/REMARK] [s/STATUS] [t/TAG]...\n\
Example: add n/Acme Corp p/+65 6123 4567 e/careers@acme.com s/applied t/remote";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    record: Record,
}

impl AddCommand {
    #[must_use]
    pub fn new(record: Record) -> Self {
        Self { record }
    }

    #[must_use]
    pub fn record(&self) -> &Record {
        &self.record
    }

    pub(crate) fn execute(&self, model: &mut dyn RecordCollection) -> Result<CommandResult> {
        if model.exists(&self.record.name) {
            warn!("Refusing to add duplicate application `{}`", self.record.name);
            return Err(Error::DuplicateRecord(self.record.name.to_string()));
        }

        model.insert(self.record.clone());
        Ok(CommandResult::completed(format!(
            "New application added: {}",
            self.record
        )))
    }
}
