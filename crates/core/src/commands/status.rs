use log::info;

use crate::error::Result;
use crate::fields::Status;
use crate::index::{Index, IndexList};
use crate::model::RecordCollection;

use super::{check_bounds, CommandResult};

pub const COMMAND_WORD: &str = "status";

pub const MESSAGE_USAGE: &str = "status: Moves the application at the given position of \
the displayed list to another stage.\n\
Parameters: INDEX s/STATUS\n\
Example: status 2 s/hr-interview";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCommand {
    index: Index,
    status: Status,
}

impl StatusCommand {
    #[must_use]
    pub fn new(index: Index, status: Status) -> Self {
        Self { index, status }
    }

    #[must_use]
    pub fn index(&self) -> Index {
        self.index
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    pub(crate) fn execute(&self, model: &mut dyn RecordCollection) -> Result<CommandResult> {
        let target = {
            let displayed = model.displayed();
            check_bounds(&IndexList::from([self.index]), displayed.len())?;
            displayed[self.index.zero_based()].clone()
        };

        info!(
            "Moving application {} from {} to {}",
            target.name, target.status, self.status
        );
        model.replace(&target, target.with_status(self.status));

        Ok(CommandResult::completed(format!(
            "Updated status of {}: {} -> {}",
            target.name, target.status, self.status
        )))
    }
}
