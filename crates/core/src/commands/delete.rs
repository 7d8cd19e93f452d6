use itertools::Itertools;
use log::{info, warn};

use crate::confirmation::Confirmation;
use crate::error::Result;
use crate::index::{Index, IndexList};
use crate::model::RecordCollection;
use crate::record::Record;

use super::{check_bounds, CommandResult};

pub const COMMAND_WORD: &str = "delete";

pub const MESSAGE_USAGE: &str = "delete: Deletes the applications at the given positions \
of the displayed list. Positions are single numbers or START-END ranges, separated either \
by spaces or by commas.\n\
Parameters: INDEX|START-END [INDEX|START-END]... or INDEX|START-END[,INDEX|START-END]...\n\
Example: delete 1 3-4\n\
Example: delete 1,3-4";

pub const CONFIRMATION_TITLE: &str = "Delete applications";

pub const MESSAGE_CANCELLED: &str = "Deletion cancelled.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    indices: IndexList,
}

impl DeleteCommand {
    #[must_use]
    pub fn new(indices: IndexList) -> Self {
        Self { indices }
    }

    #[must_use]
    pub fn indices(&self) -> &IndexList {
        &self.indices
    }

    pub(crate) fn execute(
        &self,
        model: &mut dyn RecordCollection,
        confirmation: &dyn Confirmation,
    ) -> Result<CommandResult> {
        let targets: Vec<(Index, Record)> = {
            let displayed = model.displayed();
            check_bounds(&self.indices, displayed.len())?;

            self.indices
                .iter()
                .sorted()
                .map(|index| (*index, displayed[index.zero_based()].clone()))
                .collect()
        };

        let listing = targets
            .iter()
            .map(|(index, record)| format!("{index}. {}", record.name))
            .join("\n");
        let header = format!("Delete {} application(s)?", targets.len());

        if !confirmation.confirm(CONFIRMATION_TITLE, &header, &listing) {
            warn!("Deletion of {} application(s) declined", targets.len());
            return Ok(CommandResult::cancelled(MESSAGE_CANCELLED));
        }

        // Highest position first so earlier removals cannot shift later ones.
        for (index, record) in targets.iter().rev() {
            info!("Deleting application {} at position {}", record.name, index);
            model.remove(record);
        }

        Ok(CommandResult::completed(format!(
            "Deleted {} application(s):\n{listing}",
            targets.len()
        )))
    }
}
