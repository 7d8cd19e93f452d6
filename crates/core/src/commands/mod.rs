//! Executable commands.
//!
//! A [`Command`] is built by the parser already holding validated input.
//! Running it against a [`RecordCollection`] performs the remaining checks
//! that need the live list (bounds, identity collisions) before any
//! mutation, and produces a [`CommandResult`] or an error.

pub mod add;
pub mod delete;
pub mod edit;
pub mod filter;
pub mod general;
pub mod result;
pub mod status;

use log::info;

use crate::confirmation::Confirmation;
use crate::error::{Error, Result};
use crate::index::{out_of_bounds, IndexList};
use crate::model::RecordCollection;

// Re-exports for convenience
pub use add::AddCommand;
pub use delete::DeleteCommand;
pub use edit::{BatchEditCommand, EditCommand};
pub use filter::FilterCommand;
pub use general::{ExitCommand, HelpCommand, ListCommand, MetricsCommand};
pub use result::{CommandResult, Outcome};
pub use status::StatusCommand;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Edit(EditCommand),
    BatchEdit(BatchEditCommand),
    Delete(DeleteCommand),
    Filter(FilterCommand),
    Status(StatusCommand),
    List(ListCommand),
    Help(HelpCommand),
    Metrics(MetricsCommand),
    Exit(ExitCommand),
}

impl Command {
    /// Runs the command against `model`.
    ///
    /// # Errors
    ///
    /// Returns an out-of-bounds error when an index does not fit the
    /// displayed list and [`Error::DuplicateRecord`] when the result would
    /// collide with another record. Nothing is mutated on error.
    pub fn execute(
        &self,
        model: &mut dyn RecordCollection,
        confirmation: &dyn Confirmation,
    ) -> Result<CommandResult> {
        info!("Executing {:?}", self);

        match self {
            Command::Add(command) => command.execute(model),
            Command::Edit(command) => command.execute(model),
            Command::BatchEdit(command) => command.execute(model),
            Command::Delete(command) => command.execute(model, confirmation),
            Command::Filter(command) => Ok(command.execute(model)),
            Command::Status(command) => command.execute(model),
            Command::List(command) => Ok(command.execute(model)),
            Command::Help(command) => Ok(command.execute()),
            Command::Metrics(command) => Ok(command.execute()),
            Command::Exit(command) => Ok(command.execute()),
        }
    }

    /// Whether a completed run of this command can change stored records.
    #[must_use]
    pub fn modifies_records(&self) -> bool {
        matches!(
            self,
            Command::Add(_)
                | Command::Edit(_)
                | Command::BatchEdit(_)
                | Command::Delete(_)
                | Command::Status(_)
        )
    }
}

/// Fails unless every index fits a displayed list of `size` entries.
pub(crate) fn check_bounds(indices: &IndexList, size: usize) -> Result<()> {
    let invalid = out_of_bounds(indices, size);

    if invalid.is_empty() {
        Ok(())
    } else if size == 0 {
        Err(Error::EmptyList(invalid))
    } else {
        Err(Error::IndexOutOfBounds {
            indices: invalid,
            size,
        })
    }
}
