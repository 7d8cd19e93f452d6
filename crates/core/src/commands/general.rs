//! Commands that only steer the shell.

use crate::filter::RecordFilter;
use crate::model::RecordCollection;

use super::CommandResult;

pub const LIST_COMMAND_WORD: &str = "list";
pub const HELP_COMMAND_WORD: &str = "help";
pub const METRICS_COMMAND_WORD: &str = "metrics";
pub const EXIT_COMMAND_WORD: &str = "exit";

pub const LIST_USAGE: &str = "list: Shows all applications.";
pub const HELP_USAGE: &str = "help: Shows how to use every command.";
pub const METRICS_USAGE: &str = "metrics: Shows how many applications are in each stage.";
pub const EXIT_USAGE: &str = "exit: Saves and leaves the program.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub(crate) fn execute(self, model: &mut dyn RecordCollection) -> CommandResult {
        model.set_display_filter(RecordFilter::show_all());
        CommandResult::completed("Listed all applications.")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub(crate) fn execute(self) -> CommandResult {
        CommandResult {
            show_help: true,
            ..CommandResult::completed("Showing help.")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsCommand;

impl MetricsCommand {
    pub(crate) fn execute(self) -> CommandResult {
        CommandResult {
            show_metrics: true,
            ..CommandResult::completed("Showing application metrics.")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub(crate) fn execute(self) -> CommandResult {
        CommandResult {
            exit: true,
            ..CommandResult::completed("Exiting.")
        }
    }
}
