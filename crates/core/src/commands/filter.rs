use crate::filter::RecordFilter;
use crate::model::RecordCollection;

use super::CommandResult;

pub const COMMAND_WORD: &str = "filter";

pub const MESSAGE_USAGE: &str = "filter: Shows only applications with the given status \
and/or a tag containing any of the given keywords (case-insensitive).\n\
Parameters: [s/STATUS] [t/KEYWORD]...\n\
Example: filter s/applied t/remote t/intern";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCommand {
    filter: RecordFilter,
}

impl FilterCommand {
    #[must_use]
    pub fn new(filter: RecordFilter) -> Self {
        Self { filter }
    }

    #[must_use]
    pub fn filter(&self) -> &RecordFilter {
        &self.filter
    }

    pub(crate) fn execute(&self, model: &mut dyn RecordCollection) -> CommandResult {
        model.set_display_filter(self.filter.clone());
        let shown = model.displayed().len();

        CommandResult::completed(format!(
            "{shown} application(s) listed for {}.",
            self.filter
        ))
    }
}
