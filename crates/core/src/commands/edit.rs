use itertools::Itertools;
use log::{info, warn};

use crate::descriptor::EditDescriptor;
use crate::error::{Error, Result};
use crate::index::{Index, IndexList};
use crate::model::RecordCollection;
use crate::record::Record;

use super::{check_bounds, CommandResult};

pub const COMMAND_WORD: &str = "edit";

pub const MESSAGE_USAGE: &str = "edit: Edits the applications at the given positions of \
the displayed list. Fields that are not given keep their value; a blank phone, email, \
address or remark clears it, and `t/` on its own clears all tags.\n\
Parameters: INDEX[,INDEX|START-END]... [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [r/REMARK] \
[s/STATUS] [t/TAG]...\n\
Example: edit 1 p/91234567 e/recruiting@acme.com\n\
Example: edit 1,3-4 s/rejected";

/// Edits the record at one position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditDescriptor,
}

impl EditCommand {
    #[must_use]
    pub fn new(index: Index, descriptor: EditDescriptor) -> Self {
        Self { index, descriptor }
    }

    #[must_use]
    pub fn index(&self) -> Index {
        self.index
    }

    #[must_use]
    pub fn descriptor(&self) -> &EditDescriptor {
        &self.descriptor
    }

    pub(crate) fn execute(&self, model: &mut dyn RecordCollection) -> Result<CommandResult> {
        let target = {
            let displayed = model.displayed();
            check_bounds(&IndexList::from([self.index]), displayed.len())?;
            displayed[self.index.zero_based()].clone()
        };

        let edited = self.descriptor.apply_to(&target);

        if !target.is_same(&edited) && model.exists(&edited.name) {
            warn!("Edit would duplicate application `{}`", edited.name);
            return Err(Error::DuplicateRecord(edited.name.to_string()));
        }

        info!("Editing application {} at position {}", target.name, self.index);
        model.replace(&target, edited.clone());

        Ok(CommandResult::completed(format!(
            "Edited application: {edited}"
        )))
    }
}

/// Applies one descriptor to several positions, all or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEditCommand {
    indices: IndexList,
    descriptor: EditDescriptor,
}

impl BatchEditCommand {
    #[must_use]
    pub fn new(indices: IndexList, descriptor: EditDescriptor) -> Self {
        Self {
            indices,
            descriptor,
        }
    }

    #[must_use]
    pub fn indices(&self) -> &IndexList {
        &self.indices
    }

    #[must_use]
    pub fn descriptor(&self) -> &EditDescriptor {
        &self.descriptor
    }

    pub(crate) fn execute(&self, model: &mut dyn RecordCollection) -> Result<CommandResult> {
        let targets: Vec<(Index, Record)> = {
            let displayed = model.displayed();
            check_bounds(&self.indices, displayed.len())?;

            self.indices
                .iter()
                .sorted()
                .map(|index| (*index, displayed[index.zero_based()].clone()))
                .collect()
        };

        let edits: Vec<(Record, Record)> = targets
            .iter()
            .map(|(_, target)| (target.clone(), self.descriptor.apply_to(target)))
            .collect();

        ensure_no_collisions(model, &edits)?;

        for (target, edited) in &edits {
            model.replace(target, edited.clone());
        }

        info!("Edited {} applications in one batch", edits.len());

        let listing = targets
            .iter()
            .zip(&edits)
            .map(|((index, _), (_, edited))| format!("{index}. {edited}"))
            .join("\n");

        Ok(CommandResult::completed(format!(
            "Edited {} application(s):\n{listing}",
            edits.len()
        )))
    }
}

/// Checks that replacing every target with its edit leaves all identities
/// unique.
///
/// An edited record may take an identity held by one of the targets, since
/// that target is being replaced too; any clash among the edits themselves is
/// then caught by the pairwise check.
fn ensure_no_collisions(model: &dyn RecordCollection, edits: &[(Record, Record)]) -> Result<()> {
    for (i, (target, edited)) in edits.iter().enumerate() {
        let clashes_with_untouched = !target.is_same(edited)
            && model.exists(&edited.name)
            && !edits.iter().any(|(other, _)| other.is_same(edited));

        let clashes_with_batch = edits[i + 1..]
            .iter()
            .any(|(_, other_edited)| other_edited.is_same(edited));

        if clashes_with_untouched || clashes_with_batch {
            warn!("Batch edit would duplicate application `{}`", edited.name);
            return Err(Error::DuplicateRecord(edited.name.to_string()));
        }
    }

    Ok(())
}
