use crate::commands::{CmdMessage, CmdResult};
use crate::index::{DisplayEntry, DisplayIndex};
use crate::store::{Change, SaveStatus};

pub fn display_change(change: &Change) -> DisplayEntry {
    DisplayEntry {
        entry: change.entry.clone(),
        index: DisplayIndex::from_position(change.position),
    }
}

/// Turns a mutation into a result: the affected entry, the success message,
/// and a warning if the list could not be written.
pub fn change_result(change: Change, success: String) -> CmdResult {
    let mut result = CmdResult::default().with_affected_entries(vec![display_change(&change)]);
    result.add_message(CmdMessage::success(success));
    if let SaveStatus::Failed(reason) = &change.save {
        result.add_message(CmdMessage::warning(format!(
            "The change is kept for this session but was not saved: {}",
            reason
        )));
    }
    result
}
