use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::WordStore;
use uuid::Uuid;

use super::helpers::change_result;

/// Removes the entry with `id`. A declined confirmation is a no-op.
pub fn run<B: StorageBackend>(
    store: &mut WordStore<B>,
    id: &Uuid,
    confirmed: bool,
) -> Result<CmdResult> {
    if !confirmed {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Removal cancelled"));
        return Ok(result);
    }

    let change = store.remove(id)?;
    let message = format!("Word removed: {}", change.entry.term);
    Ok(change_result(change, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::error::VocabError;
    use crate::model::NewEntry;
    use crate::store::InMemoryStore;

    fn seeded(terms: &[&str]) -> InMemoryStore {
        let mut store = InMemoryStore::in_memory();
        for term in terms {
            add::run(&mut store, NewEntry::new(*term)).unwrap();
        }
        store
    }

    #[test]
    fn removes_and_keeps_relative_order() {
        let mut store = seeded(&["a", "b", "c"]);
        let id = store.resolve(1).unwrap().id;

        let result = run(&mut store, &id, true).unwrap();
        assert_eq!(result.affected_entries[0].entry.term, "a");
        assert_eq!(result.affected_entries[0].index.get(), 1);

        let terms: Vec<_> = store.entries().iter().map(|e| e.term.as_str()).collect();
        assert_eq!(terms, vec!["b", "c"]);
    }

    #[test]
    fn declined_confirmation_changes_nothing() {
        let mut store = seeded(&["a"]);
        let id = store.resolve(1).unwrap().id;

        let result = run(&mut store, &id, false).unwrap();
        assert!(result.affected_entries.is_empty());
        assert_eq!(result.messages[0].content, "Removal cancelled");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn stale_id_is_not_found() {
        let mut store = seeded(&["a"]);
        let err = run(&mut store, &Uuid::new_v4(), true).unwrap_err();
        assert!(matches!(err, VocabError::NotFound(_)));
    }
}
