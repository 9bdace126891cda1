use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_entries;
use crate::store::backend::StorageBackend;
use crate::store::WordStore;

pub fn run<B: StorageBackend>(store: &WordStore<B>) -> Result<CmdResult> {
    let listed = index_entries(store.entries());
    let mut result = CmdResult::default().with_listed_entries(listed);
    if store.is_empty() {
        result.add_message(CmdMessage::info("The word list is empty"));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, remove};
    use crate::model::NewEntry;
    use crate::store::InMemoryStore;

    #[test]
    fn empty_list_gets_a_notice() {
        let store = InMemoryStore::in_memory();
        let result = run(&store).unwrap();
        assert!(result.listed_entries.is_empty());
        assert_eq!(result.messages[0].content, "The word list is empty");
    }

    #[test]
    fn indexes_are_recomputed_after_removal() {
        let mut store = InMemoryStore::in_memory();
        for term in ["a", "b", "c"] {
            add::run(&mut store, NewEntry::new(term)).unwrap();
        }
        let id = store.resolve(1).unwrap().id;
        remove::run(&mut store, &id, true).unwrap();

        let listed = run(&store).unwrap().listed_entries;
        let shown: Vec<_> = listed
            .iter()
            .map(|d| (d.index.get(), d.entry.term.as_str()))
            .collect();
        assert_eq!(shown, vec![(1, "b"), (2, "c")]);
    }
}
