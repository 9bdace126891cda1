use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{DisplayEntry, DisplayIndex};
use crate::store::backend::StorageBackend;
use crate::store::WordStore;

/// Resolves a visible index to the entry currently at that position.
pub fn run<B: StorageBackend>(store: &WordStore<B>, index: usize) -> Result<CmdResult> {
    let entry = store.resolve(index)?.clone();
    let shown = DisplayEntry {
        index: DisplayIndex::from_position(index - 1),
        entry,
    };
    Ok(CmdResult::default().with_listed_entries(vec![shown]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::error::VocabError;
    use crate::model::NewEntry;
    use crate::store::InMemoryStore;

    #[test]
    fn shows_entry_at_index() {
        let mut store = InMemoryStore::in_memory();
        add::run(&mut store, NewEntry::new("a")).unwrap();
        add::run(&mut store, NewEntry::new("b")).unwrap();

        let result = run(&store, 2).unwrap();
        assert_eq!(result.listed_entries[0].entry.term, "b");
        assert_eq!(result.listed_entries[0].index.get(), 2);
    }

    #[test]
    fn out_of_range_and_empty() {
        let mut store = InMemoryStore::in_memory();
        assert!(matches!(run(&store, 1), Err(VocabError::EmptyList)));

        add::run(&mut store, NewEntry::new("a")).unwrap();
        assert!(matches!(
            run(&store, 3),
            Err(VocabError::Range { index: 3, len: 1 })
        ));
        assert!(matches!(
            run(&store, 0),
            Err(VocabError::Range { index: 0, len: 1 })
        ));
    }
}
