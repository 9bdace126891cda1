use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::NewEntry;
use crate::store::backend::StorageBackend;
use crate::store::WordStore;

use super::helpers::change_result;

pub fn run<B: StorageBackend>(store: &mut WordStore<B>, draft: NewEntry) -> Result<CmdResult> {
    let change = store.add(draft)?;
    let message = format!("Word added: {}", change.entry.term);
    Ok(change_result(change, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{list, MessageLevel};
    use crate::error::VocabError;
    use crate::store::InMemoryStore;

    #[test]
    fn adds_word_at_the_end() {
        let mut store = InMemoryStore::in_memory();
        run(&mut store, NewEntry::new("run")).unwrap();
        let result = run(&mut store, NewEntry::new("walk")).unwrap();

        assert_eq!(result.affected_entries[0].index.get(), 2);
        assert!(matches!(result.messages[0].level, MessageLevel::Success));

        let listed = list::run(&store).unwrap().listed_entries;
        assert_eq!(listed[1].entry.term, "walk");
    }

    #[test]
    fn run_scenario_shows_difficulty_and_rejects_repeat() {
        let mut store = InMemoryStore::in_memory();
        let draft = NewEntry::new("run").with_translation("跑").with_difficulty(3);
        run(&mut store, draft).unwrap();

        let listed = list::run(&store).unwrap().listed_entries;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].entry.difficulty, 3);

        let err = run(&mut store, NewEntry::new("run").with_translation("奔跑")).unwrap_err();
        assert!(matches!(err, VocabError::Duplicate(_)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].translation, "跑");
    }

    #[test]
    fn empty_term_is_rejected() {
        let mut store = InMemoryStore::in_memory();
        let err = run(&mut store, NewEntry::new("")).unwrap_err();
        assert!(matches!(err, VocabError::Validation(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn failed_save_is_a_warning_not_an_error() {
        let mut store = InMemoryStore::in_memory();
        store.backend().set_simulate_write_error(true);

        let result = run(&mut store, NewEntry::new("run")).unwrap();
        assert!(matches!(result.messages[1].level, MessageLevel::Warning));
        assert_eq!(store.len(), 1);
    }
}
