use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Field;
use crate::store::backend::StorageBackend;
use crate::store::WordStore;
use uuid::Uuid;

use super::helpers::change_result;

pub fn run<B: StorageBackend>(
    store: &mut WordStore<B>,
    id: &Uuid,
    field: Field,
    raw: &str,
) -> Result<CmdResult> {
    let change = store.update(id, field, raw)?;
    let message = format!(
        "Word updated ({}): {}",
        change.position + 1,
        change.entry.term
    );
    Ok(change_result(change, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, view};
    use crate::error::VocabError;
    use crate::model::NewEntry;
    use crate::store::InMemoryStore;

    fn single(draft: NewEntry) -> (InMemoryStore, Uuid) {
        let mut store = InMemoryStore::in_memory();
        add::run(&mut store, draft).unwrap();
        let id = store.resolve(1).unwrap().id;
        (store, id)
    }

    #[test]
    fn updates_free_text_verbatim() {
        let (mut store, id) = single(NewEntry::new("run"));
        run(&mut store, &id, Field::Notes, "  irregular: ran  ").unwrap();

        let shown = view::run(&store, 1).unwrap().listed_entries;
        assert_eq!(shown[0].entry.notes, "  irregular: ran  ");
    }

    #[test]
    fn updates_tags_from_comma_list() {
        let (mut store, id) = single(NewEntry::new("run"));
        run(&mut store, &id, Field::Tags, "verb , motion,verb").unwrap();
        assert_eq!(store.entries()[0].tags, vec!["verb", "motion", "verb"]);
    }

    #[test]
    fn out_of_range_difficulty_is_rejected() {
        let (mut store, id) = single(NewEntry::new("run").with_difficulty(2));

        let err = run(&mut store, &id, Field::Difficulty, "6").unwrap_err();
        assert!(matches!(err, VocabError::Validation(_)));
        assert_eq!(store.entries()[0].difficulty, 2);

        run(&mut store, &id, Field::Difficulty, "5").unwrap();
        assert_eq!(store.entries()[0].difficulty, 5);
    }

    #[test]
    fn empty_term_is_rejected() {
        let (mut store, id) = single(NewEntry::new("run"));
        let err = run(&mut store, &id, Field::Term, "").unwrap_err();
        assert!(matches!(err, VocabError::Validation(_)));
        assert_eq!(store.entries()[0].term, "run");
    }

    #[test]
    fn reports_visible_index() {
        let mut store = InMemoryStore::in_memory();
        add::run(&mut store, NewEntry::new("a")).unwrap();
        add::run(&mut store, NewEntry::new("b")).unwrap();
        let id = store.resolve(2).unwrap().id;

        let result = run(&mut store, &id, Field::Translation, "bee").unwrap();
        assert_eq!(result.messages[0].content, "Word updated (2): b");
        assert_eq!(result.affected_entries[0].index.get(), 2);
    }
}
