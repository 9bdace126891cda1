use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, VocabError};
use crate::index::index_entries;
use crate::store::backend::StorageBackend;
use crate::store::WordStore;

/// Case-insensitive substring search over term, translation and notes.
///
/// Matches keep the visible index they have in the full list.
pub fn run<B: StorageBackend>(store: &WordStore<B>, query: &str) -> Result<CmdResult> {
    if query.trim().is_empty() {
        return Err(VocabError::Validation("The search query cannot be empty".into()));
    }
    let needle = query.to_lowercase();

    let matches: Vec<_> = index_entries(store.entries())
        .into_iter()
        .filter(|dp| dp.entry.matches(&needle))
        .collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!("No words match '{}'", query)));
    }
    Ok(result.with_listed_entries(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::NewEntry;
    use crate::store::InMemoryStore;

    fn store() -> InMemoryStore {
        let mut store = InMemoryStore::in_memory();
        let drafts = vec![
            NewEntry::new("Running").with_translation("跑步"),
            NewEntry::new("walk").with_example("I run to the shop"),
            NewEntry::new("jog").with_notes("a slow RUN"),
            NewEntry::new("sprint").with_translation("冲刺"),
        ];
        for draft in drafts {
            add::run(&mut store, draft).unwrap();
        }
        store
    }

    #[test]
    fn empty_query_is_rejected() {
        let store = store();
        assert!(matches!(run(&store, ""), Err(VocabError::Validation(_))));
        assert!(matches!(run(&store, "  "), Err(VocabError::Validation(_))));
    }

    #[test]
    fn matches_term_translation_and_notes_but_not_example() {
        let result = run(&store(), "run").unwrap();
        let found: Vec<_> = result
            .listed_entries
            .iter()
            .map(|d| (d.index.get(), d.entry.term.as_str()))
            .collect();
        assert_eq!(found, vec![(1, "Running"), (3, "jog")]);
    }

    #[test]
    fn matches_translation_text() {
        let result = run(&store(), "冲刺").unwrap();
        assert_eq!(result.listed_entries.len(), 1);
        assert_eq!(result.listed_entries[0].entry.term, "sprint");
    }

    #[test]
    fn no_matches_is_a_notice() {
        let result = run(&store(), "swim").unwrap();
        assert!(result.listed_entries.is_empty());
        assert_eq!(result.messages[0].content, "No words match 'swim'");
    }
}
