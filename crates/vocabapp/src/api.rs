//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the
//! single entry point for all vocab operations, regardless of the front end.
//!
//! ## Role and Responsibilities
//!
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs**: visible indexes are resolved to entry ids here
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## Index vs Id Methods
//!
//! `*_at` methods take the 1-based index a user typed and resolve it against
//! the current list *in the same call*. Front ends that ask the user something
//! between picking an entry and acting on it (a yes/no, a field number) should
//! call [`VocabApi::view_word`] first, keep the returned entry's id, and use
//! the id-based methods afterwards.
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `VocabApi<FsBackend>`
//! - Testing: `VocabApi<MemBackend>`

use crate::commands;
use crate::error::Result;
use crate::model::{Field, NewEntry, WordEntry};
use crate::store::backend::StorageBackend;
use crate::store::codec::SkippedRow;
use crate::store::WordStore;
use uuid::Uuid;

/// The main API facade for vocab operations.
pub struct VocabApi<B: StorageBackend> {
    store: WordStore<B>,
}

impl<B: StorageBackend> VocabApi<B> {
    pub fn new(store: WordStore<B>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &WordStore<B> {
        &self.store
    }

    pub fn add_word(&mut self, draft: NewEntry) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn remove_word(&mut self, id: &Uuid, confirmed: bool) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, id, confirmed)
    }

    pub fn remove_at(&mut self, index: usize, confirmed: bool) -> Result<commands::CmdResult> {
        let id = self.store.resolve(index)?.id;
        commands::remove::run(&mut self.store, &id, confirmed)
    }

    pub fn update_word(
        &mut self,
        id: &Uuid,
        field: Field,
        value: &str,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, field, value)
    }

    pub fn update_at(
        &mut self,
        index: usize,
        field: Field,
        value: &str,
    ) -> Result<commands::CmdResult> {
        let id = self.store.resolve(index)?.id;
        commands::update::run(&mut self.store, &id, field, value)
    }

    pub fn list_words(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn search_words(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, query)
    }

    pub fn view_word(&self, index: usize) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, index)
    }

    pub fn find_by_term(&self, term: &str) -> Option<&WordEntry> {
        self.store.find_by_term(term)
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.store.has_unsaved_changes()
    }

    /// Retries writing the list, e.g. before exiting with unsaved changes.
    pub fn save(&mut self) -> Result<()> {
        self.store.save()
    }

    pub fn skipped_rows(&self) -> &[SkippedRow] {
        self.store.skipped_rows()
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VocabError;
    use crate::store::InMemoryStore;

    fn api(terms: &[&str]) -> VocabApi<crate::store::mem_backend::MemBackend> {
        let mut api = VocabApi::new(InMemoryStore::in_memory());
        for term in terms {
            api.add_word(NewEntry::new(*term)).unwrap();
        }
        api
    }

    #[test]
    fn remove_at_resolves_current_position() {
        let mut api = api(&["a", "b", "c"]);
        api.remove_at(2, true).unwrap();
        let result = api.remove_at(2, true).unwrap();
        assert_eq!(result.affected_entries[0].entry.term, "c");
        assert_eq!(api.store().len(), 1);
    }

    #[test]
    fn remove_at_out_of_range() {
        let mut api = api(&["a"]);
        assert!(matches!(
            api.remove_at(5, true),
            Err(VocabError::Range { index: 5, len: 1 })
        ));
    }

    #[test]
    fn id_survives_shifting_positions() {
        let mut api = api(&["a", "b", "c"]);
        let picked = api.view_word(3).unwrap().listed_entries[0].entry.id;

        api.remove_at(1, true).unwrap();
        api.update_word(&picked, Field::Notes, "still me").unwrap();

        assert_eq!(api.store().resolve(2).unwrap().notes, "still me");
    }

    #[test]
    fn update_at_dispatches_field() {
        let mut api = api(&["a"]);
        api.update_at(1, Field::Translation, "ay").unwrap();
        assert_eq!(api.find_by_term("a").unwrap().translation, "ay");
    }

    #[test]
    fn search_and_list_dispatch() {
        let api = api(&["apple", "banana"]);
        assert_eq!(api.list_words().unwrap().listed_entries.len(), 2);
        assert_eq!(api.search_words("NAN").unwrap().listed_entries.len(), 1);
    }

    #[test]
    fn save_retry_clears_unsaved_flag() {
        let mut api = api(&[]);
        api.store().backend().set_simulate_write_error(true);
        api.add_word(NewEntry::new("run")).unwrap();
        assert!(api.has_unsaved_changes());

        api.store().backend().set_simulate_write_error(false);
        api.save().unwrap();
        assert!(!api.has_unsaved_changes());
    }
}
