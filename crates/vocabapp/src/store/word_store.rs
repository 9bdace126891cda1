use super::backend::StorageBackend;
use super::codec::{LoadReport, SkippedRow};
use crate::error::{Result, VocabError};
use crate::model::{Field, NewEntry, WordEntry};
use uuid::Uuid;

/// Outcome of the full rewrite that follows every mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    Saved,
    /// The mutation stands in memory; the reason the write failed.
    Failed(String),
}

impl SaveStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveStatus::Saved)
    }
}

/// A successful mutation: the entry as it is now, where it was, and whether
/// the list made it to disk.
#[derive(Debug, Clone)]
pub struct Change {
    pub entry: WordEntry,
    pub position: usize,
    pub save: SaveStatus,
}

/// The word list and the backend it is persisted to.
///
/// Every successful mutation rewrites the whole list. A failed rewrite does
/// not roll the mutation back: the store flags unsaved changes until a later
/// save (any mutation or an explicit [`WordStore::save`]) succeeds.
pub struct WordStore<B: StorageBackend> {
    pub(crate) backend: B,
    entries: Vec<WordEntry>,
    skipped: Vec<SkippedRow>,
    unsaved: bool,
}

impl<B: StorageBackend> WordStore<B> {
    pub fn open(backend: B) -> Result<Self> {
        let report = backend.load()?;
        Ok(Self::from_report(backend, report))
    }

    pub(crate) fn from_report(backend: B, report: LoadReport) -> Self {
        tracing::debug!(
            location = %backend.location().display(),
            entries = report.entries.len(),
            skipped = report.skipped.len(),
            "word list loaded"
        );
        for row in &report.skipped {
            tracing::warn!(line = row.line, reason = %row.reason, "skipping unreadable row");
        }
        Self {
            backend,
            entries: report.entries,
            skipped: report.skipped,
            unsaved: false,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows dropped while loading.
    pub fn skipped_rows(&self) -> &[SkippedRow] {
        &self.skipped
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Exact, case-sensitive term lookup.
    pub fn find_by_term(&self, term: &str) -> Option<&WordEntry> {
        self.entries.iter().find(|e| e.term == term)
    }

    pub fn position_of(&self, id: &Uuid) -> Option<usize> {
        self.entries.iter().position(|e| &e.id == id)
    }

    pub fn get(&self, id: &Uuid) -> Result<&WordEntry> {
        self.entries
            .iter()
            .find(|e| &e.id == id)
            .ok_or(VocabError::NotFound(*id))
    }

    /// Maps a 1-based visible index onto the entry currently at that position.
    pub fn resolve(&self, index: usize) -> Result<&WordEntry> {
        if self.entries.is_empty() {
            return Err(VocabError::EmptyList);
        }
        index
            .checked_sub(1)
            .and_then(|position| self.entries.get(position))
            .ok_or(VocabError::Range {
                index,
                len: self.entries.len(),
            })
    }

    pub fn add(&mut self, draft: NewEntry) -> Result<Change> {
        if self.find_by_term(&draft.term).is_some() {
            return Err(VocabError::Duplicate(draft.term));
        }
        let entry = WordEntry::from_new(draft)?;

        self.entries.push(entry.clone());
        tracing::debug!(term = %entry.term, "word added");
        Ok(Change {
            entry,
            position: self.entries.len() - 1,
            save: self.persist(),
        })
    }

    pub fn remove(&mut self, id: &Uuid) -> Result<Change> {
        if self.entries.is_empty() {
            return Err(VocabError::EmptyList);
        }
        let position = self.position_of(id).ok_or(VocabError::NotFound(*id))?;
        let entry = self.entries.remove(position);

        tracing::debug!(term = %entry.term, position, "word removed");
        Ok(Change {
            entry,
            position,
            save: self.persist(),
        })
    }

    /// Applies one field edit. Term uniqueness is not re-checked on edit.
    pub fn update(&mut self, id: &Uuid, field: Field, raw: &str) -> Result<Change> {
        if self.entries.is_empty() {
            return Err(VocabError::EmptyList);
        }
        let position = self.position_of(id).ok_or(VocabError::NotFound(*id))?;
        self.entries[position].set_field(field, raw)?;

        let entry = self.entries[position].clone();
        tracing::debug!(term = %entry.term, field = %field, "word updated");
        Ok(Change {
            entry,
            position,
            save: self.persist(),
        })
    }

    /// Rewrites the backing file from the current list.
    pub fn save(&mut self) -> Result<()> {
        self.backend.save(&self.entries)?;
        self.unsaved = false;
        tracing::debug!(
            location = %self.backend.location().display(),
            entries = self.entries.len(),
            "word list saved"
        );
        Ok(())
    }

    fn persist(&mut self) -> SaveStatus {
        match self.save() {
            Ok(()) => SaveStatus::Saved,
            Err(e) => {
                self.unsaved = true;
                tracing::warn!(error = %e, "changes kept in memory only");
                SaveStatus::Failed(e.to_string())
            }
        }
    }
}
