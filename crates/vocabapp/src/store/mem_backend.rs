use super::backend::StorageBackend;
use super::codec::{self, LoadReport};
use super::word_store::WordStore;
use crate::error::{Result, VocabError};
use crate::model::WordEntry;
use std::cell::RefCell;
use std::io;
use std::path::PathBuf;

const MEMORY_PATH: &str = "memory://words.csv";

/// In-memory storage backend for testing.
///
/// Keeps the encoded CSV bytes rather than the entries, so everything that
/// goes through it also goes through the codec. Uses `RefCell` because vocab
/// is single-threaded and `StorageBackend` takes `&self`.
#[derive(Default)]
pub struct MemBackend {
    data: RefCell<Option<Vec<u8>>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing file contents, e.g. a hand-written CSV.
    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            data: RefCell::new(Some(bytes.into())),
            ..Default::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// The bytes a file backend would have on disk, `None` if never saved.
    pub fn contents(&self) -> Option<Vec<u8>> {
        self.data.borrow().clone()
    }
}

impl StorageBackend for MemBackend {
    fn load(&self) -> Result<LoadReport> {
        match self.data.borrow().as_deref() {
            Some(bytes) => codec::decode(bytes),
            None => Ok(LoadReport::default()),
        }
    }

    fn save(&self, entries: &[WordEntry]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(VocabError::Persist {
                path: self.location(),
                source: io::Error::new(io::ErrorKind::Other, "Simulated write error"),
            });
        }
        let bytes = codec::encode_to_vec(entries)?;
        *self.data.borrow_mut() = Some(bytes);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from(MEMORY_PATH)
    }
}

impl WordStore<MemBackend> {
    /// An empty store that never touches the filesystem.
    pub fn in_memory() -> Self {
        Self::from_report(MemBackend::new(), LoadReport::default())
    }
}
