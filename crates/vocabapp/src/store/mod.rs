//! # Storage Layer
//!
//! The store owns the word list for the whole session and keeps the CSV file
//! in step with it.
//!
//! ## Layers
//!
//! - [`word_store::WordStore`]: the "what". The ordered list, term uniqueness,
//!   field validation, and the unsaved-changes flag.
//! - [`backend::StorageBackend`]: the "how". Loads and saves a whole list.
//! - [`codec`]: the on-disk format, shared by every backend.
//!
//! ## Write Policy
//!
//! Every successful mutation is followed by a full rewrite of the file. There
//! is no append or patch path. The filesystem backend writes to a temporary
//! file next to the target and renames it into place, so a crash mid-write
//! leaves the previous file intact.
//!
//! If the rewrite fails, the mutation is *not* rolled back. The store reports
//! [`word_store::SaveStatus::Failed`] and remembers it has unsaved changes;
//! the next successful save clears that state.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production, a single CSV file.
//! - [`mem_backend::MemBackend`]: testing, keeps the encoded bytes in memory
//!   and can simulate write failures.
//!
//! ## Storage Format
//!
//! ```text
//! words.csv    # one word per line, nine columns, no header
//! ```

pub mod backend;
pub mod codec;
pub mod fs_backend;
pub mod mem_backend;
pub mod word_store;

pub use word_store::{Change, SaveStatus, WordStore};

/// Production store: the CSV file on disk.
pub type FileStore = WordStore<fs_backend::FsBackend>;

/// Test store: no filesystem involved.
pub type InMemoryStore = WordStore<mem_backend::MemBackend>;
