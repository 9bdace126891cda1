use super::codec::LoadReport;
use crate::error::Result;
use crate::model::WordEntry;
use std::path::PathBuf;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `WordStore` handles the "what" (the list, validation, save state).
pub trait StorageBackend {
    /// Load every decodable entry. A missing file is an empty list, not an error.
    fn load(&self) -> Result<LoadReport>;

    /// Replace the stored list with `entries`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save(&self, entries: &[WordEntry]) -> Result<()>;

    /// Where the data lives, for messages. For MemBackend, a virtual path.
    fn location(&self) -> PathBuf;
}
