use super::backend::StorageBackend;
use super::codec::{self, LoadReport};
use crate::error::{Result, VocabError};
use crate::model::WordEntry;
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn persist_error(&self, source: std::io::Error) -> VocabError {
        VocabError::Persist {
            path: self.path.clone(),
            source,
        }
    }
}

impl StorageBackend for FsBackend {
    fn load(&self) -> Result<LoadReport> {
        if !self.path.exists() {
            return Ok(LoadReport::default());
        }
        let file = fs::File::open(&self.path).map_err(VocabError::Io)?;
        codec::decode(BufReader::new(file))
    }

    fn save(&self, entries: &[WordEntry]) -> Result<()> {
        let dir = self.parent_dir();
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| self.persist_error(e))?;
        }

        let content = codec::encode_to_vec(entries)?;

        // Atomic write
        let tmp_path = dir.join(format!(".words-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(|e| self.persist_error(e))?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(self.persist_error(e));
        }

        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}
