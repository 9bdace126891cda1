use crate::store::fs_backend::FsBackend;
use crate::store::FileStore;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // Keeps the directory alive until the test is done
    pub _temp_dir: TempDir,
    pub root: PathBuf,
    pub word_file: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let word_file = root.join("words.csv");
        Self {
            _temp_dir: temp_dir,
            root,
            word_file,
        }
    }

    /// Opens a fresh store on the env's word file, as a new process would.
    pub fn open(&self) -> FileStore {
        FileStore::open(FsBackend::new(&self.word_file)).expect("failed to open store")
    }
}
