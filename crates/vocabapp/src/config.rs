//! # Configuration
//!
//! Vocab configuration is loaded with [`confique`] from a TOML file, with
//! environment variables layered on top.
//!
//! ## Resolution Order
//!
//! 1. **Command-line flags** (applied by the binary after loading)
//! 2. **Environment variables**: `VOCAB_WORD_FILE`, `VOCAB_UI_MODE`
//! 3. **Config file**: `vocab.toml` in the working directory by default
//! 4. **Compiled defaults**
//!
//! A missing config file is not an error; a config file that exists but does
//! not parse is, and aborts startup.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `word_file_path` | `words.csv` | CSV file holding the word list |
//! | `ui_mode` | `cli` | `cli` for the line menu, `tui` for the cursor menu |

use crate::error::Result;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "vocab.toml";
pub const DEFAULT_WORD_FILE: &str = "words.csv";

/// Configuration for vocab, stored in `vocab.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VocabConfig {
    /// Path of the CSV file holding the word list.
    #[config(default = "words.csv", env = "VOCAB_WORD_FILE")]
    pub word_file_path: String,

    /// Which front end to run: "cli" or "tui".
    #[config(default = "cli", env = "VOCAB_UI_MODE")]
    pub ui_mode: String,
}

impl VocabConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let mut builder = VocabConfig::builder().env();
        if path.exists() {
            builder = builder.file(path);
        }
        let config = builder.load()?;
        tracing::debug!(config_file = %path.display(), ?config, "configuration loaded");
        Ok(config)
    }

    pub fn word_file(&self) -> PathBuf {
        PathBuf::from(&self.word_file_path)
    }

    /// `None` when the configured mode is not one vocab knows.
    pub fn ui_mode(&self) -> Option<UiMode> {
        UiMode::parse(&self.ui_mode)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Numbered menu read line by line.
    Cli,
    /// Menu navigated with the cursor keys.
    Tui,
}

impl UiMode {
    pub fn parse(s: &str) -> Option<UiMode> {
        match s.trim().to_lowercase().as_str() {
            "cli" | "cli mode" => Some(UiMode::Cli),
            "tui" | "tui mode" => Some(UiMode::Tui),
            _ => None,
        }
    }
}
