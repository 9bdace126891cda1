//! # CLI Behavior
//!
//! This is **one possible UI client** for vocab, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting.
//!
//! For the overall architecture, see the crate-level documentation in [`crate`].
//!
//! ## Startup
//!
//! 1. Parse flags, set up logging on stderr (`VOCAB_LOG`, `-v` for debug).
//! 2. Load `vocab.toml` (or `--config`), flags win over its values.
//! 3. Load the word file. Unreadable rows are skipped and reported once.
//! 4. Run the front end named by the UI mode until the user exits.
//! 5. If the last save failed, try once more before exiting.
//!
//! A config file that does not parse, or a word file that cannot be read,
//! aborts with `Error: ...` and exit code 1. An unknown UI mode runs
//! nothing and exits successfully.
//!
//! ## Module Structure
//!
//! - `setup`: argument parsing via clap
//! - `menu`: the line menu (`cli` mode)
//! - `select`: the cursor menu (`tui` mode)
//! - `actions`: the add/remove/edit/list/search transactions both menus share
//! - `prompt`: line prompts over any reader/writer
//! - `render`: output formatting
//! - `styles`: terminal styling

mod actions;
mod menu;
mod prompt;
mod render;
mod select;
pub mod setup;
mod styles;

use anyhow::{Context, Result};
use clap::Parser;
use prompt::Prompter;
use setup::Cli;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};
use vocabapp::api::VocabApi;
use vocabapp::config::{UiMode, VocabConfig, DEFAULT_CONFIG_FILE};
use vocabapp::store::fs_backend::FsBackend;
use vocabapp::store::FileStore;

const LOG_ENV: &str = "VOCAB_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = VocabConfig::load(&config_path)
        .with_context(|| format!("could not load {}", config_path.display()))?;

    let word_file = cli.data_file.clone().unwrap_or_else(|| config.word_file());
    let mode = cli.mode.clone().unwrap_or_else(|| config.ui_mode.clone());

    let store = FileStore::open(FsBackend::new(&word_file))
        .with_context(|| format!("could not read {}", word_file.display()))?;
    let mut api = VocabApi::new(store);

    let skipped = api.skipped_rows().len();
    if skipped > 0 {
        eprintln!(
            "{}",
            styles::WARNING.apply_to(format!(
                "Skipped {} unreadable row(s) in {}",
                skipped,
                word_file.display()
            ))
        );
    }

    match UiMode::parse(&mode) {
        Some(UiMode::Cli) => menu::run(&mut api, &mut Prompter::stdio())?,
        Some(UiMode::Tui) => select::run(&mut api)?,
        None => {
            tracing::debug!(%mode, "unknown ui mode, no front end started");
            return Ok(());
        }
    }

    if api.has_unsaved_changes() {
        api.save()
            .with_context(|| format!("could not save changes to {}", word_file.display()))?;
        println!(
            "{}",
            styles::SUCCESS.apply_to(format!("Unsaved changes written to {}", word_file.display()))
        );
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
