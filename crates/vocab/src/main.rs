//! # Vocab CLI Architecture
//!
//! The binary is intentionally thin: the interactive front ends live in
//! `src/cli/`, while this file only invokes `cli::run()` and handles process
//! termination.
//!
//! ## Workspace Structure
//!
//! - `crates/vocabapp/`: core library, UI-agnostic word store and operations
//! - `crates/vocab/`: this binary, depends on `vocabapp`
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/vocab/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Line menu (menu.rs) and cursor menu (select.rs)          │
//! │  - Prompts and transactions (prompt.rs, actions.rs)         │
//! │  - Terminal rendering (render.rs, styles.rs)                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/vocabapp/src/api.rs)                     │
//! │  - Resolves visible indexes to entry ids                    │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer owns every
//! user-facing concern: argument parsing, configuration, prompting,
//! rendering, and exit codes.
//!
//! ## Testing Approach
//!
//! - **Library**: unit tests beside each command, plus integration tests
//!   against real files.
//! - **Transactions**: driven with in-memory readers and writers, so every
//!   prompt sequence is tested without a terminal.
//! - **Binary**: `tests/` pipes scripted sessions into the line menu.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
