//! # Vocab Architecture
//!
//! Vocab is a **UI-agnostic vocabulary library**. The `vocab` binary is one
//! client of it; nothing in this crate knows about terminals.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Front ends (crates/vocab)                                  │
//! │  - Line menu and cursor menu, prompts, rendering            │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Resolves visible indexes to entry ids                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per module, returns `CmdResult`            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - WordStore: the list, validation, save state              │
//! │  - StorageBackend: FsBackend (CSV file), MemBackend (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>`, and never prints, prompts or exits.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: The word store, its backends and the CSV codec
//! - [`model`]: `WordEntry`, `NewEntry`, `Field` and the field rules
//! - [`index`]: Visible 1-based indexes
//! - [`config`]: Configuration loading
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod store;

#[cfg(test)]
pub(crate) mod test_utils;
