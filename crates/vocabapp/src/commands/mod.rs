//! # Command Layer
//!
//! This module contains the **core business logic** of vocab. Each operation
//! lives in its own submodule as a plain function over a [`WordStore`].
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: no stdout, stderr, or terminal concerns
//! - **User interaction**: no prompts. Confirmation is an argument
//!   ([`remove::run`] takes `confirmed`); the UI decides how to ask.
//! - **Index parsing**: commands address entries by id; visible indexes are
//!   resolved in [`crate::api`].
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`]:
//! - `affected_entries`: entries that were added, removed or edited
//! - `listed_entries`: entries to display
//! - `messages`: outcome messages with a level
//!
//! Both entry lists carry [`DisplayEntry`] values, so clients always get the
//! visible index alongside the entry.
//!
//! Validation failures come back as `Err`, and the store is untouched. A
//! mutation whose save failed still comes back as `Ok`, with a warning message.
//!
//! ## Testing Strategy
//!
//! Command tests run against the in-memory store and cover every branch.
//!
//! [`WordStore`]: crate::store::WordStore

use crate::index::DisplayEntry;

pub mod add;
pub mod helpers;
pub mod list;
pub mod remove;
pub mod search;
pub mod update;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_entries: Vec<DisplayEntry>,
    pub listed_entries: Vec<DisplayEntry>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_entries(mut self, entries: Vec<DisplayEntry>) -> Self {
        self.affected_entries = entries;
        self
    }

    pub fn with_listed_entries(mut self, entries: Vec<DisplayEntry>) -> Self {
        self.listed_entries = entries;
        self
    }
}
