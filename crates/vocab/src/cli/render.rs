//! # Rendering Module
//!
//! Turns `CmdResult` data into text. Every function returns a `String` so
//! the front ends decide where it goes and tests can compare it directly.
//!
//! ## Listing Layout
//!
//! ```text
//!  1. run [v] /rʌn/
//!     Translation: 跑
//!     Tags: verb, motion
//!     Difficulty: 3/5
//! ```
//!
//! Optional lines (example, example translation, tags, difficulty, notes)
//! appear only when the field is set. Search results use one compact line
//! per entry, truncated to [`LINE_WIDTH`] display columns.

use super::styles;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use vocabapp::api::{CmdMessage, MessageLevel};
use vocabapp::error::VocabError;
use vocabapp::index::DisplayEntry;
use vocabapp::model::{Field, WordEntry, MAX_DIFFICULTY};

pub const LINE_WIDTH: usize = 80;
const INDENT: &str = "   ";
const ELLIPSIS: char = '…';
const ELLIPSIS_WIDTH: usize = 1;

pub fn render_list(entries: &[DisplayEntry]) -> String {
    let mut out = format!("\n{}\n", styles::HEADING.apply_to("--- Word list ---"));
    for dp in entries {
        let word = &dp.entry;
        out.push_str(&format!(
            "{} {} [{}] /{}/\n",
            styles::INDEX.apply_to(format!("{}.", dp.index)),
            styles::TERM.apply_to(&word.term),
            word.part_of_speech,
            word.pronunciation
        ));
        out.push_str(&format!("{}Translation: {}\n", INDENT, word.translation));

        let optional = [
            ("Example", word.example.clone()),
            ("Example translation", word.example_translation.clone()),
            ("Tags", word.tags.join(", ")),
        ];
        for (label, value) in optional {
            if !value.is_empty() {
                out.push_str(&format!("{}{}: {}\n", INDENT, label, value));
            }
        }
        if word.has_difficulty() {
            out.push_str(&format!(
                "{}Difficulty: {}\n",
                INDENT,
                styles::DIFFICULTY.apply_to(format_difficulty(word.difficulty))
            ));
        }
        if !word.notes.is_empty() {
            out.push_str(&format!("{}Notes: {}\n", INDENT, word.notes));
        }
        out.push('\n');
    }
    out
}

pub fn render_search(entries: &[DisplayEntry]) -> String {
    let mut out = format!("\n{}\n", styles::HEADING.apply_to("--- Search results ---"));
    for dp in entries {
        let index = format!("{}.", dp.index);
        let body = format!(
            "{} [{}] - {}",
            dp.entry.term, dp.entry.part_of_speech, dp.entry.translation
        );
        let room = LINE_WIDTH.saturating_sub(index.width() + 1);
        out.push_str(&format!(
            "{} {}\n",
            styles::INDEX.apply_to(index),
            truncate_to_width(&body, room)
        ));
    }
    out
}

/// The numbered field screen shown before editing.
pub fn render_details(word: &WordEntry) -> String {
    let mut out = format!("\n{}\n", styles::HEADING.apply_to("--- Word details ---"));
    for field in Field::ALL {
        let value = match field {
            Field::Difficulty if word.has_difficulty() => format_difficulty(word.difficulty),
            Field::Difficulty => "not set".to_string(),
            _ => word.field_value(field),
        };
        out.push_str(&format!(
            "{} {}: {}\n",
            styles::INDEX.apply_to(format!("{}.", field.number())),
            field.label(),
            value
        ));
    }
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let styled = match message.level {
            MessageLevel::Info => styles::INFO.apply_to(&message.content),
            MessageLevel::Success => styles::SUCCESS.apply_to(&message.content),
            MessageLevel::Warning => styles::WARNING.apply_to(&message.content),
            MessageLevel::Error => styles::ERROR.apply_to(&message.content),
        };
        out.push_str(&format!("{}\n", styled));
    }
    out
}

/// Errors from an action are shown, not propagated; the menu carries on.
pub fn render_error(err: &VocabError) -> String {
    let message = if err.is_notice() {
        CmdMessage::info(err.to_string())
    } else {
        CmdMessage::error(err.to_string())
    };
    render_messages(&[message])
}

fn format_difficulty(difficulty: u8) -> String {
    format!("{}/{}", difficulty, MAX_DIFFICULTY)
}

/// Cuts `text` to at most `max` display columns, marking the cut with `…`.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + ELLIPSIS_WIDTH > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}
