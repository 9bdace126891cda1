//! Styles for the vocab CLI.
//!
//! Rendering code refers to styles by what the text *is* (an index, a term,
//! a warning), never by color. Every style is built once through
//! `once_cell::sync::Lazy`.
//!
//! `console` drops the escape codes by itself when stdout is not a terminal,
//! so piped sessions and tests see plain text.

use console::Style;
use once_cell::sync::Lazy;

pub static HEADING: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static INDEX: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static TERM: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static DIFFICULTY: Lazy<Style> = Lazy::new(|| Style::new().magenta());
pub static CURSOR: Lazy<Style> = Lazy::new(|| Style::new().yellow().bold());

pub static INFO: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow().bold());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red().bold());
