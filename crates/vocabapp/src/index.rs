//! # Entry Identifiers: UUID vs Visible Index
//!
//! Users pick words by the number printed next to them in a listing. That
//! number is just `position + 1` in the current list, so it moves whenever an
//! earlier entry is removed.
//!
//! Vocab therefore keeps two identifiers:
//!
//! 1. **UUID (Internal)**: generated per entry for the lifetime of the process.
//! 2. **Visible Index (External)**: recomputed from the current order on every listing.
//!
//! Visible indexes are resolved to UUIDs as soon as they enter the API
//! ([`crate::api`]). Anything that spans two user interactions (pick, confirm,
//! remove) holds on to the UUID, never to the number.
//!
//! **Developer Note**: always build listings with [`index_entries`]. Filtered
//! views (search) keep the index an entry has in the full list.

use crate::error::{Result, VocabError};
use crate::model::WordEntry;
use std::fmt;

/// A 1-based position in the current word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(usize);

impl DisplayIndex {
    pub fn from_position(position: usize) -> Self {
        Self(position + 1)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a visible index typed by the user. Bounds are checked on resolution.
pub fn parse_visible_index(s: &str) -> Result<usize> {
    let s = s.trim();
    s.parse()
        .map_err(|_| VocabError::Validation(format!("Invalid index: '{}'", s)))
}

/// An entry paired with the index it currently has in the full list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEntry {
    pub entry: WordEntry,
    pub index: DisplayIndex,
}

pub fn index_entries(entries: &[WordEntry]) -> Vec<DisplayEntry> {
    entries
        .iter()
        .enumerate()
        .map(|(position, entry)| DisplayEntry {
            entry: entry.clone(),
            index: DisplayIndex::from_position(position),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_follow_list_order() {
        let entries = vec![WordEntry::new("a"), WordEntry::new("b")];
        let indexed = index_entries(&entries);
        assert_eq!(indexed[0].index.get(), 1);
        assert_eq!(indexed[1].index.to_string(), "2");
        assert_eq!(indexed[1].entry.term, "b");
    }

    #[test]
    fn parses_visible_indexes() {
        assert_eq!(parse_visible_index(" 3 ").unwrap(), 3);
        assert_eq!(parse_visible_index("0").unwrap(), 0);
        assert!(matches!(
            parse_visible_index("two"),
            Err(VocabError::Validation(_))
        ));
        assert!(parse_visible_index("-1").is_err());
    }
}
