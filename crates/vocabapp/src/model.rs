//! # Domain Model: Word Entries
//!
//! A [`WordEntry`] is one vocabulary item with nine user-visible attributes and
//! an internal [`Uuid`]. The id is generated whenever an entry is created or
//! loaded and is never written to disk: the file keeps its nine columns, while
//! the process gets a stable handle that survives deletions shifting the
//! visible positions around.
//!
//! ## Field Rules
//!
//! | Field | Rule |
//! |-------|------|
//! | `term` | Required, case-sensitive. Uniqueness is checked by the store on add only. |
//! | `tags` | Comma-separated on input, trimmed, order and duplicates kept. Blank input is no tags. Labels may not contain `|`. |
//! | `difficulty` | `0` means unset. On add, anything outside `1..=5` becomes `0`. On edit, anything outside `1..=5` is rejected. |
//! | everything else | Free text, stored verbatim. |
//!
//! Field validation happens *before* assignment, so a rejected edit never
//! leaves an entry half-updated.

use crate::error::{Result, VocabError};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 5;

/// Separator used for the tags column on disk.
pub const TAG_SEPARATOR: char = '|';

/// Separator used when users type tags.
pub const TAG_INPUT_SEPARATOR: char = ',';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub id: Uuid,
    pub term: String,
    pub translation: String,
    pub part_of_speech: String,
    pub pronunciation: String,
    pub example: String,
    pub example_translation: String,
    pub tags: Vec<String>,
    pub difficulty: u8,
    pub notes: String,
}

impl WordEntry {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            term: term.into(),
            translation: String::new(),
            part_of_speech: String::new(),
            pronunciation: String::new(),
            example: String::new(),
            example_translation: String::new(),
            tags: Vec::new(),
            difficulty: 0,
            notes: String::new(),
        }
    }

    /// Builds an entry from an add request. Term uniqueness is the store's job.
    pub fn from_new(draft: NewEntry) -> Result<Self> {
        validate_term(&draft.term)?;
        let tags = normalize_tags(draft.tags);
        validate_tags(&tags)?;

        Ok(Self {
            id: Uuid::new_v4(),
            term: draft.term,
            translation: draft.translation,
            part_of_speech: draft.part_of_speech,
            pronunciation: draft.pronunciation,
            example: draft.example,
            example_translation: draft.example_translation,
            tags,
            difficulty: difficulty_or_unset(draft.difficulty),
            notes: draft.notes,
        })
    }

    pub fn has_difficulty(&self) -> bool {
        self.difficulty >= MIN_DIFFICULTY
    }

    /// The current value of a field as the user would type it back in.
    pub fn field_value(&self, field: Field) -> String {
        match field {
            Field::Term => self.term.clone(),
            Field::Translation => self.translation.clone(),
            Field::PartOfSpeech => self.part_of_speech.clone(),
            Field::Pronunciation => self.pronunciation.clone(),
            Field::Example => self.example.clone(),
            Field::ExampleTranslation => self.example_translation.clone(),
            Field::Tags => self.tags.join(", "),
            Field::Difficulty => self.difficulty.to_string(),
            Field::Notes => self.notes.clone(),
        }
    }

    /// Validates `raw` for `field` and assigns it. On error the entry is untouched.
    pub fn set_field(&mut self, field: Field, raw: &str) -> Result<()> {
        match field {
            Field::Term => {
                validate_term(raw)?;
                self.term = raw.to_string();
            }
            Field::Translation => self.translation = raw.to_string(),
            Field::PartOfSpeech => self.part_of_speech = raw.to_string(),
            Field::Pronunciation => self.pronunciation = raw.to_string(),
            Field::Example => self.example = raw.to_string(),
            Field::ExampleTranslation => self.example_translation = raw.to_string(),
            Field::Tags => {
                let tags = parse_tags(raw);
                validate_tags(&tags)?;
                self.tags = tags;
            }
            Field::Difficulty => self.difficulty = parse_difficulty(raw)?,
            Field::Notes => self.notes = raw.to_string(),
        }
        Ok(())
    }

    /// Case-insensitive substring match on term, translation and notes.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        [&self.term, &self.translation, &self.notes]
            .iter()
            .any(|haystack| haystack.to_lowercase().contains(needle))
    }
}

/// The raw field bundle for adding a word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEntry {
    pub term: String,
    pub translation: String,
    pub part_of_speech: String,
    pub pronunciation: String,
    pub example: String,
    pub example_translation: String,
    pub tags: Vec<String>,
    pub difficulty: Option<i64>,
    pub notes: String,
}

impl NewEntry {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Default::default()
        }
    }

    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = translation.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = example.into();
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_difficulty(mut self, difficulty: i64) -> Self {
        self.difficulty = Some(difficulty);
        self
    }
}

/// One of the nine editable attributes, numbered in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Term,
    Translation,
    PartOfSpeech,
    Pronunciation,
    Example,
    ExampleTranslation,
    Tags,
    Difficulty,
    Notes,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Term,
        Field::Translation,
        Field::PartOfSpeech,
        Field::Pronunciation,
        Field::Example,
        Field::ExampleTranslation,
        Field::Tags,
        Field::Difficulty,
        Field::Notes,
    ];

    /// 1-based position, as shown on the detail screen.
    pub fn number(self) -> u8 {
        match self {
            Field::Term => 1,
            Field::Translation => 2,
            Field::PartOfSpeech => 3,
            Field::Pronunciation => 4,
            Field::Example => 5,
            Field::ExampleTranslation => 6,
            Field::Tags => 7,
            Field::Difficulty => 8,
            Field::Notes => 9,
        }
    }

    pub fn from_number(n: u8) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.number() == n)
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Term => "Term",
            Field::Translation => "Translation",
            Field::PartOfSpeech => "Part of speech",
            Field::Pronunciation => "Pronunciation",
            Field::Example => "Example",
            Field::ExampleTranslation => "Example translation",
            Field::Tags => "Tags",
            Field::Difficulty => "Difficulty",
            Field::Notes => "Notes",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Field {
    type Err = VocabError;

    /// Accepts the field number (`"8"`) or its name (`"difficulty"`, `"part-of-speech"`).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u8>() {
            return Field::from_number(n).ok_or_else(|| {
                VocabError::Validation(format!("Unknown field number {}: expected 1-9", n))
            });
        }

        let normalized = s.to_lowercase().replace(['-', '_', ' '], "");
        let field = match normalized.as_str() {
            "term" | "word" => Field::Term,
            "translation" => Field::Translation,
            "partofspeech" | "pos" => Field::PartOfSpeech,
            "pronunciation" => Field::Pronunciation,
            "example" => Field::Example,
            "exampletranslation" => Field::ExampleTranslation,
            "tags" => Field::Tags,
            "difficulty" => Field::Difficulty,
            "notes" => Field::Notes,
            _ => return Err(VocabError::Validation(format!("Unknown field: {}", s))),
        };
        Ok(field)
    }
}

fn validate_term(term: &str) -> Result<()> {
    if term.trim().is_empty() {
        return Err(VocabError::Validation("The term cannot be empty".into()));
    }
    Ok(())
}

/// Splits comma-separated user input into trimmed tags.
///
/// Blank input gives no tags. Empty labels between commas are kept, as typed.
pub fn parse_tags(raw: &str) -> Vec<String> {
    normalize_tags(raw.split(TAG_INPUT_SEPARATOR).map(str::to_string).collect())
}

/// Trims each tag and collapses a lone empty label into no tags at all.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let tags: Vec<String> = tags.into_iter().map(|t| t.trim().to_string()).collect();
    if tags.len() == 1 && tags[0].is_empty() {
        return Vec::new();
    }
    tags
}

pub fn validate_tags(tags: &[String]) -> Result<()> {
    match tags.iter().find(|t| t.contains(TAG_SEPARATOR)) {
        Some(bad) => Err(VocabError::Validation(format!(
            "Tag '{}' may not contain '{}'",
            bad, TAG_SEPARATOR
        ))),
        None => Ok(()),
    }
}

/// Difficulty as accepted on add: anything outside the scale means unset.
pub fn difficulty_or_unset(value: Option<i64>) -> u8 {
    match value {
        Some(v) if (MIN_DIFFICULTY as i64..=MAX_DIFFICULTY as i64).contains(&v) => v as u8,
        _ => 0,
    }
}

/// Difficulty as accepted on edit: anything outside the scale is an error.
pub fn parse_difficulty(raw: &str) -> Result<u8> {
    match raw.trim().parse::<i64>() {
        Ok(v) if (MIN_DIFFICULTY as i64..=MAX_DIFFICULTY as i64).contains(&v) => Ok(v as u8),
        _ => Err(VocabError::Validation(format!(
            "Invalid difficulty '{}': expected a whole number from {} to {}",
            raw.trim(),
            MIN_DIFFICULTY,
            MAX_DIFFICULTY
        ))),
    }
}
