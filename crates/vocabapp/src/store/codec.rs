//! CSV encoding of the word list.
//!
//! One record per line, no header, nine columns in this order:
//!
//! ```text
//! term,translation,part_of_speech,pronunciation,example,example_translation,tags,difficulty,notes
//! ```
//!
//! Tags are joined with `|`. Fields containing commas, quotes or newlines are
//! quoted by the CSV writer. Records with fewer than nine columns are skipped
//! on load and reported back, they never fail the whole load.

use crate::error::Result;
use crate::model::{WordEntry, MAX_DIFFICULTY, TAG_SEPARATOR};
use std::io::{Read, Write};
use uuid::Uuid;

pub const COLUMN_COUNT: usize = 9;

/// A row that was dropped while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number where the record starts.
    pub line: u64,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct LoadReport {
    pub entries: Vec<WordEntry>,
    pub skipped: Vec<SkippedRow>,
}

pub fn decode<R: Read>(reader: R) -> Result<LoadReport> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut report = LoadReport::default();
    let mut record = csv::StringRecord::new();

    loop {
        let line = csv_reader.position().line();
        match csv_reader.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => match entry_from_record(&record) {
                Some(entry) => report.entries.push(entry),
                None => report.skipped.push(SkippedRow {
                    line: record.position().map(|p| p.line()).unwrap_or(line),
                    reason: format!(
                        "expected {} columns, found {}",
                        COLUMN_COUNT,
                        record.len()
                    ),
                }),
            },
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(line);
                report.skipped.push(SkippedRow {
                    line,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}

pub fn encode<W: Write>(writer: W, entries: &[WordEntry]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    for entry in entries {
        csv_writer.write_record(record_from_entry(entry))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn encode_to_vec(entries: &[WordEntry]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    encode(&mut buf, entries)?;
    Ok(buf)
}

pub fn record_from_entry(entry: &WordEntry) -> [String; COLUMN_COUNT] {
    [
        entry.term.clone(),
        entry.translation.clone(),
        entry.part_of_speech.clone(),
        entry.pronunciation.clone(),
        entry.example.clone(),
        entry.example_translation.clone(),
        join_tags(&entry.tags),
        entry.difficulty.to_string(),
        entry.notes.clone(),
    ]
}

fn entry_from_record(record: &csv::StringRecord) -> Option<WordEntry> {
    if record.len() < COLUMN_COUNT {
        return None;
    }
    let field = |i: usize| record.get(i).unwrap_or_default().to_string();

    Some(WordEntry {
        id: Uuid::new_v4(),
        term: field(0),
        translation: field(1),
        part_of_speech: field(2),
        pronunciation: field(3),
        example: field(4),
        example_translation: field(5),
        tags: split_tags(&field(6)),
        difficulty: decode_difficulty(&field(7)),
        notes: field(8),
    })
}

pub fn join_tags(tags: &[String]) -> String {
    tags.join(TAG_SEPARATOR.to_string().as_str())
}

pub fn split_tags(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(TAG_SEPARATOR).map(str::to_string).collect()
}

// Unparsable or out-of-scale values load as unset.
fn decode_difficulty(raw: &str) -> u8 {
    match raw.trim().parse::<u8>() {
        Ok(v) if v <= MAX_DIFFICULTY => v,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WordEntry {
        let mut entry = WordEntry::new("run");
        entry.translation = "跑".into();
        entry.part_of_speech = "v".into();
        entry.pronunciation = "rʌn".into();
        entry.example = "I run, every day.".into();
        entry.example_translation = "我每天\"跑步\"。".into();
        entry.tags = vec!["verb".into(), "common".into()];
        entry.difficulty = 3;
        entry.notes = "line one\nline two".into();
        entry
    }

    #[test]
    fn encodes_nine_columns_with_quoting() {
        let bytes = encode_to_vec(&[sample()]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "run,跑,v,rʌn,\"I run, every day.\",\"我每天\"\"跑步\"\"。\",verb|common,3,\"line one\nline two\"\n"
        );
    }

    #[test]
    fn decode_reads_back_all_fields() {
        let original = sample();
        let bytes = encode_to_vec(&[original.clone()]).unwrap();
        let report = decode(bytes.as_slice()).unwrap();

        assert!(report.skipped.is_empty());
        assert_eq!(report.entries.len(), 1);
        assert_eq!(
            record_from_entry(&report.entries[0]),
            record_from_entry(&original)
        );
    }

    #[test]
    fn empty_tags_column_decodes_to_no_tags() {
        let report = decode("run,跑,,,,,,0,\n".as_bytes()).unwrap();
        assert!(report.entries[0].tags.is_empty());
    }

    #[test]
    fn short_rows_are_skipped_with_line_numbers() {
        let data = "a,1,,,,,,1,\nb,2,x,y,z\nc,3,,,,,,2,\n";
        let report = decode(data.as_bytes()).unwrap();

        let terms: Vec<_> = report.entries.iter().map(|e| e.term.as_str()).collect();
        assert_eq!(terms, vec!["a", "c"]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line, 2);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let report = decode("a,1,,,,,,2,note,extra\n".as_bytes()).unwrap();
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].notes, "note");
    }

    #[test]
    fn bad_difficulty_decodes_to_unset() {
        let data = "a,,,,,,,hard,\nb,,,,,,,9,\nc,,,,,,,4,\n";
        let report = decode(data.as_bytes()).unwrap();
        let levels: Vec<_> = report.entries.iter().map(|e| e.difficulty).collect();
        assert_eq!(levels, vec![0, 0, 4]);
    }

    #[test]
    fn invalid_utf8_row_is_skipped() {
        let mut data = b"a,,,,,,,1,\n".to_vec();
        data.extend_from_slice(b"\xff\xfe,,,,,,,1,\n");
        data.extend_from_slice(b"c,,,,,,,1,\n");

        let report = decode(data.as_slice()).unwrap();
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.skipped.len(), 1);
    }

    #[test]
    fn empty_list_encodes_to_empty_file() {
        assert!(encode_to_vec(&[]).unwrap().is_empty());
    }
}
