//! # Front-End Transactions
//!
//! The five things a user can do from either menu. Each transaction prompts
//! for its inputs, makes one mutating API call at most, and prints the
//! outcome. Library errors are rendered and swallowed so the menu carries
//! on; only I/O errors on the prompt streams propagate.
//!
//! End of input in the middle of a transaction abandons it without changes.
//!
//! Remove and edit pick an entry by its visible index, then hold on to the
//! entry id for the follow-up question and the mutation.

use super::prompt::Prompter;
use super::render;
use std::io::{self, BufRead, Write};
use vocabapp::api::{CmdMessage, CmdResult, VocabApi};
use vocabapp::error::{Result as VocabResult, VocabError};
use vocabapp::index::parse_visible_index;
use vocabapp::model::{parse_tags, Field, NewEntry};
use vocabapp::store::backend::StorageBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    Edit,
    List,
    Search,
    Exit,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Add,
        Action::Remove,
        Action::Edit,
        Action::List,
        Action::Search,
        Action::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::Add => "Add word",
            Action::Remove => "Remove word",
            Action::Edit => "Edit word",
            Action::List => "List words",
            Action::Search => "Search words",
            Action::Exit => "Exit",
        }
    }

    /// Menu choices are numbered from 1.
    pub fn from_choice(choice: &str) -> Option<Action> {
        let n: usize = choice.trim().parse().ok()?;
        n.checked_sub(1).and_then(|i| Action::ALL.get(i).copied())
    }
}

/// Runs one transaction. `Exit` does nothing here; the menus handle it.
pub fn perform<B, R, W>(
    api: &mut VocabApi<B>,
    prompter: &mut Prompter<R, W>,
    action: Action,
) -> io::Result<()>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    tracing::debug!(?action, "running action");
    match action {
        Action::Add => add_word(api, prompter),
        Action::Remove => remove_word(api, prompter),
        Action::Edit => edit_word(api, prompter),
        Action::List => list_words(api, prompter),
        Action::Search => search_word(api, prompter),
        Action::Exit => Ok(()),
    }
}

pub fn add_word<B, R, W>(api: &mut VocabApi<B>, prompter: &mut Prompter<R, W>) -> io::Result<()>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    prompter.say("\n--- Add a new word ---")?;
    let Some(term) = prompter.ask("Term: ")? else {
        return Ok(());
    };
    if term.is_empty() {
        let err = VocabError::Validation("The term cannot be empty".into());
        return prompter.print(&render::render_error(&err));
    }
    if api.find_by_term(&term).is_some() {
        return prompter.print(&render::render_error(&VocabError::Duplicate(term)));
    }

    let Some(draft) = read_draft(prompter, term)? else {
        return Ok(());
    };
    show(prompter, api.add_word(draft))
}

/// Reads the eight fields after the term. `None` at end of input.
fn read_draft<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    term: String,
) -> io::Result<Option<NewEntry>> {
    let Some(translation) = prompter.ask("Translation: ")? else {
        return Ok(None);
    };
    let Some(part_of_speech) = prompter.ask("Part of speech: ")? else {
        return Ok(None);
    };
    let Some(pronunciation) = prompter.ask("Pronunciation: ")? else {
        return Ok(None);
    };
    let Some(example) = prompter.ask("Example: ")? else {
        return Ok(None);
    };
    let Some(example_translation) = prompter.ask("Example translation: ")? else {
        return Ok(None);
    };
    let Some(tags) = prompter.ask("Tags (comma separated): ")? else {
        return Ok(None);
    };
    let Some(difficulty) = prompter.ask("Difficulty (1-5): ")? else {
        return Ok(None);
    };
    let Some(notes) = prompter.ask("Notes: ")? else {
        return Ok(None);
    };

    Ok(Some(NewEntry {
        term,
        translation,
        part_of_speech,
        pronunciation,
        example,
        example_translation,
        tags: parse_tags(&tags),
        difficulty: leading_integer(&difficulty),
        notes,
    }))
}

/// The integer a number-typed answer starts with: `"3."` and `"3 stars"` are 3.
fn leading_integer(answer: &str) -> Option<i64> {
    let answer = answer.trim_start();
    let sign_len = usize::from(answer.starts_with(['+', '-']));
    let digits = answer[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(answer.len() - sign_len);
    answer[..sign_len + digits].parse().ok()
}

pub fn remove_word<B, R, W>(api: &mut VocabApi<B>, prompter: &mut Prompter<R, W>) -> io::Result<()>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    let Some(index) = pick_entry(api, prompter, "Number of the word to remove: ")? else {
        return Ok(());
    };
    let picked = match api.view_word(index) {
        Ok(result) => result.listed_entries.into_iter().next(),
        Err(e) => return prompter.print(&render::render_error(&e)),
    };
    let Some(picked) = picked else {
        return Ok(());
    };

    let question = format!("Remove '{}'? (y/n): ", picked.entry.term);
    let Some(answer) = prompter.ask(&question)? else {
        return Ok(());
    };
    let confirmed = answer.eq_ignore_ascii_case("y");
    show(prompter, api.remove_word(&picked.entry.id, confirmed))
}

pub fn edit_word<B, R, W>(api: &mut VocabApi<B>, prompter: &mut Prompter<R, W>) -> io::Result<()>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    let Some(index) = pick_entry(api, prompter, "Number of the word to edit: ")? else {
        return Ok(());
    };
    let picked = match api.view_word(index) {
        Ok(result) => result.listed_entries.into_iter().next(),
        Err(e) => return prompter.print(&render::render_error(&e)),
    };
    let Some(picked) = picked else {
        return Ok(());
    };
    prompter.print(&render::render_details(&picked.entry))?;

    let Some(choice) = prompter.ask("Field to edit (1-9 or name, 0 to cancel): ")? else {
        return Ok(());
    };
    if choice == "0" {
        return prompter.print(&render::render_messages(&[CmdMessage::info("Edit cancelled")]));
    }
    let field = match choice.parse::<Field>() {
        Ok(field) => field,
        Err(e) => return prompter.print(&render::render_error(&e)),
    };

    let Some(value) = prompter.ask(&format!("New {}: ", field.label().to_lowercase()))? else {
        return Ok(());
    };
    show(prompter, api.update_word(&picked.entry.id, field, &value))
}

pub fn list_words<B, R, W>(api: &VocabApi<B>, prompter: &mut Prompter<R, W>) -> io::Result<()>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    match api.list_words() {
        Ok(result) if result.listed_entries.is_empty() => {
            prompter.print(&render::render_messages(&result.messages))
        }
        Ok(result) => prompter.print(&render::render_list(&result.listed_entries)),
        Err(e) => prompter.print(&render::render_error(&e)),
    }
}

pub fn search_word<B, R, W>(api: &VocabApi<B>, prompter: &mut Prompter<R, W>) -> io::Result<()>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    let Some(query) = prompter.ask("Search: ")? else {
        return Ok(());
    };
    match api.search_words(&query) {
        Ok(result) if result.listed_entries.is_empty() => {
            prompter.print(&render::render_messages(&result.messages))
        }
        Ok(result) => prompter.print(&render::render_search(&result.listed_entries)),
        Err(e) => prompter.print(&render::render_error(&e)),
    }
}

/// Shows the list and reads a visible index. `None` when there is nothing to
/// pick from, the input ended, or the answer was not a number.
fn pick_entry<B, R, W>(
    api: &VocabApi<B>,
    prompter: &mut Prompter<R, W>,
    prompt: &str,
) -> io::Result<Option<usize>>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    if api.is_empty() {
        prompter.print(&render::render_error(&VocabError::EmptyList))?;
        return Ok(None);
    }
    list_words(api, prompter)?;

    let Some(answer) = prompter.ask(prompt)? else {
        return Ok(None);
    };
    match parse_visible_index(&answer) {
        Ok(index) => Ok(Some(index)),
        Err(e) => {
            prompter.print(&render::render_error(&e))?;
            Ok(None)
        }
    }
}

fn show<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    result: VocabResult<CmdResult>,
) -> io::Result<()> {
    match result {
        Ok(result) => prompter.print(&render::render_messages(&result.messages)),
        Err(e) => prompter.print(&render::render_error(&e)),
    }
}
