//! The cursor menu: the same actions, picked with the arrow keys.
//!
//! Key handling lives in [`MenuState`], a plain state machine, so it is
//! tested without a terminal. [`run`] only wires it to `console::Term`.
//!
//! | Key | Effect |
//! |-----|--------|
//! | up, `k` | move up (stops at the first item) |
//! | down, `j` | move down (stops at the last item) |
//! | enter, space | run the highlighted action |
//! | `q`, escape, ctrl-c | leave |
//!
//! Actions themselves prompt line by line, exactly as in the line menu.

use super::actions::{self, Action};
use super::prompt::Prompter;
use super::styles;
use anyhow::{bail, Result};
use console::{Key, Term};
use std::io::ErrorKind;
use vocabapp::api::VocabApi;
use vocabapp::store::backend::StorageBackend;

const TITLE: &str = "What would you like to do?";
const HINT: &str = "(up/down to move, enter to select, q to quit)";
const CTRL_C: char = '\u{3}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Up,
    Down,
    Select,
    Quit,
    Other,
}

impl From<Key> for MenuKey {
    fn from(key: Key) -> Self {
        match key {
            Key::ArrowUp | Key::Char('k') => MenuKey::Up,
            Key::ArrowDown | Key::Char('j') => MenuKey::Down,
            Key::Enter | Key::Char(' ') => MenuKey::Select,
            Key::Escape | Key::Char('q') | Key::Char(CTRL_C) => MenuKey::Quit,
            _ => MenuKey::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Redraw,
    Chosen(Action),
    Quit,
    Ignored,
}

#[derive(Debug, Default)]
pub struct MenuState {
    cursor: usize,
}

impl MenuState {
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn handle(&mut self, key: MenuKey) -> MenuEvent {
        match key {
            MenuKey::Up if self.cursor > 0 => {
                self.cursor -= 1;
                MenuEvent::Redraw
            }
            MenuKey::Down if self.cursor + 1 < Action::ALL.len() => {
                self.cursor += 1;
                MenuEvent::Redraw
            }
            MenuKey::Select => match Action::ALL[self.cursor] {
                Action::Exit => MenuEvent::Quit,
                action => MenuEvent::Chosen(action),
            },
            MenuKey::Quit => MenuEvent::Quit,
            _ => MenuEvent::Ignored,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![styles::HEADING.apply_to(TITLE).to_string()];
        for (i, action) in Action::ALL.iter().enumerate() {
            if i == self.cursor {
                lines.push(format!(
                    "{}",
                    styles::CURSOR.apply_to(format!("> {}", action.label()))
                ));
            } else {
                lines.push(format!("  {}", action.label()));
            }
        }
        lines.push(styles::MUTED.apply_to(HINT).to_string());
        lines
    }
}

pub fn run<B: StorageBackend>(api: &mut VocabApi<B>) -> Result<()> {
    let term = Term::stdout();
    if !term.is_term() {
        bail!("the tui mode needs an interactive terminal; use --mode cli for piped input");
    }

    let mut state = MenuState::default();
    loop {
        let lines = state.lines();
        for line in &lines {
            term.write_line(line)?;
        }
        term.hide_cursor()?;

        let key = match term.read_key() {
            Ok(key) => MenuKey::from(key),
            Err(e) if e.kind() == ErrorKind::Interrupted => MenuKey::Quit,
            Err(e) => {
                term.show_cursor()?;
                return Err(e.into());
            }
        };
        term.clear_last_lines(lines.len())?;

        match state.handle(key) {
            MenuEvent::Redraw | MenuEvent::Ignored => {}
            MenuEvent::Quit => {
                term.show_cursor()?;
                term.write_line("Goodbye!")?;
                return Ok(());
            }
            MenuEvent::Chosen(action) => {
                term.show_cursor()?;
                actions::perform(api, &mut Prompter::stdio(), action)?;
                term.write_line("")?;
            }
        }
    }
}
