//! The line menu: a numbered list of actions read one line at a time.
//!
//! Works with any input, so it is also what scripted sessions and the
//! end-to-end tests drive. End of input leaves the menu like choosing Exit.

use super::actions::{self, Action};
use super::prompt::Prompter;
use super::{render, styles};
use std::io::{self, BufRead, Write};
use vocabapp::api::{CmdMessage, VocabApi};
use vocabapp::store::backend::StorageBackend;

const TITLE: &str = "=== Vocabulary ===";
const CHOICE_PROMPT: &str = "Choose an action (1-6): ";

pub fn run<B, R, W>(api: &mut VocabApi<B>, prompter: &mut Prompter<R, W>) -> io::Result<()>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    loop {
        prompter.print(&render_menu())?;
        let Some(choice) = prompter.ask(CHOICE_PROMPT)? else {
            return Ok(());
        };

        match Action::from_choice(&choice) {
            Some(Action::Exit) => {
                prompter.say("Goodbye!")?;
                return Ok(());
            }
            Some(action) => actions::perform(api, prompter, action)?,
            None => prompter.print(&render::render_messages(&[CmdMessage::error(
                "Invalid choice, please try again",
            )]))?,
        }
    }
}

fn render_menu() -> String {
    let mut out = format!("\n{}\n", styles::HEADING.apply_to(TITLE));
    for (i, action) in Action::ALL.iter().enumerate() {
        out.push_str(&format!(
            "{} {}\n",
            styles::INDEX.apply_to(format!("{}.", i + 1)),
            action.label()
        ));
    }
    out
}
