//! Line-oriented prompting over any reader and writer.
//!
//! Both front ends collect field values through a [`Prompter`]; tests drive it
//! with a `Cursor` and a `Vec<u8>`.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `prompt` and reads one line, trimmed. `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Writes already-rendered text as is.
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_trims_and_detects_eof() {
        let mut p = Prompter::new(Cursor::new("  run \r\n\n"), Vec::new());
        assert_eq!(p.ask("Term: ").unwrap().as_deref(), Some("run"));
        assert_eq!(p.ask("Translation: ").unwrap().as_deref(), Some(""));
        assert_eq!(p.ask("Notes: ").unwrap(), None);

        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out, "Term: Translation: Notes: ");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut p = Prompter::new(Cursor::new("6"), Vec::new());
        assert_eq!(p.ask("> ").unwrap().as_deref(), Some("6"));
        assert_eq!(p.ask("> ").unwrap(), None);
    }
}
