// Terminal prompter
// Line input through rustyline, menus through inquire, banners through crossterm

use crossterm::style::Stylize;
use inquire::{Confirm, InquireError, MultiSelect, Select};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};
use tracing::debug;

use crate::collect::Prompter;
use crate::errors::{JournalError, Result};

const LINE_PROMPT: &str = "> ";
const BLOCK_HINT: &str = "(Ctrl-D on an empty line to finish)";
const PAGE_SIZE: usize = 10;

/// Prompt text (descriptions, questions, warnings, labels), kept off stdout
struct Chrome<W: Write> {
    out: W,
}

impl<W: Write> Chrome<W> {
    fn banner(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", text.green().bold())
    }

    fn question(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{} {}", "[?]".yellow(), text)
    }

    fn warning(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text.yellow())
    }

    fn label(&mut self, label: &str, hint: Option<&str>) -> io::Result<()> {
        match hint {
            Some(hint) => writeln!(self.out, "{} {}", label.bold(), hint.dark_grey()),
            None => writeln!(self.out, "{}", label.bold()),
        }
    }
}

fn shown(result: io::Result<()>) {
    if let Err(err) = result {
        debug!(%err, "failed to write prompt text");
    }
}

pub struct TerminalPrompter {
    editor: DefaultEditor,
    chrome: Chrome<io::Stderr>,
}

impl TerminalPrompter {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(readline_error)?;
        Ok(Self {
            editor,
            chrome: Chrome { out: io::stderr() },
        })
    }

    fn read(&mut self, prompt: &str) -> std::result::Result<String, ReadlineError> {
        let line = self.editor.readline(prompt)?;
        if !line.trim().is_empty() {
            if let Err(err) = self.editor.add_history_entry(line.as_str()) {
                debug!(%err, "history entry not recorded");
            }
        }
        Ok(line)
    }
}

/// Ctrl-C / Ctrl-D end the run; anything else is an I/O failure
fn readline_error(err: ReadlineError) -> JournalError {
    match err {
        ReadlineError::Eof | ReadlineError::Interrupted => JournalError::InputClosed,
        ReadlineError::Io(err) => JournalError::Io(err),
        other => JournalError::Io(io::Error::new(io::ErrorKind::Other, other.to_string())),
    }
}

fn inquire_error(err: InquireError) -> JournalError {
    match err {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            JournalError::InputClosed
        }
        InquireError::IO(err) => JournalError::Io(err),
        other => JournalError::Io(io::Error::new(io::ErrorKind::Other, other.to_string())),
    }
}

impl Prompter for TerminalPrompter {
    fn describe(&mut self, text: &str) {
        shown(self.chrome.banner(text));
    }

    fn say(&mut self, text: &str) {
        shown(self.chrome.question(text));
    }

    fn warn(&mut self, text: &str) {
        shown(self.chrome.warning(text));
    }

    fn line(&mut self, label: &str) -> Result<String> {
        shown(self.chrome.label(label, None));
        self.read(LINE_PROMPT).map_err(readline_error)
    }

    fn block(&mut self, label: &str) -> Result<String> {
        shown(self.chrome.label(label, Some(BLOCK_HINT)));
        let mut lines = Vec::new();
        loop {
            match self.read("") {
                Ok(line) => lines.push(line),
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(readline_error(err)),
            }
        }
        debug!(lines = lines.len(), "block captured");
        Ok(lines.join("\n"))
    }

    fn confirm(&mut self, label: &str, default: bool) -> Result<bool> {
        Confirm::new(label)
            .with_default(default)
            .prompt()
            .map_err(inquire_error)
    }

    fn select(&mut self, label: &str, choices: &[String], default: Option<&str>) -> Result<String> {
        let cursor = default
            .and_then(|d| choices.iter().position(|c| c == d))
            .unwrap_or(0);

        let mut select = Select::new(label, choices.to_vec()).with_starting_cursor(cursor);
        select.vim_mode = true;
        select.page_size = PAGE_SIZE;
        select.prompt().map_err(inquire_error)
    }

    fn multiselect(
        &mut self,
        label: &str,
        choices: &[String],
        defaults: &[String],
    ) -> Result<Vec<String>> {
        let preselected: Vec<usize> = choices
            .iter()
            .enumerate()
            .filter(|(_, choice)| defaults.contains(choice))
            .map(|(idx, _)| idx)
            .collect();

        let mut multiselect =
            MultiSelect::new(label, choices.to_vec()).with_default(&preselected);
        multiselect.vim_mode = true;
        multiselect.page_size = PAGE_SIZE;
        multiselect.prompt().map_err(inquire_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_keys_close_input() {
        assert!(matches!(
            readline_error(ReadlineError::Eof),
            JournalError::InputClosed
        ));
        assert!(matches!(
            readline_error(ReadlineError::Interrupted),
            JournalError::InputClosed
        ));
        assert!(matches!(
            inquire_error(InquireError::OperationCanceled),
            JournalError::InputClosed
        ));
        assert!(matches!(
            inquire_error(InquireError::OperationInterrupted),
            JournalError::InputClosed
        ));
    }

    #[test]
    fn test_prompt_text_goes_to_one_writer() {
        let mut chrome = Chrome { out: Vec::new() };
        chrome.banner("Sleep matters").unwrap();
        chrome.question("Did you sleep well?").unwrap();
        chrome.warning("An answer is required").unwrap();
        chrome.label("Free write", Some(BLOCK_HINT)).unwrap();

        let text = String::from_utf8(chrome.out).unwrap();
        for expected in [
            "Sleep matters",
            "[?]",
            "Did you sleep well?",
            "An answer is required",
            "Free write",
            BLOCK_HINT,
        ] {
            assert!(text.contains(expected), "missing {:?} in {:?}", expected, text);
        }
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_other_failures_are_io() {
        assert!(matches!(
            inquire_error(InquireError::NotTTY),
            JournalError::Io(_)
        ));
        let err = io::Error::new(io::ErrorKind::BrokenPipe, "gone");
        assert!(matches!(
            readline_error(ReadlineError::Io(err)),
            JournalError::Io(_)
        ));
    }
}
