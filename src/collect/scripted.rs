// Scripted prompter
// Answers from a queue instead of a terminal
//
// Used by `--replay <file.json>` for non-interactive runs, and by the tests.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::prompter::Prompter;
use crate::errors::{JournalError, Result};

/// One queued answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reply {
    Flag(bool),
    Text(String),
    List(Vec<String>),
}

impl Reply {
    fn shape(&self) -> &'static str {
        match self {
            Reply::Flag(_) => "boolean",
            Reply::Text(_) => "text",
            Reply::List(_) => "list",
        }
    }
}

impl From<&str> for Reply {
    fn from(text: &str) -> Self {
        Reply::Text(text.to_string())
    }
}

impl From<bool> for Reply {
    fn from(flag: bool) -> Self {
        Reply::Flag(flag)
    }
}

impl From<Vec<&str>> for Reply {
    fn from(items: Vec<&str>) -> Self {
        Reply::List(items.into_iter().map(String::from).collect())
    }
}

#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    replies: VecDeque<Reply>,
    shown: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, R>(replies: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Reply>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            shown: Vec::new(),
        }
    }

    /// Load replies from a JSON array, e.g. `[true, "a line", ["x", "y"]]`
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let replies: Vec<Reply> = serde_json::from_str(&contents)?;
        debug!(count = replies.len(), path = %path.display(), "loaded scripted replies");
        Ok(Self::new(replies))
    }

    /// Everything shown to the "user" so far, in order
    pub fn shown(&self) -> &[String] {
        &self.shown
    }

    pub fn remaining(&self) -> usize {
        self.replies.len()
    }

    fn next(&mut self) -> Result<Reply> {
        self.replies.pop_front().ok_or(JournalError::InputClosed)
    }

    fn next_text(&mut self) -> Result<String> {
        match self.next()? {
            Reply::Text(text) => Ok(text),
            other => Err(JournalError::TypeMismatch {
                expected: "text",
                found: other.shape(),
            }),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn describe(&mut self, text: &str) {
        self.shown.push(text.to_string());
    }

    fn say(&mut self, text: &str) {
        self.shown.push(text.to_string());
    }

    fn warn(&mut self, text: &str) {
        self.shown.push(text.to_string());
    }

    fn line(&mut self, label: &str) -> Result<String> {
        self.shown.push(label.to_string());
        self.next_text()
    }

    fn block(&mut self, label: &str) -> Result<String> {
        self.shown.push(label.to_string());
        self.next_text()
    }

    fn confirm(&mut self, label: &str, _default: bool) -> Result<bool> {
        self.shown.push(label.to_string());
        match self.next()? {
            Reply::Flag(flag) => Ok(flag),
            other => Err(JournalError::TypeMismatch {
                expected: "boolean",
                found: other.shape(),
            }),
        }
    }

    fn select(&mut self, label: &str, _choices: &[String], _default: Option<&str>) -> Result<String> {
        self.shown.push(label.to_string());
        self.next_text()
    }

    fn multiselect(
        &mut self,
        label: &str,
        _choices: &[String],
        _defaults: &[String],
    ) -> Result<Vec<String>> {
        self.shown.push(label.to_string());
        match self.next()? {
            Reply::List(items) => Ok(items),
            other => Err(JournalError::TypeMismatch {
                expected: "list",
                found: other.shape(),
            }),
        }
    }
}
