// Answer aggregation
// One document per calendar day

use chrono::NaiveDate;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::collect::AnswerValue;
use crate::errors::Result;
use crate::prompts::Prompt;

/// One answered prompt
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub name: String,
    pub question: String,
    pub answer: AnswerValue,
}

/// Ordered answers of a run, handed whole to persistence
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    date: NaiveDate,
    entries: Vec<Entry>,
}

impl Transcript {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, prompt: &Prompt, answer: AnswerValue) {
        self.entries.push(Entry {
            name: prompt.name.clone(),
            question: prompt.prompt.clone(),
            answer,
        });
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Flat (question, answer) pairs in the order they were asked
    pub fn pairs(&self) -> Vec<(&str, &AnswerValue)> {
        self.entries
            .iter()
            .map(|entry| (entry.question.as_str(), &entry.answer))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write `<dir>/<YYYY-MM-DD>.json`; a second run on the same day gets `-2`, `-3`, ...
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = next_free_path(dir, self.date);
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&path, contents)?;
        info!(entries = self.entries.len(), path = %path.display(), "saved journal entry");
        Ok(path)
    }
}

fn next_free_path(dir: &Path, date: NaiveDate) -> PathBuf {
    let stem = date.format("%Y-%m-%d").to_string();
    let first = dir.join(format!("{}.json", stem));
    if !first.exists() {
        return first;
    }
    (2..)
        .map(|n| dir.join(format!("{}-{}.json", stem, n)))
        .find(|path| !path.exists())
        .unwrap_or(first)
}
