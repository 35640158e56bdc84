// Configuration structs

use serde::Deserialize;
use std::path::PathBuf;

use super::constants::{DEFAULT_SAMPLE_MULTILINE, ENTRIES_DIR, GOALS_FILE, JOURNAL_DIR};
use crate::prompts::BeliefLabels;
use crate::session::RunOptions;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Prompt document; the bundled prompt set is used when unset
    pub prompts_path: Option<PathBuf>,

    /// Goal collection, rewritten after every run that has a goal prompt
    pub goals_path: PathBuf,

    /// Directory receiving one answer document per day
    pub entries_dir: PathBuf,

    /// Multiline prompts drawn per run
    pub sample_multiline: usize,

    /// Scale / reason labels shared by every belief-list loop
    pub belief_list_labels: Option<BeliefLabels>,
}

impl Default for Settings {
    fn default() -> Self {
        let home = journal_home();
        Self {
            prompts_path: None,
            goals_path: home.join(GOALS_FILE),
            entries_dir: home.join(ENTRIES_DIR),
            sample_multiline: DEFAULT_SAMPLE_MULTILINE,
            belief_list_labels: None,
        }
    }
}

impl Settings {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            sample_multiline: self.sample_multiline,
            belief_list_labels: self.belief_list_labels.clone(),
        }
    }
}

/// `~/.journal`, or `./.journal` when no home directory is known
pub fn journal_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(JOURNAL_DIR)
}
