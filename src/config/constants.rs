// Project-wide constants
//
// Centralised here so default labels, ranges and paths have one source of
// truth. Import via `use crate::config::constants::*;`.

/// Directory under $HOME holding settings, goals and entries.
pub const JOURNAL_DIR: &str = ".journal";

/// Settings file inside `JOURNAL_DIR`.
pub const SETTINGS_FILE: &str = "config.toml";

/// Goal collection file inside `JOURNAL_DIR`, rewritten after every run.
pub const GOALS_FILE: &str = "goals.toml";

/// Directory inside `JOURNAL_DIR` receiving one answer document per day.
pub const ENTRIES_DIR: &str = "entries";

/// How many multiline prompts a run draws from the configured pool.
pub const DEFAULT_SAMPLE_MULTILINE: usize = 3;

pub const DEFAULT_SCALE_LABEL: &str = "How strong is this belief?";
pub const DEFAULT_REASON_LABEL: &str = "Why?";

/// Inclusive bounds of a belief score unless the prompt overrides them.
pub const DEFAULT_SCALE_MIN: i64 = 1;
pub const DEFAULT_SCALE_MAX: i64 = 10;

/// Inclusive goal priority range (1 = low, 10 = urgent).
pub const GOAL_PRIORITY_MIN: i64 = 1;
pub const GOAL_PRIORITY_MAX: i64 = 10;

/// Inclusive goal effort range, in minutes.
pub const GOAL_EFFORT_MIN: i64 = 1;
pub const GOAL_EFFORT_MAX: i64 = 60;
