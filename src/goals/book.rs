// Goal collection
// Loaded from ~/.journal/goals.toml and rewritten after each run

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::goal::{ensure_unique_names, Goal};
use crate::errors::Result;

#[derive(Debug, Deserialize, Serialize, Default)]
struct GoalFile {
    #[serde(default)]
    goals: Vec<Goal>,
}

/// Manages the persisted goal file
#[derive(Debug)]
pub struct GoalBook {
    path: PathBuf,
    goals: Vec<Goal>,
}

impl GoalBook {
    /// Load goals from a TOML file (empty collection if the file doesn't exist).
    ///
    /// Every stored goal is validated; one bad record fails the whole load.
    pub fn load(path: PathBuf) -> Result<Self> {
        let goals = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let file: GoalFile = toml::from_str(&contents)?;
            for goal in &file.goals {
                goal.validate()?;
            }
            ensure_unique_names(&file.goals)?;
            file.goals
        } else {
            debug!(path = %path.display(), "no goal file yet");
            Vec::new()
        };
        Ok(Self { path, goals })
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the whole collection (new and re-selected goals supersede the old set)
    pub fn replace_all(&mut self, goals: Vec<Goal>) {
        self.goals = goals;
    }

    pub fn save(&self) -> Result<()> {
        let file = GoalFile {
            goals: self.goals.clone(),
        };
        let contents = toml::to_string_pretty(&file)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, contents)?;
        info!(count = self.goals.len(), path = %self.path.display(), "saved goals");
        Ok(())
    }
}
