// Goal record with priority / effort scoring

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::constants::{
    GOAL_EFFORT_MAX, GOAL_EFFORT_MIN, GOAL_PRIORITY_MAX, GOAL_PRIORITY_MIN,
};
use crate::errors::{JournalError, Result};

/// A tracked objective, persisted across runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    pub description: String,
    /// 1 (whenever) to 10 (urgent)
    pub priority: i64,
    /// Estimated effort in minutes, 1 to 60
    pub effort: i64,
    /// When the goal was first entered
    pub date: DateTime<Utc>,
}

impl Goal {
    /// Build a goal from four raw answers. All fields are required; the
    /// whole entry is rejected if any one of them is blank or out of range.
    pub fn from_entry(
        name: &str,
        description: &str,
        priority: &str,
        effort: &str,
        date: DateTime<Utc>,
    ) -> Result<Self> {
        let goal = Goal {
            name: required("name", name)?,
            description: required("description", description)?,
            priority: parse_integer("priority", priority)?,
            effort: parse_integer("effort", effort)?,
            date,
        };
        goal.validate()?;
        Ok(goal)
    }

    /// Check the invariants every stored goal must hold
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(JournalError::InvalidGoalFields("name is blank".to_string()));
        }
        if !(GOAL_PRIORITY_MIN..=GOAL_PRIORITY_MAX).contains(&self.priority) {
            return Err(JournalError::InvalidGoalFields(format!(
                "'{}': priority {} is outside {}..={}",
                self.name, self.priority, GOAL_PRIORITY_MIN, GOAL_PRIORITY_MAX
            )));
        }
        if !(GOAL_EFFORT_MIN..=GOAL_EFFORT_MAX).contains(&self.effort) {
            return Err(JournalError::InvalidGoalFields(format!(
                "'{}': effort {} is outside {}..={}",
                self.name, self.effort, GOAL_EFFORT_MIN, GOAL_EFFORT_MAX
            )));
        }
        Ok(())
    }
}

/// Goals are picked by name across runs, so a collection may not repeat one
pub fn ensure_unique_names(goals: &[Goal]) -> Result<()> {
    let mut seen = HashSet::new();
    for goal in goals {
        if !seen.insert(goal.name.as_str()) {
            return Err(JournalError::InvalidGoalFields(format!(
                "duplicate goal name '{}'",
                goal.name
            )));
        }
    }
    Ok(())
}

fn required(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(JournalError::InvalidGoalFields(format!("{} is blank", field)));
    }
    Ok(trimmed.to_string())
}

fn parse_integer(field: &str, value: &str) -> Result<i64> {
    let trimmed = required(field, value)?;
    trimmed.parse::<i64>().map_err(|_| {
        JournalError::InvalidGoalFields(format!("{} '{}' is not a whole number", field, trimmed))
    })
}
