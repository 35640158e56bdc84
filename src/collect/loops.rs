// Repeated-entry loops: belief lists and goal lists
//
// Both repeat a single-entry step until the user leaves every field blank.

use chrono::Utc;
use tracing::{debug, info};

use super::answer::Belief;
use super::prompter::{is_blank, Prompter};
use super::strategies::read_belief;
use crate::errors::{JournalError, Result};
use crate::goals::{ensure_unique_names, Goal};
use crate::prompts::{ensure_member, BeliefLabels, GoalPrompt, Prompt};

pub const RESELECT_LABEL: &str = "Which goals are you keeping?";

/// Collect scored beliefs until an all-blank entry.
///
/// `labels` overrides the prompt's own scale/reason labels for every entry.
pub fn collect_beliefs(
    prompt: &Prompt,
    labels: Option<&BeliefLabels>,
    io: &mut dyn Prompter,
) -> Result<Vec<Belief>> {
    let belief = prompt.as_belief().ok_or_else(|| wrong_kind(prompt, "belief"))?;
    let belief = match labels {
        Some(labels) => belief.with_labels(labels),
        None => belief.clone(),
    };

    io.describe(&prompt.description);
    io.say(&prompt.prompt);

    let mut beliefs = Vec::new();
    while let Some(entry) = read_belief(&belief, io)? {
        beliefs.push(entry);
    }
    debug!(name = %prompt.name, count = beliefs.len(), "belief list finished");
    Ok(beliefs)
}

/// Goal list: re-select prior goals, then enter new ones.
///
/// New goals come first, followed by the re-selected prior goals.
pub fn collect_goals(prompt: &Prompt, prior: &[Goal], io: &mut dyn Prompter) -> Result<Vec<Goal>> {
    let goal_prompt = prompt.as_goal().ok_or_else(|| wrong_kind(prompt, "goal"))?;

    io.describe(&prompt.description);
    let kept = reselect_goals(prior, io)?;

    if let Some(suggestions) = goal_prompt.choices.as_ref().filter(|s| !s.is_empty()) {
        io.say(&format!("Ideas: {}", suggestions.join(", ")));
    }

    let mut goals: Vec<Goal> = Vec::new();
    while let Some(goal) = read_goal(&prompt.prompt, goal_prompt, io)? {
        if prior.iter().chain(&goals).any(|known| known.name == goal.name) {
            return Err(JournalError::InvalidGoalFields(format!(
                "a goal named '{}' already exists",
                goal.name
            )));
        }
        goals.push(goal);
    }
    info!(new = goals.len(), kept = kept.len(), "goal list collected");

    goals.extend(kept);
    Ok(goals)
}

/// Offer the prior goals by name; selected goals carry forward unchanged,
/// in their stored order.
pub fn reselect_goals(prior: &[Goal], io: &mut dyn Prompter) -> Result<Vec<Goal>> {
    if prior.is_empty() {
        return Ok(Vec::new());
    }
    ensure_unique_names(prior)?;

    let names: Vec<String> = prior.iter().map(|goal| goal.name.clone()).collect();
    let selected = io.multiselect(RESELECT_LABEL, &names, &[])?;
    for name in &selected {
        ensure_member(name, &names)?;
    }

    Ok(prior
        .iter()
        .filter(|goal| selected.contains(&goal.name))
        .cloned()
        .collect())
}

/// One goal entry: name, description, priority, effort. `None` when all four are blank.
fn read_goal(name_label: &str, labels: &GoalPrompt, io: &mut dyn Prompter) -> Result<Option<Goal>> {
    let name = io.line(name_label)?;
    let description = io.line(&labels.desc_prompt_label)?;
    let priority = io.line(&labels.priority_label)?;
    let effort = io.line(&labels.effort_label)?;

    if [&name, &description, &priority, &effort]
        .iter()
        .all(|field| is_blank(field))
    {
        return Ok(None);
    }
    Goal::from_entry(&name, &description, &priority, &effort, Utc::now()).map(Some)
}

fn wrong_kind(prompt: &Prompt, expected: &str) -> JournalError {
    JournalError::Construction(format!(
        "prompt '{}' is a {} prompt, not a {} prompt",
        prompt.name,
        prompt.kind(),
        expected
    ))
}
