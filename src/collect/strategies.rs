// Per-kind collection strategies
//
// Each strategy shows the prompt's description, asks through the injected
// `Prompter`, and enforces the kind's input rules. Only the single-line blank
// case retries; every other violation is returned to the caller.

use tracing::debug;

use super::answer::{AnswerValue, Belief, Score};
use super::prompter::{is_blank, Prompter};
use crate::errors::{JournalError, Result};
use crate::prompts::{BeliefPrompt, ChoicePrompt, MultiChoicePrompt, Prompt, PromptVariant};

pub const SINGLE_LINE_WARNING: &str = "An answer is required: please enter a non-blank line.";
pub const MULTI_LINE_HINT: &str = "List your answers below (an empty line finishes):";

/// Collect the answer to one single-entry prompt.
///
/// Goal prompts need the prior goal collection and go through
/// [`collect_goals`](super::loops::collect_goals) instead.
pub fn collect(prompt: &Prompt, io: &mut dyn Prompter) -> Result<AnswerValue> {
    debug!(name = %prompt.name, kind = %prompt.kind(), "collecting");
    let answer = match &prompt.variant {
        PromptVariant::Boolean { default } => {
            AnswerValue::Flag(ask_boolean(prompt, default.unwrap_or(false), io)?)
        }
        PromptVariant::Choice(choice) => AnswerValue::Text(ask_choice(prompt, choice, io)?),
        PromptVariant::MultiChoice(multi) => {
            AnswerValue::Lines(ask_multichoice(prompt, multi, io)?)
        }
        PromptVariant::Text {} => AnswerValue::Text(ask_text(prompt, io)?),
        PromptVariant::SingleLine {} => AnswerValue::Text(ask_single_line(prompt, io)?),
        PromptVariant::MultiLine {} => AnswerValue::Lines(ask_multi_line(prompt, io)?),
        PromptVariant::Belief(belief) => AnswerValue::Belief(ask_belief(prompt, belief, io)?),
        PromptVariant::Goal(_) => {
            return Err(JournalError::Construction(format!(
                "goal prompt '{}' is collected by the goal-list loop",
                prompt.name
            )))
        }
    };
    Ok(answer)
}

pub fn ask_boolean(prompt: &Prompt, default: bool, io: &mut dyn Prompter) -> Result<bool> {
    io.describe(&prompt.description);
    io.confirm(&prompt.prompt, default)
}

pub fn ask_choice(prompt: &Prompt, choice: &ChoicePrompt, io: &mut dyn Prompter) -> Result<String> {
    io.describe(&prompt.description);
    let selection = io.select(&prompt.prompt, &choice.choices, choice.default.as_deref())?;
    choice.validate_selection(&selection)?;
    Ok(selection)
}

pub fn ask_multichoice(
    prompt: &Prompt,
    multi: &MultiChoicePrompt,
    io: &mut dyn Prompter,
) -> Result<Vec<String>> {
    io.describe(&prompt.description);
    let defaults = multi.default.clone().unwrap_or_default();
    let selections = io.multiselect(&prompt.prompt, &multi.choices, &defaults)?;
    multi.validate_selections(selections.as_slice())?;
    Ok(selections)
}

/// Buffered block; an empty block is a valid (empty) answer
pub fn ask_text(prompt: &Prompt, io: &mut dyn Prompter) -> Result<String> {
    io.describe(&prompt.description);
    io.block(&prompt.prompt)
}

/// Re-asks until the line is non-blank; never returns an empty string
pub fn ask_single_line(prompt: &Prompt, io: &mut dyn Prompter) -> Result<String> {
    io.describe(&prompt.description);
    loop {
        let line = io.line(&prompt.prompt)?;
        if !is_blank(&line) {
            return Ok(line);
        }
        io.warn(SINGLE_LINE_WARNING);
    }
}

/// Lines until the first blank one, which is consumed and dropped
pub fn ask_multi_line(prompt: &Prompt, io: &mut dyn Prompter) -> Result<Vec<String>> {
    io.describe(&prompt.description);
    io.say(&prompt.prompt);
    io.say(MULTI_LINE_HINT);

    let mut lines = Vec::new();
    loop {
        let line = io.line(">")?;
        if is_blank(&line) {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}

pub fn ask_belief(
    prompt: &Prompt,
    belief: &BeliefPrompt,
    io: &mut dyn Prompter,
) -> Result<Option<Belief>> {
    io.describe(&prompt.description);
    io.say(&prompt.prompt);
    read_belief(belief, io)
}

/// Two-step belief entry: reason, then score.
///
/// Both blank yields `None` (the end-of-list sentinel). Exactly one blank is
/// an `IncompleteEntry`; a present score must parse and sit inside the
/// prompt's scale.
pub fn read_belief(belief: &BeliefPrompt, io: &mut dyn Prompter) -> Result<Option<Belief>> {
    let reason = io.line(&belief.reason_label)?;
    let score = io.line(&belief.scale_label)?;

    match (is_blank(&reason), is_blank(&score)) {
        (true, true) => Ok(None),
        (false, true) => Err(JournalError::IncompleteEntry(format!(
            "'{}' has a reason but no score",
            reason.trim()
        ))),
        (true, false) => Err(JournalError::IncompleteEntry(format!(
            "score '{}' has no reason",
            score.trim()
        ))),
        (false, false) => Ok(Some(Belief {
            score: Score::parse(&score, belief.scale_min, belief.scale_max)?,
            reason: reason.trim().to_string(),
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::scripted::{Reply, ScriptedPrompter};
    use serde_json::json;

    fn prompt(config: serde_json::Value) -> Prompt {
        Prompt::construct(&config).unwrap()
    }

    fn free_text(kind: &str) -> Prompt {
        prompt(json!({
            "kind": kind,
            "name": "n",
            "prompt": "What happened?",
            "description": "Yesterday",
        }))
    }

    fn belief() -> Prompt {
        prompt(json!({
            "kind": "belief",
            "name": "b",
            "prompt": "Describe one thing you like about programming",
            "description": "Do you really like programming?",
        }))
    }

    #[test]
    fn test_boolean() {
        let p = prompt(json!({
            "kind": "boolean",
            "name": "slept",
            "prompt": "Did you sleep well?",
            "description": "Sleep",
        }));
        let mut io = ScriptedPrompter::new(vec![true]);
        assert_eq!(collect(&p, &mut io).unwrap(), AnswerValue::Flag(true));
    }

    #[test]
    fn test_boolean_rejects_text_reply() {
        let p = prompt(json!({
            "kind": "boolean",
            "name": "slept",
            "prompt": "Did you sleep well?",
            "description": "Sleep",
            "default": true,
        }));
        let mut io = ScriptedPrompter::new(vec!["y"]);
        assert!(matches!(
            collect(&p, &mut io),
            Err(JournalError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_choice_membership_rechecked() {
        let p = prompt(json!({
            "kind": "choice",
            "name": "mood",
            "prompt": "Mood?",
            "description": "Now",
            "choices": ["calm", "tired"],
        }));
        let mut io = ScriptedPrompter::new(vec!["calm", "angry"]);
        assert_eq!(collect(&p, &mut io).unwrap(), AnswerValue::Text("calm".into()));
        assert!(matches!(
            collect(&p, &mut io),
            Err(JournalError::InvalidSelection { .. })
        ));
    }

    #[test]
    fn test_multichoice_keeps_selection_order() {
        let p = prompt(json!({
            "kind": "multichoice",
            "name": "langs",
            "prompt": "Select from the following",
            "description": "What languages do you like?",
            "choices": ["Python", "Ruby", "Rust"],
            "default": ["Python"],
        }));
        let mut io = ScriptedPrompter::new(vec![Reply::from(vec!["Rust", "Python"])]);
        assert_eq!(
            collect(&p, &mut io).unwrap(),
            AnswerValue::Lines(vec!["Rust".into(), "Python".into()])
        );

        let mut io = ScriptedPrompter::new(vec![Reply::from(vec!["Rust", "Julia"])]);
        match collect(&p, &mut io).unwrap_err() {
            JournalError::InvalidSelection { value, .. } => assert_eq!(value, "Julia"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_text_block_may_be_empty() {
        let p = free_text("text");
        let mut io = ScriptedPrompter::new(vec!["line one\n\nline three"]);
        assert_eq!(
            collect(&p, &mut io).unwrap(),
            AnswerValue::Text("line one\n\nline three".into())
        );
        let mut io = ScriptedPrompter::new(vec![""]);
        assert_eq!(collect(&p, &mut io).unwrap(), AnswerValue::Text(String::new()));
    }

    #[test]
    fn test_single_line_retries_until_non_blank() {
        let p = free_text("singleline");
        let mut io = ScriptedPrompter::new(vec!["", "   ", "coffee"]);
        assert_eq!(ask_single_line(&p, &mut io).unwrap(), "coffee");
        let warnings = io
            .shown()
            .iter()
            .filter(|s| s.as_str() == SINGLE_LINE_WARNING)
            .count();
        assert_eq!(warnings, 2);
    }

    #[test]
    fn test_single_line_input_closed_propagates() {
        let p = free_text("singleline");
        let mut io = ScriptedPrompter::new(vec![""]);
        assert!(matches!(
            ask_single_line(&p, &mut io),
            Err(JournalError::InputClosed)
        ));
    }

    #[test]
    fn test_multi_line_stops_at_blank() {
        let p = free_text("multiline");
        let mut io = ScriptedPrompter::new(vec!["a", "b", "", "not read"]);
        assert_eq!(ask_multi_line(&p, &mut io).unwrap(), vec!["a", "b"]);
        assert_eq!(io.remaining(), 1);
    }

    #[test]
    fn test_multi_line_first_blank_is_empty() {
        let p = free_text("multiline");
        let mut io = ScriptedPrompter::new(vec![""]);
        assert!(ask_multi_line(&p, &mut io).unwrap().is_empty());
    }

    #[test]
    fn test_belief_entry() {
        let p = belief();
        let mut io = ScriptedPrompter::new(vec!["it's fun", "8"]);
        let answer = collect(&p, &mut io).unwrap();
        assert_eq!(
            answer,
            AnswerValue::Belief(Some(Belief {
                score: Score::Integer(8),
                reason: "it's fun".into(),
            }))
        );
    }

    #[test]
    fn test_belief_both_blank_is_no_entry() {
        let p = belief();
        let mut io = ScriptedPrompter::new(vec!["", ""]);
        assert_eq!(collect(&p, &mut io).unwrap(), AnswerValue::Belief(None));
    }

    #[test]
    fn test_belief_one_blank_is_incomplete() {
        let labels = BeliefPrompt::default();
        let mut io = ScriptedPrompter::new(vec!["tired", ""]);
        assert!(matches!(
            read_belief(&labels, &mut io),
            Err(JournalError::IncompleteEntry(_))
        ));
        let mut io = ScriptedPrompter::new(vec!["", "4"]);
        assert!(matches!(
            read_belief(&labels, &mut io),
            Err(JournalError::IncompleteEntry(_))
        ));
    }

    #[test]
    fn test_belief_bad_score() {
        let labels = BeliefPrompt::default();
        let mut io = ScriptedPrompter::new(vec!["tired", "11"]);
        assert!(matches!(
            read_belief(&labels, &mut io),
            Err(JournalError::InvalidScore { .. })
        ));
        let mut io = ScriptedPrompter::new(vec!["tired", "abc"]);
        assert!(matches!(
            read_belief(&labels, &mut io),
            Err(JournalError::InvalidScore { .. })
        ));
    }

    #[test]
    fn test_belief_asks_reason_first() {
        let labels = BeliefPrompt::default();
        let mut io = ScriptedPrompter::new(vec!["because", "7.5"]);
        let belief = read_belief(&labels, &mut io).unwrap().unwrap();
        assert_eq!(belief.score, Score::Decimal(7.5));
        assert_eq!(io.shown(), &[labels.reason_label.clone(), labels.scale_label.clone()]);
    }

    #[test]
    fn test_goal_prompt_not_single_entry() {
        let p = prompt(json!({
            "kind": "goal",
            "name": "goals",
            "prompt": "Goal name?",
            "description": "Plans",
            "priority_label": "Priority (1-10)?",
            "effort_label": "Effort (minutes)?",
            "desc_prompt_label": "Describe it",
        }));
        let mut io = ScriptedPrompter::default();
        assert!(matches!(
            collect(&p, &mut io),
            Err(JournalError::Construction(_))
        ));
    }
}
