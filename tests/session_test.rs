// Integration tests for full journal runs driven by scripted replies

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use journal::collect::{AnswerValue, Reply, Score, ScriptedPrompter};
use journal::errors::JournalError;
use journal::goals::{Goal, GoalBook};
use journal::session::{run_session, PromptBook, RunOptions};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fs;
use tempfile::TempDir;

const BOOK: &str = r#"
[goals.goals]
prompt = "Goal name"
description = "Goals carry over"
choices = ["Read more"]
desc_prompt_label = "Describe it"
priority_label = "Priority"
effort_label = "Effort"

[bool.slept]
prompt = "Did you sleep well?"
description = "Sleep"

[choice.mood]
prompt = "Mood?"
description = "Mood"
choices = ["Calm", "Tired"]
default = "Calm"

[multichoice.focus]
prompt = "Focus areas?"
description = "Focus"
choices = ["Work", "Health"]

[text.free]
prompt = "Free write"
description = "Anything"

[singleline.intention]
prompt = "One intention?"
description = "Intention"

[multiline.grateful]
prompt = "Grateful for?"
description = "Gratitude"

[multiline.wins]
prompt = "Wins?"
description = "Wins"

[multiline.worries]
prompt = "Worries?"
description = "Worries"

[belief.habit]
prompt = "Does journaling help?"
description = "Habit check"

[belieflist.career]
prompt = "Healthy beliefs about work?"
description = "Beliefs"
"#;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 26).unwrap()
}

fn goal(name: &str) -> Goal {
    Goal {
        name: name.to_string(),
        description: format!("{} regularly", name),
        priority: 5,
        effort: 20,
        date: Utc::now(),
    }
}

fn full_run_replies() -> Vec<Reply> {
    vec![
        Reply::from(true),
        Reply::from("Tired"),
        Reply::from(vec!["Health"]),
        Reply::from("slept late\nfelt fine"),
        // blank single line is re-asked
        Reply::from(""),
        Reply::from("ship it"),
        // two sampled multiline prompts
        Reply::from("first"),
        Reply::from(""),
        Reply::from("second"),
        Reply::from(""),
        // single belief: reason, score
        Reply::from("it helps"),
        Reply::from("8"),
        // belief list: one entry, then the blank sentinel
        Reply::from("craft matters"),
        Reply::from("9.5"),
        Reply::from(""),
        Reply::from(""),
        // goals: keep one prior goal, add one new
        Reply::from(vec!["Stretch"]),
        Reply::from("Run"),
        Reply::from("5k loop"),
        Reply::from("3"),
        Reply::from("30"),
        Reply::from(""),
        Reply::from(""),
        Reply::from(""),
        Reply::from(""),
    ]
}

#[test]
fn test_full_run_records_every_section_in_order() -> Result<()> {
    let book = PromptBook::parse(BOOK)?;
    let prior = vec![goal("Read"), goal("Stretch")];
    let options = RunOptions {
        sample_multiline: 2,
        ..RunOptions::default()
    };
    let mut rng = SmallRng::seed_from_u64(42);
    let mut io = ScriptedPrompter::new(full_run_replies());

    let outcome = run_session(&book, &prior, &options, &mut rng, &mut io, date())?;
    assert_eq!(io.remaining(), 0);

    let names: Vec<&str> = outcome
        .transcript
        .entries()
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names.len(), 10);
    assert_eq!(&names[..5], &["slept", "mood", "focus", "free", "intention"]);
    assert_eq!(&names[7..], &["habit", "career", "goals"]);
    for sampled in &names[5..7] {
        assert!(["grateful", "wins", "worries"].contains(sampled));
    }
    assert_ne!(names[5], names[6]);

    let entries = outcome.transcript.entries();
    assert_eq!(entries[0].answer, AnswerValue::Flag(true));
    assert_eq!(entries[1].answer, AnswerValue::Text("Tired".to_string()));
    assert_eq!(entries[4].answer, AnswerValue::Text("ship it".to_string()));
    assert_eq!(entries[5].answer, AnswerValue::Lines(vec!["first".to_string()]));
    match &entries[8].answer {
        AnswerValue::Beliefs(beliefs) => {
            assert_eq!(beliefs.len(), 1);
            assert_eq!(beliefs[0].score, Score::Decimal(9.5));
        }
        other => panic!("unexpected answer {:?}", other),
    }

    // new goals first, then the kept prior goal
    let goals = outcome.goals.expect("book has a goal prompt");
    let goal_names: Vec<&str> = goals.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(goal_names, vec!["Run", "Stretch"]);
    assert!(io.shown().iter().any(|s| s == "Ideas: Read more"));
    Ok(())
}

#[test]
fn test_same_seed_samples_same_prompts() -> Result<()> {
    let book = PromptBook::parse(BOOK)?;
    let options = RunOptions {
        sample_multiline: 2,
        ..RunOptions::default()
    };

    let mut sampled = Vec::new();
    for _ in 0..2 {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut io = ScriptedPrompter::new(full_run_replies());
        let outcome = run_session(&book, &[goal("Read"), goal("Stretch")], &options, &mut rng, &mut io, date())?;
        let names: Vec<String> = outcome.transcript.entries()[5..7]
            .iter()
            .map(|e| e.name.clone())
            .collect();
        sampled.push(names);
    }
    assert_eq!(sampled[0], sampled[1]);
    Ok(())
}

#[test]
fn test_book_without_goal_prompt_leaves_goals_untouched() -> Result<()> {
    let book = PromptBook::parse(
        r#"
[bool.slept]
prompt = "Slept?"
description = "Sleep"
"#,
    )?;
    let mut rng = SmallRng::seed_from_u64(1);
    let mut io = ScriptedPrompter::new([false]);

    let outcome = run_session(&book, &[goal("Read")], &RunOptions::default(), &mut rng, &mut io, date())?;
    assert!(outcome.goals.is_none());
    assert_eq!(outcome.transcript.len(), 1);
    Ok(())
}

#[test]
fn test_sample_larger_than_pool_asks_every_multiline_prompt() -> Result<()> {
    let book = PromptBook::parse(
        r#"
[multiline.a]
prompt = "A?"
description = "d"

[multiline.b]
prompt = "B?"
description = "d"
"#,
    )?;
    let options = RunOptions {
        sample_multiline: 5,
        ..RunOptions::default()
    };
    let mut rng = SmallRng::seed_from_u64(3);
    let mut io = ScriptedPrompter::new(["x", "", "y", ""]);

    let outcome = run_session(&book, &[], &options, &mut rng, &mut io, date())?;
    assert_eq!(outcome.transcript.len(), 2);
    Ok(())
}

#[test]
fn test_invalid_answer_aborts_run() -> Result<()> {
    let book = PromptBook::parse(
        r#"
[belief.habit]
prompt = "Does journaling help?"
description = "d"
"#,
    )?;
    let mut rng = SmallRng::seed_from_u64(1);
    let mut io = ScriptedPrompter::new(["it helps", "11"]);

    let err = run_session(&book, &[], &RunOptions::default(), &mut rng, &mut io, date()).unwrap_err();
    assert!(matches!(err, JournalError::InvalidScore { .. }));
    Ok(())
}

#[test]
fn test_running_out_of_input_closes_run() -> Result<()> {
    let book = PromptBook::parse(BOOK)?;
    let mut rng = SmallRng::seed_from_u64(1);
    let mut io = ScriptedPrompter::new([true]);

    let err = run_session(&book, &[], &RunOptions::default(), &mut rng, &mut io, date()).unwrap_err();
    assert!(matches!(err, JournalError::InputClosed));
    Ok(())
}

#[test]
fn test_outcome_persists_transcript_and_goals() -> Result<()> {
    let dir = TempDir::new()?;
    let goals_path = dir.path().join("goals.toml");
    let entries_dir = dir.path().join("entries");

    let mut goal_book = GoalBook::load(goals_path.clone())?;
    assert!(goal_book.goals().is_empty());

    let book = PromptBook::parse(
        r#"
[goals.goals]
prompt = "Goal name"
description = "d"
desc_prompt_label = "Describe it"
priority_label = "Priority"
effort_label = "Effort"
"#,
    )?;
    let mut rng = SmallRng::seed_from_u64(1);
    let mut io = ScriptedPrompter::new(["Read", "Two chapters", "4", "25", "", "", "", ""]);
    let outcome = run_session(&book, goal_book.goals(), &RunOptions::default(), &mut rng, &mut io, date())?;

    let first = outcome.transcript.save(&entries_dir)?;
    let second = outcome.transcript.save(&entries_dir)?;
    assert!(first.ends_with("2025-05-26.json"));
    assert!(second.ends_with("2025-05-26-2.json"));

    let saved: serde_json::Value = serde_json::from_str(&fs::read_to_string(&first)?)?;
    assert_eq!(saved["date"], "2025-05-26");
    assert_eq!(saved["entries"][0]["answer"][0]["name"], "Read");

    goal_book.replace_all(outcome.goals.unwrap_or_default());
    goal_book.save()?;

    let reloaded = GoalBook::load(goals_path)?;
    assert_eq!(reloaded.goals().len(), 1);
    assert_eq!(reloaded.goals()[0].priority, 4);
    assert_eq!(reloaded.goals()[0].effort, 25);
    Ok(())
}
