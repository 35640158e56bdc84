// Run loop
// Drives every section of the prompt book in order
//
// Single-threaded and fail-fast: the first error ends the run and nothing
// collected so far is persisted.

use chrono::NaiveDate;
use rand::Rng;
use tracing::{debug, info};

use super::book::{PromptBook, Section};
use super::sample::sample_prompts;
use super::transcript::Transcript;
use crate::collect::{collect, collect_beliefs, collect_goals, AnswerValue, Prompter};
use crate::config::constants::DEFAULT_SAMPLE_MULTILINE;
use crate::errors::Result;
use crate::goals::Goal;
use crate::prompts::BeliefLabels;

#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Multiline prompts drawn per run
    pub sample_multiline: usize,
    /// Label overrides applied to every belief-list loop
    pub belief_list_labels: Option<BeliefLabels>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            sample_multiline: DEFAULT_SAMPLE_MULTILINE,
            belief_list_labels: None,
        }
    }
}

#[derive(Debug)]
pub struct RunOutcome {
    pub transcript: Transcript,
    /// Goal list to persist; `None` when the book has no goal prompt
    pub goals: Option<Vec<Goal>>,
}

pub fn run_session<R>(
    book: &PromptBook,
    prior_goals: &[Goal],
    options: &RunOptions,
    rng: &mut R,
    io: &mut dyn Prompter,
    date: NaiveDate,
) -> Result<RunOutcome>
where
    R: Rng + ?Sized,
{
    info!(prompts = book.len(), %date, "starting journal run");
    let mut transcript = Transcript::new(date);
    let mut goals = None;

    for section in Section::ALL {
        let prompts = book.prompts(section);
        if prompts.is_empty() {
            continue;
        }
        debug!(section = section.key(), count = prompts.len(), "running section");

        match section {
            Section::MultiLine => {
                for prompt in sample_prompts(prompts, options.sample_multiline, rng) {
                    let answer = collect(prompt, io)?;
                    transcript.record(prompt, answer);
                }
            }
            Section::BeliefList => {
                for prompt in prompts {
                    let beliefs =
                        collect_beliefs(prompt, options.belief_list_labels.as_ref(), io)?;
                    transcript.record(prompt, AnswerValue::Beliefs(beliefs));
                }
            }
            Section::Goals => {
                for prompt in prompts {
                    let list = collect_goals(prompt, prior_goals, io)?;
                    transcript.record(prompt, AnswerValue::Goals(list.clone()));
                    goals = Some(list);
                }
            }
            _ => {
                for prompt in prompts {
                    let answer = collect(prompt, io)?;
                    transcript.record(prompt, answer);
                }
            }
        }
    }

    info!(answers = transcript.len(), "journal run complete");
    Ok(RunOutcome { transcript, goals })
}
