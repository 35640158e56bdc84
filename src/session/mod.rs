// Journal session
// Prompt book loading, multiline sampling, the run loop and its transcript

mod book;
mod run;
mod sample;
mod transcript;

pub use book::{PromptBook, Section};
pub use run::{run_session, RunOptions, RunOutcome};
pub use sample::sample_prompts;
pub use transcript::{Entry, Transcript};
