// Collection layer
// Strategies and loops that turn validated prompts into answers

mod answer;
pub mod loops;
mod prompter;
pub mod scripted;
pub mod strategies;

pub use answer::{AnswerValue, Belief, Score};
pub use loops::{collect_beliefs, collect_goals, reselect_goals};
pub use prompter::{is_blank, Prompter};
pub use scripted::{Reply, ScriptedPrompter};
pub use strategies::{collect, read_belief};
