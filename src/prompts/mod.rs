// Prompt definitions
// Schema registry plus the typed variants built from it

pub mod schema;
mod variant;

pub use schema::{validate, FieldSpec, FieldType, PromptKind, PromptSchema, KIND_FIELD};
pub use variant::{
    BeliefLabels, BeliefPrompt, ChoicePrompt, GoalPrompt, MultiChoicePrompt, Prompt, PromptVariant,
};
pub(crate) use variant::ensure_member;
