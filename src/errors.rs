// Error taxonomy for prompt validation and collection
//
// Every variant except `InputClosed` and the wrapped I/O / parse errors maps
// onto a rule a prompt or an answer broke. All of them are fatal to a run.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JournalError {
    /// Prompt configuration is structurally wrong (missing field, wrong type)
    #[error("{kind} prompt: field '{field}' {reason}")]
    SchemaViolation {
        kind: String,
        field: String,
        reason: String,
    },

    /// Prompt configuration names a kind (or section) nobody knows
    #[error("cannot construct prompt: {0}")]
    Construction(String),

    #[error("invalid selection '{value}', must be one of {choices:?}")]
    InvalidSelection { value: String, choices: Vec<String> },

    #[error("invalid score '{input}': {reason}")]
    InvalidScore { input: String, reason: String },

    /// Exactly one half of a two-part entry was left blank
    #[error("incomplete entry: {0}")]
    IncompleteEntry(String),

    #[error("invalid goal: {0}")]
    InvalidGoalFields(String),

    /// The input source answered with a different shape than was asked for
    #[error("expected a {expected} answer, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("input closed before the question was answered")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl JournalError {
    pub(crate) fn schema(
        kind: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::SchemaViolation {
            kind: kind.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, JournalError>;
