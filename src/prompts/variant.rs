// Typed prompt variants
//
// A `Prompt` is built from one raw configuration table: the discriminator picks
// the variant, the schema registry checks the field set, then serde fills the
// typed payload and the kind-specific semantic checks run.

use serde::Deserialize;
use serde_json::Value;

use super::schema::{PromptKind, PromptSchema, KIND_FIELD};
use crate::config::constants::{
    DEFAULT_REASON_LABEL, DEFAULT_SCALE_LABEL, DEFAULT_SCALE_MAX, DEFAULT_SCALE_MIN,
};
use crate::errors::{JournalError, Result};

/// Fields every prompt carries
#[derive(Debug, Clone, PartialEq, Deserialize)]
struct PromptHeader {
    name: String,
    prompt: String,
    description: String,
}

/// A validated prompt, ready for collection
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    /// Unique identifier; answers are recorded under it
    pub name: String,
    /// The question shown to the user
    pub prompt: String,
    /// Context shown before the question
    pub description: String,
    pub variant: PromptVariant,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PromptVariant {
    Boolean {
        #[serde(default)]
        default: Option<bool>,
    },
    Choice(ChoicePrompt),
    MultiChoice(MultiChoicePrompt),
    /// Buffered multi-line block
    Text {},
    /// One non-blank line
    SingleLine {},
    /// Lines until a blank one
    MultiLine {},
    Belief(BeliefPrompt),
    Goal(GoalPrompt),
}

impl PromptVariant {
    pub fn kind(&self) -> PromptKind {
        match self {
            PromptVariant::Boolean { .. } => PromptKind::Boolean,
            PromptVariant::Choice(_) => PromptKind::Choice,
            PromptVariant::MultiChoice(_) => PromptKind::MultiChoice,
            PromptVariant::Text {} => PromptKind::Text,
            PromptVariant::SingleLine {} => PromptKind::SingleLine,
            PromptVariant::MultiLine {} => PromptKind::MultiLine,
            PromptVariant::Belief(_) => PromptKind::Belief,
            PromptVariant::Goal(_) => PromptKind::Goal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChoicePrompt {
    pub choices: Vec<String>,
    #[serde(default)]
    pub default: Option<String>,
}

impl ChoicePrompt {
    /// Exact, case-sensitive membership check
    pub fn validate_selection(&self, selection: &str) -> Result<()> {
        ensure_member(selection, &self.choices)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MultiChoicePrompt {
    pub choices: Vec<String>,
    #[serde(default)]
    pub default: Option<Vec<String>>,
}

impl MultiChoicePrompt {
    /// Fails on the first selection that is not one of the choices
    pub fn validate_selections<S: AsRef<str>>(&self, selections: &[S]) -> Result<()> {
        selections
            .iter()
            .try_for_each(|selection| ensure_member(selection.as_ref(), &self.choices))
    }
}

pub(crate) fn ensure_member(value: &str, choices: &[String]) -> Result<()> {
    if choices.iter().any(|choice| choice == value) {
        Ok(())
    } else {
        Err(JournalError::InvalidSelection {
            value: value.to_string(),
            choices: choices.to_vec(),
        })
    }
}

/// Labels shown by the two-step belief dialogue
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BeliefLabels {
    #[serde(default)]
    pub scale_label: Option<String>,
    #[serde(default)]
    pub reason_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BeliefPrompt {
    #[serde(default = "default_scale_label")]
    pub scale_label: String,
    #[serde(default = "default_reason_label")]
    pub reason_label: String,
    #[serde(default = "default_scale_min")]
    pub scale_min: i64,
    #[serde(default = "default_scale_max")]
    pub scale_max: i64,
}

fn default_scale_label() -> String {
    DEFAULT_SCALE_LABEL.to_string()
}

fn default_reason_label() -> String {
    DEFAULT_REASON_LABEL.to_string()
}

fn default_scale_min() -> i64 {
    DEFAULT_SCALE_MIN
}

fn default_scale_max() -> i64 {
    DEFAULT_SCALE_MAX
}

impl Default for BeliefPrompt {
    fn default() -> Self {
        Self {
            scale_label: default_scale_label(),
            reason_label: default_reason_label(),
            scale_min: DEFAULT_SCALE_MIN,
            scale_max: DEFAULT_SCALE_MAX,
        }
    }
}

impl BeliefPrompt {
    /// Copy of this prompt with any overridden labels swapped in
    pub fn with_labels(&self, labels: &BeliefLabels) -> Self {
        Self {
            scale_label: labels
                .scale_label
                .clone()
                .unwrap_or_else(|| self.scale_label.clone()),
            reason_label: labels
                .reason_label
                .clone()
                .unwrap_or_else(|| self.reason_label.clone()),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GoalPrompt {
    /// Suggested goal names, shown before new goals are entered
    #[serde(default)]
    pub choices: Option<Vec<String>>,
    pub priority_label: String,
    pub effort_label: String,
    pub desc_prompt_label: String,
}

impl Prompt {
    /// Validate a raw configuration table and build the typed prompt.
    ///
    /// A missing or non-string discriminator and any structural problem fail
    /// with `SchemaViolation`; an unknown discriminator fails with
    /// `Construction`. Choice defaults outside the choice set fail with
    /// `InvalidSelection`.
    pub fn construct(config: &Value) -> Result<Self> {
        let map = config
            .as_object()
            .ok_or_else(|| JournalError::schema("prompt", "<root>", "must be a table of fields"))?;

        let tag = match map.get(KIND_FIELD) {
            Some(Value::String(tag)) => tag,
            Some(_) => return Err(JournalError::schema("prompt", KIND_FIELD, "must be a string")),
            None => return Err(JournalError::schema("prompt", KIND_FIELD, "is required")),
        };
        let kind = PromptKind::from_tag(tag)
            .ok_or_else(|| JournalError::Construction(format!("unknown prompt kind '{}'", tag)))?;

        PromptSchema::for_kind(kind).validate(map)?;

        let header: PromptHeader = serde_json::from_value(config.clone())
            .map_err(|e| JournalError::Construction(format!("{} prompt: {}", kind, e)))?;
        let variant: PromptVariant = serde_json::from_value(config.clone())
            .map_err(|e| JournalError::Construction(format!("{} prompt: {}", kind, e)))?;

        let prompt = Prompt {
            name: header.name,
            prompt: header.prompt,
            description: header.description,
            variant,
        };
        prompt.check()?;
        Ok(prompt)
    }

    pub fn kind(&self) -> PromptKind {
        self.variant.kind()
    }

    pub fn as_belief(&self) -> Option<&BeliefPrompt> {
        match &self.variant {
            PromptVariant::Belief(belief) => Some(belief),
            _ => None,
        }
    }

    pub fn as_goal(&self) -> Option<&GoalPrompt> {
        match &self.variant {
            PromptVariant::Goal(goal) => Some(goal),
            _ => None,
        }
    }

    fn check(&self) -> Result<()> {
        let kind = self.kind();
        if self.name.trim().is_empty() {
            return Err(JournalError::schema(kind.as_str(), "name", "must not be blank"));
        }

        match &self.variant {
            PromptVariant::Choice(choice) => {
                if choice.choices.is_empty() {
                    return Err(JournalError::schema(kind.as_str(), "choices", "must not be empty"));
                }
                if let Some(default) = &choice.default {
                    choice.validate_selection(default)?;
                }
            }
            PromptVariant::MultiChoice(multi) => {
                if multi.choices.is_empty() {
                    return Err(JournalError::schema(kind.as_str(), "choices", "must not be empty"));
                }
                if let Some(defaults) = &multi.default {
                    multi.validate_selections(defaults.as_slice())?;
                }
            }
            PromptVariant::Belief(belief) if belief.scale_min > belief.scale_max => {
                return Err(JournalError::schema(
                    kind.as_str(),
                    "scale_min",
                    format!("must not exceed scale_max ({})", belief.scale_max),
                ));
            }
            _ => {}
        }
        Ok(())
    }
}
