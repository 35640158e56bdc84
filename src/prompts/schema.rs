// Prompt schema registry
//
// Structural checks only: which fields each kind needs and their coarse type.
// Whether a default is one of the choices is checked later, by the variant.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::errors::{JournalError, Result};

/// Field carrying the discriminator in every prompt configuration
pub const KIND_FIELD: &str = "kind";

/// Discriminator selecting a prompt's shape and collection strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptKind {
    Boolean,
    Choice,
    MultiChoice,
    Text,
    SingleLine,
    MultiLine,
    Belief,
    Goal,
}

impl PromptKind {
    pub const ALL: [PromptKind; 8] = [
        PromptKind::Boolean,
        PromptKind::Choice,
        PromptKind::MultiChoice,
        PromptKind::Text,
        PromptKind::SingleLine,
        PromptKind::MultiLine,
        PromptKind::Belief,
        PromptKind::Goal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PromptKind::Boolean => "boolean",
            PromptKind::Choice => "choice",
            PromptKind::MultiChoice => "multichoice",
            PromptKind::Text => "text",
            PromptKind::SingleLine => "singleline",
            PromptKind::MultiLine => "multiline",
            PromptKind::Belief => "belief",
            PromptKind::Goal => "goal",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse type a configuration field must have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Bool,
    Integer,
    StringArray,
}

impl FieldType {
    fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Bool => value.is_boolean(),
            FieldType::Integer => value.is_i64() || value.is_u64(),
            FieldType::StringArray => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            FieldType::String => "a string",
            FieldType::Bool => "a boolean",
            FieldType::Integer => "an integer",
            FieldType::StringArray => "an array of strings",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
    pub required: bool,
}

const fn required(name: &'static str, ty: FieldType) -> FieldSpec {
    FieldSpec {
        name,
        ty,
        required: true,
    }
}

const fn optional(name: &'static str, ty: FieldType) -> FieldSpec {
    FieldSpec {
        name,
        ty,
        required: false,
    }
}

const COMMON_FIELDS: &[FieldSpec] = &[
    required(KIND_FIELD, FieldType::String),
    required("name", FieldType::String),
    required("prompt", FieldType::String),
    required("description", FieldType::String),
];

const BOOLEAN_FIELDS: &[FieldSpec] = &[optional("default", FieldType::Bool)];

const CHOICE_FIELDS: &[FieldSpec] = &[
    required("choices", FieldType::StringArray),
    optional("default", FieldType::String),
];

const MULTICHOICE_FIELDS: &[FieldSpec] = &[
    required("choices", FieldType::StringArray),
    optional("default", FieldType::StringArray),
];

const FREE_TEXT_FIELDS: &[FieldSpec] = &[];

const BELIEF_FIELDS: &[FieldSpec] = &[
    optional("scale_label", FieldType::String),
    optional("reason_label", FieldType::String),
    optional("scale_min", FieldType::Integer),
    optional("scale_max", FieldType::Integer),
];

const GOAL_FIELDS: &[FieldSpec] = &[
    optional("choices", FieldType::StringArray),
    required("priority_label", FieldType::String),
    required("effort_label", FieldType::String),
    required("desc_prompt_label", FieldType::String),
];

/// Field set of one prompt kind
#[derive(Debug, Clone, Copy)]
pub struct PromptSchema {
    pub kind: PromptKind,
    specific: &'static [FieldSpec],
}

impl PromptSchema {
    pub fn for_kind(kind: PromptKind) -> Self {
        let specific = match kind {
            PromptKind::Boolean => BOOLEAN_FIELDS,
            PromptKind::Choice => CHOICE_FIELDS,
            PromptKind::MultiChoice => MULTICHOICE_FIELDS,
            PromptKind::Text | PromptKind::SingleLine | PromptKind::MultiLine => FREE_TEXT_FIELDS,
            PromptKind::Belief => BELIEF_FIELDS,
            PromptKind::Goal => GOAL_FIELDS,
        };
        Self { kind, specific }
    }

    /// Common fields first, then the kind-specific ones
    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        COMMON_FIELDS.iter().chain(self.specific.iter())
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields()
            .filter(|spec| spec.required)
            .map(|spec| spec.name)
    }

    pub fn validate(&self, config: &Map<String, Value>) -> Result<()> {
        for spec in self.fields() {
            match config.get(spec.name) {
                None if spec.required => {
                    return Err(JournalError::schema(self.kind.as_str(), spec.name, "is required"));
                }
                None => {}
                Some(value) if !spec.ty.matches(value) => {
                    return Err(JournalError::schema(
                        self.kind.as_str(),
                        spec.name,
                        format!("must be {}", spec.ty.describe()),
                    ));
                }
                Some(_) => {}
            }
        }

        // The discriminator is a string at this point
        if let Some(tag) = config.get(KIND_FIELD).and_then(Value::as_str) {
            if tag != self.kind.as_str() {
                return Err(JournalError::schema(
                    self.kind.as_str(),
                    KIND_FIELD,
                    format!("names '{}'", tag),
                ));
            }
        }

        Ok(())
    }
}

/// Check `config` against the field set registered for `kind`
pub fn validate(config: &Value, kind: PromptKind) -> Result<()> {
    let map = config
        .as_object()
        .ok_or_else(|| JournalError::schema(kind.as_str(), "<root>", "must be a table of fields"))?;
    PromptSchema::for_kind(kind).validate(map)
}
