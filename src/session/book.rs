// Prompt book
// The whole prompt configuration, validated up front
//
// The TOML document is keyed by section (`bool`, `text`, `multiline`, ...);
// each section maps a prompt name to its configuration table. Every prompt is
// constructed before a run starts so a bad entry never interrupts a session.

use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::errors::{JournalError, Result};
use crate::prompts::{Prompt, PromptKind, KIND_FIELD};

/// A top-level table of the prompt document, in run order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Bool,
    Choice,
    MultiChoice,
    Text,
    SingleLine,
    MultiLine,
    Belief,
    BeliefList,
    Goals,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::Bool,
        Section::Choice,
        Section::MultiChoice,
        Section::Text,
        Section::SingleLine,
        Section::MultiLine,
        Section::Belief,
        Section::BeliefList,
        Section::Goals,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Section::Bool => "bool",
            Section::Choice => "choice",
            Section::MultiChoice => "multichoice",
            Section::Text => "text",
            Section::SingleLine => "singleline",
            Section::MultiLine => "multiline",
            Section::Belief => "belief",
            Section::BeliefList => "belieflist",
            Section::Goals => "goals",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.key() == key)
    }

    /// Prompt kind every entry of this section must have
    pub fn kind(&self) -> PromptKind {
        match self {
            Section::Bool => PromptKind::Boolean,
            Section::Choice => PromptKind::Choice,
            Section::MultiChoice => PromptKind::MultiChoice,
            Section::Text => PromptKind::Text,
            Section::SingleLine => PromptKind::SingleLine,
            Section::MultiLine => PromptKind::MultiLine,
            Section::Belief | Section::BeliefList => PromptKind::Belief,
            Section::Goals => PromptKind::Goal,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PromptBook {
    sections: Vec<(Section, Vec<Prompt>)>,
}

impl PromptBook {
    /// The prompt set shipped with the binary
    pub fn builtin() -> Result<Self> {
        Self::parse(include_str!("../../data/prompts.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(source: &str) -> Result<Self> {
        let document: toml::Table = toml::from_str(source)?;

        let mut parsed: Vec<(Section, Vec<Prompt>)> = Vec::new();
        let mut names = HashSet::new();

        for (key, entries) in &document {
            let section = Section::from_key(key)
                .ok_or_else(|| JournalError::Construction(format!("unknown section '{}'", key)))?;
            let kind = section.kind();
            let entries = entries.as_table().ok_or_else(|| {
                JournalError::schema(kind.as_str(), key.as_str(), "must be a table of prompts")
            })?;

            let mut prompts = Vec::with_capacity(entries.len());
            for (name, entry) in entries {
                let prompt = build_prompt(section, name, entry)?;
                if !names.insert(prompt.name.clone()) {
                    return Err(JournalError::Construction(format!(
                        "duplicate prompt name '{}'",
                        prompt.name
                    )));
                }
                prompts.push(prompt);
            }
            debug!(section = key.as_str(), count = prompts.len(), "loaded prompts");
            parsed.push((section, prompts));
        }

        let goal_prompts = parsed
            .iter()
            .filter(|(section, _)| *section == Section::Goals)
            .map(|(_, prompts)| prompts.len())
            .sum::<usize>();
        if goal_prompts > 1 {
            return Err(JournalError::Construction(format!(
                "at most one goal prompt is allowed, found {}",
                goal_prompts
            )));
        }

        parsed.sort_by_key(|(section, _)| {
            Section::ALL.iter().position(|s| s == section).unwrap_or(usize::MAX)
        });
        Ok(Self { sections: parsed })
    }

    /// Prompts of one section, in document order
    pub fn prompts(&self, section: Section) -> &[Prompt] {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, prompts)| prompts.as_slice())
            .unwrap_or(&[])
    }

    /// Sections present in the document, in run order, with their prompt counts
    pub fn summary(&self) -> Vec<(Section, usize)> {
        self.sections
            .iter()
            .map(|(section, prompts)| (*section, prompts.len()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.sections.iter().map(|(_, prompts)| prompts.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fill `kind` and `name` from the document structure when omitted, then construct
fn build_prompt(section: Section, name: &str, entry: &toml::Value) -> Result<Prompt> {
    let kind = section.kind();
    let mut config = serde_json::to_value(entry)?;
    let map = config.as_object_mut().ok_or_else(|| {
        JournalError::schema(kind.as_str(), name, "must be a table of fields")
    })?;

    map.entry(KIND_FIELD)
        .or_insert_with(|| Value::String(kind.as_str().to_string()));
    map.entry("name")
        .or_insert_with(|| Value::String(name.to_string()));

    if let Some(declared) = map.get(KIND_FIELD).and_then(Value::as_str) {
        if declared != kind.as_str() {
            return Err(JournalError::schema(
                kind.as_str(),
                KIND_FIELD,
                format!("is '{}' but [{}] holds {} prompts", declared, section.key(), kind),
            ));
        }
    }

    Prompt::construct(&config)
}
