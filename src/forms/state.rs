use std::collections::HashMap;

use crate::models::{registry, ExperienceToggle, FieldId, FieldSpec};

/// Current value of one input. Text inputs and selects hold text,
/// checkboxes hold a flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Flag(b) => b.to_string(),
        }
    }

    pub fn as_flag(&self) -> bool {
        match self {
            Self::Flag(b) => *b,
            Self::Text(s) => matches!(s.trim(), "true" | "on"),
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Flag(_) => false,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

/// Values typed so far. Keys appear lazily; an absent key reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    entries: HashMap<FieldId, FieldValue>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, id: FieldId, value: impl Into<FieldValue>) {
        self.entries.insert(id, value.into());
    }

    pub fn get(&self, id: FieldId) -> Option<&FieldValue> {
        self.entries.get(&id)
    }

    pub fn text(&self, id: FieldId) -> String {
        self.get(id).map(FieldValue::as_text).unwrap_or_default()
    }

    pub fn flag(&self, id: FieldId) -> bool {
        self.get(id).is_some_and(FieldValue::as_flag)
    }

    pub fn is_blank(&self, id: FieldId) -> bool {
        self.get(id).map_or(true, FieldValue::is_blank)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything the registration form knows before it is submitted.
///
/// Experience answers survive toggling the section off and back on;
/// they are always read into the payload, gated only by `hasExperience`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: FormValues,
    experience: ExperienceToggle,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, id: FieldId, value: impl Into<FieldValue>) {
        self.values.set(id, value);
    }

    pub fn set_experience_toggle(&mut self, toggle: ExperienceToggle) {
        self.experience = toggle;
    }

    pub fn experience(&self) -> ExperienceToggle {
        self.experience
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Required fields of the visible sections that are still blank.
    pub fn missing_required(&self) -> Vec<FieldId> {
        missing_in(&self.values, registry::registration_fields(self.experience))
    }
}

pub(crate) fn missing_in<'a>(
    values: &FormValues,
    specs: impl Iterator<Item = &'a FieldSpec>,
) -> Vec<FieldId> {
    specs
        .filter(|spec| spec.required && values.is_blank(spec.id))
        .map(|spec| spec.id)
        .collect()
}
