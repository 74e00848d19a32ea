//! Typed answer values collected by the wizard.
//!
//! Every form field holds one of a fixed set of value shapes. Carrying the
//! shape in the value itself lets draft decoding and step validation match
//! exhaustively instead of guessing at untyped JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Shape of a field value, used when checking stored drafts against the
/// wizard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Select,
    MultiSelect,
    Slider,
    OrderedList,
}

/// A single collected answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    /// Free text; trimmed at validation time.
    Text(String),
    /// One option key out of a fixed set. Empty string means unanswered.
    Select(String),
    /// Any number of option keys; empty means unanswered.
    MultiSelect(Vec<String>),
    /// Position on a numeric range.
    Slider(u32),
    /// A list whose element order is itself data.
    OrderedList(Vec<String>),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Select(_) => FieldKind::Select,
            FieldValue::MultiSelect(_) => FieldKind::MultiSelect,
            FieldValue::Slider(_) => FieldKind::Slider,
            FieldValue::OrderedList(_) => FieldKind::OrderedList,
        }
    }

    /// Whether this value counts as answered for a required-field check.
    ///
    /// Text must be non-empty after trimming, selects and lists must be
    /// non-empty, and a slider only counts once it differs from its default.
    pub fn is_answered(&self, default: &FieldValue) -> bool {
        match self {
            FieldValue::Text(text) => !text.trim().is_empty(),
            FieldValue::Select(key) => !key.is_empty(),
            FieldValue::MultiSelect(items) => !items.is_empty(),
            FieldValue::Slider(value) => match default {
                FieldValue::Slider(initial) => value != initial,
                _ => true,
            },
            FieldValue::OrderedList(items) => !items.is_empty(),
        }
    }
}

/// Field name to value map backing a wizard session.
///
/// Grows monotonically: fields are overwritten, never removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<String, FieldValue>);

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: FieldValue) {
        self.0.insert(name.into(), value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Text content of a field, or `""` when absent or not text.
    pub fn text(&self, name: &str) -> &str {
        match self.get(name) {
            Some(FieldValue::Text(text)) => text,
            _ => "",
        }
    }

    /// Selected option key, or `""` when absent or not a select.
    pub fn select(&self, name: &str) -> &str {
        match self.get(name) {
            Some(FieldValue::Select(key)) => key,
            _ => "",
        }
    }

    /// Items of a multi-select or ordered-list field, empty otherwise.
    pub fn items(&self, name: &str) -> &[String] {
        match self.get(name) {
            Some(FieldValue::MultiSelect(items)) | Some(FieldValue::OrderedList(items)) => items,
            _ => &[],
        }
    }

    /// Slider position, or `fallback` when absent or not a slider.
    pub fn slider_or(&self, name: &str, fallback: u32) -> u32 {
        match self.get(name) {
            Some(FieldValue::Slider(value)) => *value,
            _ => fallback,
        }
    }

    /// Toggle membership of `option` in a multi-select field.
    pub fn toggle(&mut self, name: &str, option: &str) {
        match self.0.get_mut(name) {
            Some(FieldValue::MultiSelect(items)) => {
                if let Some(position) = items.iter().position(|item| item == option) {
                    items.remove(position);
                } else {
                    items.push(option.to_string());
                }
            }
            Some(_) => {}
            None => {
                self.0.insert(
                    name.to_string(),
                    FieldValue::MultiSelect(vec![option.to_string()]),
                );
            }
        }
    }

    /// Move one element of an ordered list from `from` to `to`, preserving
    /// the relative order of everything else.
    ///
    /// Returns whether the list changed. Out-of-range indices and non-list
    /// fields are a silent no-op.
    pub fn move_item(&mut self, name: &str, from: usize, to: usize) -> bool {
        let Some(FieldValue::OrderedList(items)) = self.0.get_mut(name) else {
            return false;
        };
        if from >= items.len() || to >= items.len() || from == to {
            return false;
        }
        let item = items.remove(from);
        items.insert(to, item);
        true
    }
}
