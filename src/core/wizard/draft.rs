//! Draft persistence for in-progress wizard sessions.
//!
//! A session snapshot is stored under a fixed key as JSON. The reader never
//! trusts stored data: anything that fails to parse or does not match the
//! wizard layout is treated as absent and the session starts fresh.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::answers::AnswerMap;
use super::steps::WizardConfig;

/// Fixed storage key for the onboarding draft.
pub const DRAFT_KEY: &str = "brandpilot-onboarding";

/// Key/value storage seam for draft persistence.
///
/// Writes are best effort: a full or unavailable store loses the draft but
/// must never interrupt the user.
pub trait DraftStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
    fn clear(&self, key: &str);
}

/// Why a stored draft was rejected and the session started fresh.
#[derive(Debug, thiserror::Error)]
pub enum DraftDecodeError {
    #[error("draft is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("step index {index} out of range for {count} steps")]
    StepOutOfRange { index: usize, count: usize },

    #[error("unknown field `{0}` in stored draft")]
    UnknownField(String),

    #[error("field `{0}` does not match its declared shape")]
    ShapeMismatch(String),
}

/// Serialized form of a session: the full answer map plus the step cursor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftSnapshot {
    pub answers: AnswerMap,
    pub current_step_index: usize,
}

impl DraftSnapshot {
    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Decode and shape-check a stored draft against the wizard layout.
    pub fn decode(raw: &str, config: &WizardConfig) -> Result<Self, DraftDecodeError> {
        let snapshot: DraftSnapshot = serde_json::from_str(raw)?;
        if snapshot.current_step_index >= config.step_count() {
            return Err(DraftDecodeError::StepOutOfRange {
                index: snapshot.current_step_index,
                count: config.step_count(),
            });
        }
        for (name, value) in snapshot.answers.iter() {
            let Some(field) = config.field(name) else {
                return Err(DraftDecodeError::UnknownField(name.to_string()));
            };
            if field.spec.kind() != value.kind() {
                return Err(DraftDecodeError::ShapeMismatch(name.to_string()));
            }
        }
        Ok(snapshot)
    }
}

/// In-memory store for tests and other non-browser callers.
///
/// Clones share the same backing map, so a session recreated from a cloned
/// store observes everything the first session persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryDraftStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored value, for assertions.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Seed a raw value, bypassing the snapshot codec.
    pub fn put_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl DraftStore for MemoryDraftStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn clear(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
