//! Wizard session state machine.
//!
//! A session is `Editing` one step at a time, moves forward only when the
//! current step validates, and persists the full snapshot through the
//! injected [`DraftStore`] after every mutation. Submission is a two-phase
//! window around the single external write:
//!
//! ```text
//! Editing(i)    --advance (valid)-->   Editing(i+1)
//! Editing(i)    --retreat-->           Editing(i-1)   (saturating at 0)
//! Editing(last) --begin_submit-->      Submitting
//! Submitting    --resolve_submit Ok--> Submitted      (draft cleared, terminal)
//! Submitting    --resolve_submit Err-> Editing(last)  (draft untouched)
//! ```
//!
//! While `Submitting`, all mutation is refused so at most one write can ever
//! be in flight. `Submitted` is terminal.

use super::answers::{AnswerMap, FieldValue};
use super::draft::{DraftSnapshot, DraftStore, DRAFT_KEY};
use super::steps::WizardConfig;
use crate::core::profile::{Identity, ProfileRecord, ProfileStoreError};

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Collecting answers; the step cursor may move.
    Editing,
    /// One profile write is in flight; mutation refused.
    Submitting,
    /// The profile was written and the draft cleared. Terminal.
    Submitted,
}

/// A step's required fields that are still unanswered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing required fields: {}", .missing_fields.join(", "))]
pub struct MissingFields {
    pub missing_fields: Vec<&'static str>,
}

/// Why a submission could not start or finish.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("final step incomplete: {0}")]
    Incomplete(#[from] MissingFields),

    #[error("no authenticated session")]
    NotAuthenticated,

    #[error("a submission is already in flight")]
    InFlight,

    #[error("profile already submitted")]
    AlreadySubmitted,

    #[error("no submission in flight")]
    NotInFlight,

    #[error(transparent)]
    Store(#[from] ProfileStoreError),
}

/// Resumable, locally persisted wizard session.
#[derive(Debug, Clone)]
pub struct WizardSession<S: DraftStore> {
    config: &'static WizardConfig,
    store: S,
    answers: AnswerMap,
    current_step: usize,
    phase: SessionPhase,
}

impl<S: DraftStore> WizardSession<S> {
    /// Resume from a stored draft when one decodes cleanly, else start
    /// fresh at the first step with default answers.
    pub fn initialize(config: &'static WizardConfig, store: S) -> Self {
        let resumed = store
            .load(DRAFT_KEY)
            .and_then(|raw| DraftSnapshot::decode(&raw, config).ok());
        match resumed {
            Some(snapshot) => Self {
                config,
                store,
                answers: snapshot.answers,
                current_step: snapshot.current_step_index,
                phase: SessionPhase::Editing,
            },
            None => Self {
                config,
                store,
                answers: config.default_answers(),
                current_step: 0,
                phase: SessionPhase::Editing,
            },
        }
    }

    pub fn config(&self) -> &'static WizardConfig {
        self.config
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn step_count(&self) -> usize {
        self.config.step_count()
    }

    pub fn is_first_step(&self) -> bool {
        self.current_step == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step + 1 == self.step_count()
    }

    fn persist(&self) {
        let snapshot = DraftSnapshot {
            answers: self.answers.clone(),
            current_step_index: self.current_step,
        };
        self.store.save(DRAFT_KEY, &snapshot.encode());
    }

    /// Write one answer. Never validates; validation happens at step
    /// advance. Ignored outside `Editing`.
    pub fn set_field(&mut self, name: &str, value: FieldValue) {
        if self.phase != SessionPhase::Editing {
            return;
        }
        self.answers.set(name, value);
        self.persist();
    }

    /// Toggle membership in a multi-select field.
    pub fn toggle_selection(&mut self, name: &str, option: &str) {
        if self.phase != SessionPhase::Editing {
            return;
        }
        self.answers.toggle(name, option);
        self.persist();
    }

    /// Move one element of an ordered-list field. Out-of-range indices are
    /// a silent no-op and persist nothing.
    pub fn reorder(&mut self, list: &str, from: usize, to: usize) {
        if self.phase != SessionPhase::Editing {
            return;
        }
        if self.answers.move_item(list, from, to) {
            self.persist();
        }
    }

    /// Check a step's required fields without mutating anything.
    pub fn validate_step(&self, step_index: usize) -> Result<(), MissingFields> {
        let Some(step) = self.config.step(step_index) else {
            return Ok(());
        };
        let mut missing_fields = Vec::new();
        for &name in step.required_fields {
            let answered = match (self.answers.get(name), self.config.field(name)) {
                (Some(value), Some(field)) => value.is_answered(&field.spec.default_value()),
                _ => false,
            };
            if !answered {
                missing_fields.push(name);
            }
        }
        if missing_fields.is_empty() {
            Ok(())
        } else {
            Err(MissingFields { missing_fields })
        }
    }

    /// Advance past the current step if it validates. On failure the step
    /// cursor does not move and the missing fields are returned.
    pub fn advance(&mut self) -> Result<(), MissingFields> {
        if self.phase != SessionPhase::Editing {
            return Ok(());
        }
        self.validate_step(self.current_step)?;
        self.current_step = (self.current_step + 1).min(self.step_count() - 1);
        self.persist();
        Ok(())
    }

    /// Step back. Never validates; saturates at the first step.
    pub fn retreat(&mut self) {
        if self.phase != SessionPhase::Editing {
            return;
        }
        if self.current_step > 0 {
            self.current_step -= 1;
            self.persist();
        }
    }

    /// Validate the final step and open the submission window.
    ///
    /// Returns the assembled profile record. The caller performs the single
    /// create-or-replace call against the profile store and reports back
    /// through [`resolve_submit`](Self::resolve_submit).
    pub fn begin_submit(
        &mut self,
        identity: Option<&Identity>,
    ) -> Result<ProfileRecord, SubmitError> {
        match self.phase {
            SessionPhase::Submitting => return Err(SubmitError::InFlight),
            SessionPhase::Submitted => return Err(SubmitError::AlreadySubmitted),
            SessionPhase::Editing => {}
        }
        self.validate_step(self.step_count() - 1)?;
        let identity = identity.ok_or(SubmitError::NotAuthenticated)?;
        let record = ProfileRecord::from_answers(identity, &self.answers);
        self.phase = SessionPhase::Submitting;
        Ok(record)
    }

    /// Close the submission window.
    ///
    /// Success clears the stored draft (exactly once) and makes the session
    /// terminal; failure returns to editing the final step with the draft
    /// untouched so nothing the user entered is lost.
    pub fn resolve_submit(
        &mut self,
        outcome: Result<(), ProfileStoreError>,
    ) -> Result<(), SubmitError> {
        match self.phase {
            SessionPhase::Submitting => match outcome {
                Ok(()) => {
                    self.phase = SessionPhase::Submitted;
                    self.store.clear(DRAFT_KEY);
                    Ok(())
                }
                Err(err) => {
                    self.phase = SessionPhase::Editing;
                    Err(SubmitError::Store(err))
                }
            },
            SessionPhase::Submitted => Ok(()),
            SessionPhase::Editing => Err(SubmitError::NotInFlight),
        }
    }
}
