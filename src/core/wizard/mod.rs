//! The onboarding wizard: typed answers, step layout, session state
//! machine, and draft persistence.

pub mod answers;
pub mod draft;
pub mod session;
pub mod steps;

pub use answers::{AnswerMap, FieldKind, FieldValue};
pub use draft::{DraftDecodeError, DraftSnapshot, DraftStore, MemoryDraftStore, DRAFT_KEY};
pub use session::{MissingFields, SessionPhase, SubmitError, WizardSession};
pub use steps::{fields, onboarding, FieldDefinition, FieldSpec, StepDefinition, WizardConfig};
