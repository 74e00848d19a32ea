//! Profile record written to the external profile store on completion.
//!
//! The store holds one row per user, keyed by the principal id, written
//! with a single create-or-replace call. Top-level columns are snake_case;
//! the `brand_voice` JSON object keeps the camelCase keys the dashboard
//! reads.

use serde::{Deserialize, Serialize};

use crate::core::wizard::fields;
use crate::core::wizard::AnswerMap;

/// Authenticated principal, as supplied by the external identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
}

/// Typed failure from the external profile store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileStoreError {
    #[error("profile store unreachable: {0}")]
    Unreachable(String),

    #[error("profile store rejected the write ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// The row written once when onboarding completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub id: String,
    pub email: String,
    pub business_name: String,
    pub business_description: String,
    pub industry: String,
    pub target_audience: String,
    pub brand_voice: BrandVoice,
}

/// Everything else the wizard collects, stored as one JSON column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandVoice {
    pub voices: Vec<String>,
    pub communication_style: String,
    pub tone_level: u32,
    pub jargon_level: String,
    pub content_priorities: Vec<String>,
    pub platform_priorities: Vec<String>,
    pub business_stage: String,
    pub company_size: String,
    pub target_market: String,
    pub customer_pain_points: String,
    pub marketing_channels: Vec<String>,
    pub monthly_budget: String,
    pub primary_goal: String,
    pub success_timeline: String,
    pub biggest_challenge: String,
}

impl ProfileRecord {
    /// Assemble the record from the full answer set plus the principal.
    pub fn from_answers(identity: &Identity, answers: &AnswerMap) -> Self {
        Self {
            id: identity.id.clone(),
            email: identity.email.clone(),
            business_name: answers.text(fields::BUSINESS_NAME).to_string(),
            business_description: answers.text(fields::BUSINESS_DESCRIPTION).to_string(),
            industry: answers.select(fields::INDUSTRY).to_string(),
            target_audience: answers.text(fields::TARGET_AUDIENCE).to_string(),
            brand_voice: BrandVoice {
                voices: answers.items(fields::BRAND_VOICE).to_vec(),
                communication_style: answers.select(fields::COMMUNICATION_STYLE).to_string(),
                tone_level: answers.slider_or(fields::TONE_LEVEL, 50),
                jargon_level: answers.select(fields::JARGON_LEVEL).to_string(),
                content_priorities: answers.items(fields::CONTENT_PRIORITIES).to_vec(),
                platform_priorities: answers.items(fields::PLATFORM_PRIORITIES).to_vec(),
                business_stage: answers.select(fields::BUSINESS_STAGE).to_string(),
                company_size: answers.select(fields::COMPANY_SIZE).to_string(),
                target_market: answers.select(fields::TARGET_MARKET).to_string(),
                customer_pain_points: answers.text(fields::CUSTOMER_PAIN_POINTS).to_string(),
                marketing_channels: answers.items(fields::MARKETING_CHANNELS).to_vec(),
                monthly_budget: answers.select(fields::MONTHLY_BUDGET).to_string(),
                primary_goal: answers.select(fields::PRIMARY_GOAL).to_string(),
                success_timeline: answers.select(fields::SUCCESS_TIMELINE).to_string(),
                biggest_challenge: answers.select(fields::BIGGEST_CHALLENGE).to_string(),
            },
        }
    }
}
