//! Static wizard layout: steps, field specs, option sets, defaults.
//!
//! The onboarding flow is fixed at compile time. Option entries are
//! `(key, label)` pairs; the key is what gets stored and submitted, the
//! label is what the form renders.

use super::answers::{AnswerMap, FieldKind, FieldValue};

/// Well-known field names.
///
/// Keys are camelCase because they double as the serialized draft keys and
/// the `brand_voice` JSON keys the dashboard reads.
pub mod fields {
    pub const BUSINESS_NAME: &str = "businessName";
    pub const BUSINESS_DESCRIPTION: &str = "businessDescription";
    pub const INDUSTRY: &str = "industry";
    pub const BUSINESS_STAGE: &str = "businessStage";
    pub const COMPANY_SIZE: &str = "companySize";
    pub const TARGET_AUDIENCE: &str = "targetAudience";
    pub const TARGET_MARKET: &str = "targetMarket";
    pub const CUSTOMER_PAIN_POINTS: &str = "customerPainPoints";
    pub const CURRENT_FEEDBACK: &str = "currentFeedback";
    pub const MARKETING_CHANNELS: &str = "marketingChannels";
    pub const MONTHLY_BUDGET: &str = "monthlyBudget";
    pub const PRIMARY_GOAL: &str = "primaryGoal";
    pub const SUCCESS_TIMELINE: &str = "successTimeline";
    pub const BIGGEST_CHALLENGE: &str = "biggestChallenge";
    pub const BRAND_VOICE: &str = "brandVoice";
    pub const COMMUNICATION_STYLE: &str = "communicationStyle";
    pub const TONE_LEVEL: &str = "toneLevel";
    pub const JARGON_LEVEL: &str = "jargonLevel";
    pub const CONTENT_PRIORITIES: &str = "contentPriorities";
    pub const PLATFORM_PRIORITIES: &str = "platformPriorities";
}

pub const INDUSTRY_OPTIONS: &[(&str, &str)] = &[
    ("technology", "Technology"),
    ("ecommerce", "E-commerce"),
    ("healthcare", "Healthcare"),
    ("finance", "Finance"),
    ("education", "Education"),
    ("other", "Other"),
];

pub const BUSINESS_STAGE_OPTIONS: &[(&str, &str)] = &[
    ("prelaunch", "Pre-launch"),
    ("startup", "Startup"),
    ("growth", "Growth"),
    ("established", "Established"),
];

pub const COMPANY_SIZE_OPTIONS: &[(&str, &str)] = &[
    ("solo", "Solo"),
    ("2-10", "2-10 people"),
    ("11-50", "11-50 people"),
    ("51-200", "51-200 people"),
    ("200+", "200+ people"),
];

pub const TARGET_MARKET_OPTIONS: &[(&str, &str)] = &[
    ("local", "Local"),
    ("regional", "Regional"),
    ("national", "National"),
    ("global", "Global"),
];

pub const MARKETING_CHANNEL_OPTIONS: &[(&str, &str)] = &[
    ("linkedin", "LinkedIn"),
    ("twitter", "Twitter"),
    ("facebook", "Facebook"),
    ("instagram", "Instagram"),
    ("youtube", "YouTube"),
    ("tiktok", "TikTok"),
    ("email", "Email"),
    ("blog", "Blog"),
    ("paid-ads", "Paid Ads"),
    ("none", "None"),
];

pub const MONTHLY_BUDGET_OPTIONS: &[(&str, &str)] = &[
    ("$0-500", "$0-500"),
    ("$500-2K", "$500-2K"),
    ("$2K-5K", "$2K-5K"),
    ("$5K+", "$5K+"),
];

pub const PRIMARY_GOAL_OPTIONS: &[(&str, &str)] = &[
    ("brand-awareness", "Brand Awareness"),
    ("lead-generation", "Lead Generation"),
    ("sales-growth", "Sales Growth"),
    ("thought-leadership", "Thought Leadership"),
    ("community", "Community"),
];

pub const SUCCESS_TIMELINE_OPTIONS: &[(&str, &str)] = &[
    ("30-days", "30 days"),
    ("60-days", "60 days"),
    ("90-days", "90 days"),
    ("6-months", "6+ months"),
];

pub const BIGGEST_CHALLENGE_OPTIONS: &[(&str, &str)] = &[
    ("content-creation", "Creating consistent, quality content"),
    ("audience-growth", "Growing audience and reach"),
    ("lead-generation", "Generating qualified leads"),
    ("roi-measurement", "Measuring marketing ROI"),
    ("time-management", "Finding time for marketing activities"),
    ("strategy-planning", "Developing effective marketing strategy"),
    ("budget-optimization", "Optimizing marketing budget"),
];

pub const BRAND_VOICE_OPTIONS: &[(&str, &str)] = &[
    ("professional", "Professional"),
    ("friendly", "Friendly"),
    ("expert", "Expert"),
    ("innovative", "Innovative"),
    ("bold", "Bold"),
    ("helpful", "Helpful"),
];

pub const COMMUNICATION_STYLE_OPTIONS: &[(&str, &str)] = &[
    ("direct", "Direct and concise"),
    ("story-driven", "Story-driven"),
    ("educational", "Educational"),
    ("conversational", "Conversational"),
];

pub const JARGON_LEVEL_OPTIONS: &[(&str, &str)] = &[
    ("minimal", "Minimize jargon, keep it simple"),
    ("some", "Some technical terms, industry familiar"),
    ("expert", "Industry-expert level, full technical depth"),
];

/// Content types users rank by priority; ships pre-ordered.
pub const DEFAULT_CONTENT_PRIORITIES: &[&str] = &[
    "How-to guides",
    "Industry insights",
    "Behind-the-scenes",
    "Case studies",
    "Quick tips",
    "Thought leadership",
];

/// Per-field shape and constraints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldSpec {
    Text { max_len: usize },
    Select { options: &'static [(&'static str, &'static str)] },
    MultiSelect { options: &'static [(&'static str, &'static str)] },
    Slider { min: u32, max: u32, default: u32 },
    OrderedList { default: &'static [&'static str] },
}

impl FieldSpec {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldSpec::Text { .. } => FieldKind::Text,
            FieldSpec::Select { .. } => FieldKind::Select,
            FieldSpec::MultiSelect { .. } => FieldKind::MultiSelect,
            FieldSpec::Slider { .. } => FieldKind::Slider,
            FieldSpec::OrderedList { .. } => FieldKind::OrderedList,
        }
    }

    /// The value a fresh session starts with.
    pub fn default_value(&self) -> FieldValue {
        match self {
            FieldSpec::Text { .. } => FieldValue::Text(String::new()),
            FieldSpec::Select { .. } => FieldValue::Select(String::new()),
            FieldSpec::MultiSelect { .. } => FieldValue::MultiSelect(Vec::new()),
            FieldSpec::Slider { default, .. } => FieldValue::Slider(*default),
            FieldSpec::OrderedList { default } => {
                FieldValue::OrderedList(default.iter().map(|item| item.to_string()).collect())
            }
        }
    }
}

/// One field of the wizard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDefinition {
    pub name: &'static str,
    pub label: &'static str,
    pub spec: FieldSpec,
}

/// One step of the wizard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepDefinition {
    pub id: &'static str,
    pub title: &'static str,
    /// Fields that must be answered before the step can be left forward.
    pub required_fields: &'static [&'static str],
}

/// Full wizard layout: ordered steps plus the field table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WizardConfig {
    pub steps: &'static [StepDefinition],
    pub fields: &'static [FieldDefinition],
}

impl WizardConfig {
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn step(&self, index: usize) -> Option<&StepDefinition> {
        self.steps.get(index)
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Fresh answers with every field at its default, including the
    /// pre-ordered priority list.
    pub fn default_answers(&self) -> AnswerMap {
        let mut answers = AnswerMap::new();
        for field in self.fields {
            answers.set(field.name, field.spec.default_value());
        }
        answers
    }
}

static ONBOARDING_STEPS: &[StepDefinition] = &[
    StepDefinition {
        id: "business",
        title: "Tell us about your business",
        required_fields: &[
            fields::BUSINESS_NAME,
            fields::BUSINESS_DESCRIPTION,
            fields::INDUSTRY,
        ],
    },
    StepDefinition {
        id: "audience",
        title: "Who do you want to reach?",
        required_fields: &[fields::TARGET_AUDIENCE, fields::TARGET_MARKET],
    },
    StepDefinition {
        id: "goals",
        title: "What are your marketing goals?",
        required_fields: &[
            fields::MONTHLY_BUDGET,
            fields::PRIMARY_GOAL,
            fields::SUCCESS_TIMELINE,
        ],
    },
    StepDefinition {
        id: "brand-voice",
        title: "Define your brand personality",
        required_fields: &[
            fields::BRAND_VOICE,
            fields::COMMUNICATION_STYLE,
            fields::JARGON_LEVEL,
        ],
    },
];

static ONBOARDING_FIELDS: &[FieldDefinition] = &[
    FieldDefinition {
        name: fields::BUSINESS_NAME,
        label: "Business Name",
        spec: FieldSpec::Text { max_len: 120 },
    },
    FieldDefinition {
        name: fields::BUSINESS_DESCRIPTION,
        label: "Business Description",
        spec: FieldSpec::Text { max_len: 500 },
    },
    FieldDefinition {
        name: fields::INDUSTRY,
        label: "Industry",
        spec: FieldSpec::Select {
            options: INDUSTRY_OPTIONS,
        },
    },
    FieldDefinition {
        name: fields::BUSINESS_STAGE,
        label: "Business Stage",
        spec: FieldSpec::Select {
            options: BUSINESS_STAGE_OPTIONS,
        },
    },
    FieldDefinition {
        name: fields::COMPANY_SIZE,
        label: "Company Size",
        spec: FieldSpec::Select {
            options: COMPANY_SIZE_OPTIONS,
        },
    },
    FieldDefinition {
        name: fields::TARGET_AUDIENCE,
        label: "Primary Target Audience",
        spec: FieldSpec::Text { max_len: 1000 },
    },
    FieldDefinition {
        name: fields::TARGET_MARKET,
        label: "Target Market",
        spec: FieldSpec::Select {
            options: TARGET_MARKET_OPTIONS,
        },
    },
    FieldDefinition {
        name: fields::CUSTOMER_PAIN_POINTS,
        label: "Customer Pain Points",
        spec: FieldSpec::Text { max_len: 500 },
    },
    FieldDefinition {
        name: fields::CURRENT_FEEDBACK,
        label: "Current Customer Feedback",
        spec: FieldSpec::Text { max_len: 500 },
    },
    FieldDefinition {
        name: fields::MARKETING_CHANNELS,
        label: "Current Marketing Channels",
        spec: FieldSpec::MultiSelect {
            options: MARKETING_CHANNEL_OPTIONS,
        },
    },
    FieldDefinition {
        name: fields::MONTHLY_BUDGET,
        label: "Monthly Budget",
        spec: FieldSpec::Select {
            options: MONTHLY_BUDGET_OPTIONS,
        },
    },
    FieldDefinition {
        name: fields::PRIMARY_GOAL,
        label: "Primary Goal",
        spec: FieldSpec::Select {
            options: PRIMARY_GOAL_OPTIONS,
        },
    },
    FieldDefinition {
        name: fields::SUCCESS_TIMELINE,
        label: "Success Timeline",
        spec: FieldSpec::Select {
            options: SUCCESS_TIMELINE_OPTIONS,
        },
    },
    FieldDefinition {
        name: fields::BIGGEST_CHALLENGE,
        label: "Biggest Challenge",
        spec: FieldSpec::Select {
            options: BIGGEST_CHALLENGE_OPTIONS,
        },
    },
    FieldDefinition {
        name: fields::BRAND_VOICE,
        label: "Brand Voice",
        spec: FieldSpec::MultiSelect {
            options: BRAND_VOICE_OPTIONS,
        },
    },
    FieldDefinition {
        name: fields::COMMUNICATION_STYLE,
        label: "Communication Style",
        spec: FieldSpec::Select {
            options: COMMUNICATION_STYLE_OPTIONS,
        },
    },
    FieldDefinition {
        name: fields::TONE_LEVEL,
        label: "Tone Level",
        spec: FieldSpec::Slider {
            min: 0,
            max: 100,
            default: 50,
        },
    },
    FieldDefinition {
        name: fields::JARGON_LEVEL,
        label: "Jargon Level",
        spec: FieldSpec::Select {
            options: JARGON_LEVEL_OPTIONS,
        },
    },
    FieldDefinition {
        name: fields::CONTENT_PRIORITIES,
        label: "Content Priorities",
        spec: FieldSpec::OrderedList {
            default: DEFAULT_CONTENT_PRIORITIES,
        },
    },
    FieldDefinition {
        name: fields::PLATFORM_PRIORITIES,
        label: "Platform Priorities",
        spec: FieldSpec::OrderedList { default: &[] },
    },
];

static ONBOARDING: WizardConfig = WizardConfig {
    steps: ONBOARDING_STEPS,
    fields: ONBOARDING_FIELDS,
};

/// The four-step onboarding wizard.
pub fn onboarding() -> &'static WizardConfig {
    &ONBOARDING
}
