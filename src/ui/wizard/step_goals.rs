//! Marketing goals and budget step.

use leptos::prelude::*;

use crate::core::wizard::steps::{
    BIGGEST_CHALLENGE_OPTIONS, MARKETING_CHANNEL_OPTIONS, MONTHLY_BUDGET_OPTIONS,
    PRIMARY_GOAL_OPTIONS, SUCCESS_TIMELINE_OPTIONS,
};
use crate::core::wizard::{fields, FieldValue};
use crate::ui::common::{MultiOptionGrid, OptionGrid, SelectField};
use crate::ui::icon::{Icon, icons};

use super::{missing_signal, owned_options, select_options, OnboardingSession};

#[component]
pub fn GoalsStep(
    session: RwSignal<OnboardingSession>,
    missing: RwSignal<Vec<&'static str>>,
) -> impl IntoView {
    let marketing_channels = Signal::derive(move || {
        session.with(|s| s.answers().items(fields::MARKETING_CHANNELS).to_vec())
    });
    let monthly_budget = Signal::derive(move || {
        session.with(|s| s.answers().select(fields::MONTHLY_BUDGET).to_string())
    });
    let primary_goal = Signal::derive(move || {
        session.with(|s| s.answers().select(fields::PRIMARY_GOAL).to_string())
    });
    let success_timeline = Signal::derive(move || {
        session.with(|s| s.answers().select(fields::SUCCESS_TIMELINE).to_string())
    });
    let biggest_challenge = Signal::derive(move || {
        session.with(|s| s.answers().select(fields::BIGGEST_CHALLENGE).to_string())
    });

    let toggle_channel = Callback::new(move |key: String| {
        session.update(|s| s.toggle_selection(fields::MARKETING_CHANNELS, &key));
    });
    let set_monthly_budget = Callback::new(move |key: String| {
        session.update(|s| s.set_field(fields::MONTHLY_BUDGET, FieldValue::Select(key)));
    });
    let set_primary_goal = Callback::new(move |key: String| {
        session.update(|s| s.set_field(fields::PRIMARY_GOAL, FieldValue::Select(key)));
    });
    let set_success_timeline = Callback::new(move |key: String| {
        session.update(|s| s.set_field(fields::SUCCESS_TIMELINE, FieldValue::Select(key)));
    });
    let set_biggest_challenge = Callback::new(move |key: String| {
        session.update(|s| s.set_field(fields::BIGGEST_CHALLENGE, FieldValue::Select(key)));
    });

    view! {
        <div class="space-y-6">
            <div class="text-center mb-8">
                <Icon name=icons::TRENDING_UP class="w-12 h-12 mx-auto mb-4"/>
                <h2 class="text-2xl font-bold text-theme-primary">"What are your marketing goals?"</h2>
            </div>

            <div class="space-y-6">
                <MultiOptionGrid
                    label="Current Marketing Channels"
                    options=owned_options(MARKETING_CHANNEL_OPTIONS)
                    selected=marketing_channels
                    on_toggle=toggle_channel
                />

                <OptionGrid
                    label="Monthly Budget"
                    required=true
                    options=owned_options(MONTHLY_BUDGET_OPTIONS)
                    value=monthly_budget
                    on_select=set_monthly_budget
                />

                <OptionGrid
                    label="Primary Goal"
                    required=true
                    options=owned_options(PRIMARY_GOAL_OPTIONS)
                    value=primary_goal
                    on_select=set_primary_goal
                    single_column=true
                />

                <SelectField
                    label="Success Timeline"
                    required=true
                    value=success_timeline
                    on_change=set_success_timeline
                    options=select_options("Select timeline", SUCCESS_TIMELINE_OPTIONS)
                    missing=missing_signal(missing, fields::SUCCESS_TIMELINE)
                />

                <SelectField
                    label="Biggest Challenge"
                    value=biggest_challenge
                    on_change=set_biggest_challenge
                    options=select_options("Select your biggest challenge", BIGGEST_CHALLENGE_OPTIONS)
                />
            </div>
        </div>
    }
}
