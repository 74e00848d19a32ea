//! Target audience step.

use leptos::prelude::*;

use crate::core::wizard::steps::TARGET_MARKET_OPTIONS;
use crate::core::wizard::{fields, FieldValue};
use crate::ui::common::{OptionGrid, TextAreaField};
use crate::ui::icon::{Icon, icons};

use super::{missing_signal, owned_options, OnboardingSession};

#[component]
pub fn AudienceStep(
    session: RwSignal<OnboardingSession>,
    missing: RwSignal<Vec<&'static str>>,
) -> impl IntoView {
    let show_examples = RwSignal::new(false);

    let target_audience = Signal::derive(move || {
        session.with(|s| s.answers().text(fields::TARGET_AUDIENCE).to_string())
    });
    let target_market = Signal::derive(move || {
        session.with(|s| s.answers().select(fields::TARGET_MARKET).to_string())
    });
    let pain_points = Signal::derive(move || {
        session.with(|s| s.answers().text(fields::CUSTOMER_PAIN_POINTS).to_string())
    });
    let current_feedback = Signal::derive(move || {
        session.with(|s| s.answers().text(fields::CURRENT_FEEDBACK).to_string())
    });

    let set_target_audience = Callback::new(move |value: String| {
        session.update(|s| s.set_field(fields::TARGET_AUDIENCE, FieldValue::Text(value)));
    });
    let set_target_market = Callback::new(move |key: String| {
        session.update(|s| s.set_field(fields::TARGET_MARKET, FieldValue::Select(key)));
    });
    let set_pain_points = Callback::new(move |value: String| {
        session.update(|s| s.set_field(fields::CUSTOMER_PAIN_POINTS, FieldValue::Text(value)));
    });
    let set_current_feedback = Callback::new(move |value: String| {
        session.update(|s| s.set_field(fields::CURRENT_FEEDBACK, FieldValue::Text(value)));
    });

    view! {
        <div class="space-y-6">
            <div class="text-center mb-8">
                <Icon name=icons::TARGET class="w-12 h-12 mx-auto mb-4"/>
                <h2 class="text-2xl font-bold text-theme-primary">"Who do you want to reach?"</h2>
            </div>

            <div class="space-y-4">
                <div>
                    <TextAreaField
                        label="Primary Target Audience"
                        required=true
                        placeholder="Describe your ideal customers: demographics, behaviors, interests, pain points"
                        value=target_audience
                        on_input=set_target_audience
                        max_len=1000
                        rows=5
                        missing=missing_signal(missing, fields::TARGET_AUDIENCE)
                    />
                    <button
                        type="button"
                        class="text-sm text-accent-primary hover:text-accent-primary-hover mt-2 flex items-center"
                        on:click=move |_| show_examples.update(|v| *v = !*v)
                    >
                        "See Examples"
                        <Icon name=icons::CHEVRON_DOWN class="w-4 h-4 ml-1"/>
                    </button>
                    {move || {
                        show_examples.get().then(|| view! {
                            <div class="mt-3 p-4 rounded-lg border border-theme bg-theme-secondary">
                                <h4 class="text-sm font-medium text-theme-primary mb-2">"Good Examples:"</h4>
                                <ul class="space-y-2 text-sm text-theme-secondary list-disc pl-4">
                                    <li>
                                        "Small business owners (5-50 employees) in the tech industry who struggle with manual processes and want to automate their workflows."
                                    </li>
                                    <li>
                                        "Marketing managers at mid-size companies who need to prove ROI on campaigns and are frustrated with disconnected data sources."
                                    </li>
                                    <li>
                                        "Solo entrepreneurs in creative fields who want to grow their personal brand but lack time for consistent content creation."
                                    </li>
                                </ul>
                            </div>
                        })
                    }}
                </div>

                <OptionGrid
                    label="Target Market"
                    required=true
                    options=owned_options(TARGET_MARKET_OPTIONS)
                    value=target_market
                    on_select=set_target_market
                />

                <TextAreaField
                    label="Customer Pain Points"
                    placeholder="What challenges do your customers face that your business solves?"
                    value=pain_points
                    on_input=set_pain_points
                    max_len=500
                    rows=3
                />

                <TextAreaField
                    label="Current Customer Feedback"
                    placeholder="Share any recent customer feedback, reviews, or testimonials"
                    value=current_feedback
                    on_input=set_current_feedback
                    max_len=500
                    rows=3
                />
            </div>
        </div>
    }
}
