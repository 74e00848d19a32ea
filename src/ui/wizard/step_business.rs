//! Business basics step.

use leptos::prelude::*;

use crate::core::wizard::steps::{
    BUSINESS_STAGE_OPTIONS, COMPANY_SIZE_OPTIONS, INDUSTRY_OPTIONS,
};
use crate::core::wizard::{fields, FieldValue};
use crate::ui::common::{FormField, OptionGrid, SelectField, TextAreaField};
use crate::ui::icon::{Icon, icons};

use super::{missing_signal, owned_options, select_options, OnboardingSession};

#[component]
pub fn BusinessStep(
    session: RwSignal<OnboardingSession>,
    missing: RwSignal<Vec<&'static str>>,
) -> impl IntoView {
    let business_name = Signal::derive(move || {
        session.with(|s| s.answers().text(fields::BUSINESS_NAME).to_string())
    });
    let business_description = Signal::derive(move || {
        session.with(|s| s.answers().text(fields::BUSINESS_DESCRIPTION).to_string())
    });
    let industry = Signal::derive(move || {
        session.with(|s| s.answers().select(fields::INDUSTRY).to_string())
    });
    let business_stage = Signal::derive(move || {
        session.with(|s| s.answers().select(fields::BUSINESS_STAGE).to_string())
    });
    let company_size = Signal::derive(move || {
        session.with(|s| s.answers().select(fields::COMPANY_SIZE).to_string())
    });

    let set_business_name = Callback::new(move |value: String| {
        session.update(|s| s.set_field(fields::BUSINESS_NAME, FieldValue::Text(value)));
    });
    let set_business_description = Callback::new(move |value: String| {
        session.update(|s| s.set_field(fields::BUSINESS_DESCRIPTION, FieldValue::Text(value)));
    });
    let set_industry = Callback::new(move |key: String| {
        session.update(|s| s.set_field(fields::INDUSTRY, FieldValue::Select(key)));
    });
    let set_business_stage = Callback::new(move |key: String| {
        session.update(|s| s.set_field(fields::BUSINESS_STAGE, FieldValue::Select(key)));
    });
    let set_company_size = Callback::new(move |key: String| {
        session.update(|s| s.set_field(fields::COMPANY_SIZE, FieldValue::Select(key)));
    });

    view! {
        <div class="space-y-6">
            <div class="text-center mb-8">
                <Icon name=icons::BUILDING class="w-12 h-12 mx-auto mb-4"/>
                <h2 class="text-2xl font-bold text-theme-primary">"Tell us about your business"</h2>
            </div>

            <div class="space-y-4">
                <FormField
                    label="Business Name"
                    required=true
                    placeholder="Enter your business name"
                    value=business_name
                    on_input=set_business_name
                    missing=missing_signal(missing, fields::BUSINESS_NAME)
                />

                <TextAreaField
                    label="Business Description"
                    required=true
                    placeholder="Describe what your business does in 2-3 sentences"
                    value=business_description
                    on_input=set_business_description
                    max_len=500
                    missing=missing_signal(missing, fields::BUSINESS_DESCRIPTION)
                />

                <OptionGrid
                    label="Industry"
                    required=true
                    options=owned_options(INDUSTRY_OPTIONS)
                    value=industry
                    on_select=set_industry
                />

                <div class="grid grid-cols-2 gap-4">
                    <SelectField
                        label="Business Stage"
                        value=business_stage
                        on_change=set_business_stage
                        options=select_options("Select stage", BUSINESS_STAGE_OPTIONS)
                    />
                    <SelectField
                        label="Company Size"
                        value=company_size
                        on_change=set_company_size
                        options=select_options("Select size", COMPANY_SIZE_OPTIONS)
                    />
                </div>
            </div>
        </div>
    }
}
