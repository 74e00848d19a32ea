//! Brand personality step.

use leptos::prelude::*;

use crate::core::wizard::steps::{
    BRAND_VOICE_OPTIONS, COMMUNICATION_STYLE_OPTIONS, JARGON_LEVEL_OPTIONS,
    MARKETING_CHANNEL_OPTIONS,
};
use crate::core::wizard::{fields, FieldValue};
use crate::ui::common::{MultiOptionGrid, OptionGrid, RankedListField, SliderField};
use crate::ui::icon::{Icon, icons};

use super::{owned_options, OnboardingSession};

/// Display label for a marketing channel key.
fn channel_label(key: &str) -> String {
    MARKETING_CHANNEL_OPTIONS
        .iter()
        .find(|(value, _)| *value == key)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Description of the tone slider position, matching the submitted value.
fn tone_description(level: u32) -> &'static str {
    match level {
        0..=24 => "Very Formal",
        25..=49 => "Somewhat Formal",
        50..=74 => "Somewhat Casual",
        _ => "Very Casual",
    }
}

#[component]
pub fn BrandVoiceStep(session: RwSignal<OnboardingSession>) -> impl IntoView {
    // Seed the platform ranking from the channels chosen on the goals step
    // the first time this step renders.
    Effect::new(move |_| {
        session.update(|s| {
            let channels = s.answers().items(fields::MARKETING_CHANNELS).to_vec();
            if s.answers().items(fields::PLATFORM_PRIORITIES).is_empty() && !channels.is_empty() {
                s.set_field(fields::PLATFORM_PRIORITIES, FieldValue::OrderedList(channels));
            }
        });
    });

    let brand_voice = Signal::derive(move || {
        session.with(|s| s.answers().items(fields::BRAND_VOICE).to_vec())
    });
    let communication_style = Signal::derive(move || {
        session.with(|s| s.answers().select(fields::COMMUNICATION_STYLE).to_string())
    });
    let tone_level = Signal::derive(move || {
        session.with(|s| s.answers().slider_or(fields::TONE_LEVEL, 50))
    });
    let jargon_level = Signal::derive(move || {
        session.with(|s| s.answers().select(fields::JARGON_LEVEL).to_string())
    });
    let content_priorities = Signal::derive(move || {
        session.with(|s| s.answers().items(fields::CONTENT_PRIORITIES).to_vec())
    });
    let platform_priorities = Signal::derive(move || {
        session.with(|s| {
            s.answers()
                .items(fields::PLATFORM_PRIORITIES)
                .iter()
                .map(|key| channel_label(key))
                .collect::<Vec<_>>()
        })
    });

    let toggle_voice = Callback::new(move |key: String| {
        session.update(|s| s.toggle_selection(fields::BRAND_VOICE, &key));
    });
    let set_communication_style = Callback::new(move |key: String| {
        session.update(|s| s.set_field(fields::COMMUNICATION_STYLE, FieldValue::Select(key)));
    });
    let set_tone_level = Callback::new(move |level: u32| {
        session.update(|s| s.set_field(fields::TONE_LEVEL, FieldValue::Slider(level)));
    });
    let set_jargon_level = Callback::new(move |key: String| {
        session.update(|s| s.set_field(fields::JARGON_LEVEL, FieldValue::Select(key)));
    });
    let move_content_priority = Callback::new(move |(from, to): (usize, usize)| {
        session.update(|s| s.reorder(fields::CONTENT_PRIORITIES, from, to));
    });
    let move_platform_priority = Callback::new(move |(from, to): (usize, usize)| {
        session.update(|s| s.reorder(fields::PLATFORM_PRIORITIES, from, to));
    });

    let tone_caption = Signal::derive(move || tone_description(tone_level.get()).to_string());

    view! {
        <div class="space-y-6">
            <div class="text-center mb-8">
                <Icon name=icons::SPARKLES class="w-12 h-12 mx-auto mb-4"/>
                <h2 class="text-2xl font-bold text-theme-primary">"Define your brand personality"</h2>
            </div>

            <div class="space-y-6">
                <MultiOptionGrid
                    label="Brand Voice (select multiple)"
                    required=true
                    options=owned_options(BRAND_VOICE_OPTIONS)
                    selected=brand_voice
                    on_toggle=toggle_voice
                />

                <OptionGrid
                    label="Communication Style"
                    required=true
                    options=owned_options(COMMUNICATION_STYLE_OPTIONS)
                    value=communication_style
                    on_select=set_communication_style
                    single_column=true
                />

                <SliderField
                    label="Tone Level"
                    value=tone_level
                    on_input=set_tone_level
                    left_caption="Formal"
                    right_caption="Casual"
                    caption=tone_caption
                />

                <OptionGrid
                    label="Jargon Level"
                    required=true
                    options=owned_options(JARGON_LEVEL_OPTIONS)
                    value=jargon_level
                    on_select=set_jargon_level
                    single_column=true
                />

                <RankedListField
                    label="Content Priorities"
                    items=content_priorities
                    on_move=move_content_priority
                    hint="Rank the content types that matter most to you".to_string()
                />

                {move || {
                    (!platform_priorities.get().is_empty()).then(|| view! {
                        <RankedListField
                            label="Platform Priorities"
                            items=platform_priorities
                            on_move=move_platform_priority
                            hint="Rank your channels by importance".to_string()
                        />
                    })
                }}
            </div>
        </div>
    }
}
