//! Form building blocks for the onboarding wizard.

use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Text input with label and optional requirement marker.
#[component]
pub fn FormField(
    /// Field label text
    #[prop(into)]
    label: String,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Highlight as missing after a failed step validation
    #[prop(optional)]
    missing: Option<Signal<bool>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="block text-sm font-medium text-theme-primary">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <input
                type="text"
                class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                       text-theme-primary placeholder-theme-tertiary
                       focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent
                       transition-colors"
                class:border-red-500=move || missing.map(|m| m.get()).unwrap_or(false)
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Multi-line text input with a live character counter.
#[component]
pub fn TextAreaField(
    /// Field label text
    #[prop(into)]
    label: String,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Maximum character count; 0 hides the counter
    #[prop(default = 0)]
    max_len: usize,
    /// Number of rows
    #[prop(default = 4)]
    rows: u32,
    /// Highlight as missing after a failed step validation
    #[prop(optional)]
    missing: Option<Signal<bool>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="block text-sm font-medium text-theme-primary">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <textarea
                class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg resize-none
                       text-theme-primary placeholder-theme-tertiary
                       focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent
                       transition-colors"
                class:border-red-500=move || missing.map(|m| m.get()).unwrap_or(false)
                placeholder=placeholder
                rows=rows
                maxlength=(max_len > 0).then(|| max_len.to_string())
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {(max_len > 0).then(|| view! {
                <p class="text-sm text-theme-tertiary">
                    {move || format!("{}/{}", value.get().chars().count(), max_len)}
                </p>
            })}
        </div>
    }
}

/// Dropdown select over `(key, label)` options.
///
/// The first entry is typically an empty key acting as the placeholder.
#[component]
pub fn SelectField(
    /// Field label text
    #[prop(into)]
    label: String,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Current value signal
    value: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
    /// Options as (key, display_text) pairs
    options: Vec<(String, String)>,
    /// Highlight as missing after a failed step validation
    #[prop(optional)]
    missing: Option<Signal<bool>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="block text-sm font-medium text-theme-primary">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <select
                class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                       text-theme-primary
                       focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent
                       transition-colors"
                class:border-red-500=move || missing.map(|m| m.get()).unwrap_or(false)
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options.into_iter().map(|(key, text)| {
                    view! {
                        <option value=key.clone()>{text}</option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

/// Grid of single-select toggle buttons.
#[component]
pub fn OptionGrid(
    /// Field label text
    #[prop(into)]
    label: String,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Options as (key, display_text) pairs
    options: Vec<(String, String)>,
    /// Currently selected key
    value: Signal<String>,
    /// Selection callback
    on_select: Callback<String>,
    /// Use one column instead of two
    #[prop(default = false)]
    single_column: bool,
) -> impl IntoView {
    let grid_class = if single_column {
        "grid grid-cols-1 gap-3"
    } else {
        "grid grid-cols-2 gap-3"
    };

    view! {
        <div class="space-y-1.5">
            <label class="block text-sm font-medium text-theme-primary">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <div class=grid_class>
                {options.into_iter().map(|(key, text)| {
                    let key_for_state = key.clone();
                    let key_for_click = key.clone();
                    let button_class = move || {
                        if value.get() == key_for_state {
                            "p-3 text-left rounded-lg border border-accent-primary bg-accent-primary/5 text-accent-primary transition-all"
                        } else {
                            "p-3 text-left rounded-lg border border-theme hover:border-theme-strong transition-all"
                        }
                    };
                    view! {
                        <button
                            type="button"
                            class=button_class
                            on:click=move |_| on_select.run(key_for_click.clone())
                        >
                            {text}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Grid of multi-select toggle buttons.
#[component]
pub fn MultiOptionGrid(
    /// Field label text
    #[prop(into)]
    label: String,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Options as (key, display_text) pairs
    options: Vec<(String, String)>,
    /// Currently selected keys
    selected: Signal<Vec<String>>,
    /// Toggle callback receiving the clicked key
    on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="block text-sm font-medium text-theme-primary">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <div class="grid grid-cols-2 gap-3">
                {options.into_iter().map(|(key, text)| {
                    let key_for_state = key.clone();
                    let key_for_click = key.clone();
                    let button_class = move || {
                        if selected.get().iter().any(|item| item == &key_for_state) {
                            "p-3 text-left rounded-lg border border-accent-primary bg-accent-primary/5 text-accent-primary transition-all"
                        } else {
                            "p-3 text-left rounded-lg border border-theme hover:border-theme-strong transition-all"
                        }
                    };
                    view! {
                        <button
                            type="button"
                            class=button_class
                            on:click=move |_| on_toggle.run(key_for_click.clone())
                        >
                            {text}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Range slider with end captions and a live description.
#[component]
pub fn SliderField(
    /// Field label text
    #[prop(into)]
    label: String,
    /// Current position
    value: Signal<u32>,
    /// Input event callback
    on_input: Callback<u32>,
    #[prop(default = 0)] min: u32,
    #[prop(default = 100)] max: u32,
    /// Caption under the left end of the range
    #[prop(into)]
    left_caption: String,
    /// Caption under the right end of the range
    #[prop(into)]
    right_caption: String,
    /// Live description of the current position
    #[prop(optional, into)]
    caption: Option<Signal<String>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="block text-sm font-medium text-theme-primary">{label}</label>
            <input
                type="range"
                min=min
                max=max
                class="w-full h-2 bg-theme-secondary rounded-lg appearance-none cursor-pointer"
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    if let Ok(position) = event_target_value(&ev).parse::<u32>() {
                        on_input.run(position);
                    }
                }
            />
            <div class="flex justify-between text-sm text-theme-tertiary">
                <span>{left_caption}</span>
                <span>{right_caption}</span>
            </div>
            {caption.map(|c| view! {
                <p class="text-center text-sm font-medium text-accent-primary">{move || c.get()}</p>
            })}
        </div>
    }
}

/// Ordered list with per-row move up/down controls.
#[component]
pub fn RankedListField(
    /// Field label text
    #[prop(into)]
    label: String,
    /// Items in their current order
    items: Signal<Vec<String>>,
    /// Reorder callback receiving (from, to) indices
    on_move: Callback<(usize, usize)>,
    /// Helper text shown under the label
    #[prop(optional)]
    hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="block text-sm font-medium text-theme-primary">{label}</label>
            {hint.map(|text| view! { <p class="text-sm text-theme-tertiary">{text}</p> })}
            <ul class="space-y-2">
                {move || {
                    let list = items.get();
                    let len = list.len();
                    list.into_iter().enumerate().map(|(index, item)| {
                        view! {
                            <li class="flex items-center gap-3 p-3 rounded-lg border border-theme bg-theme-secondary">
                                <span class="text-sm font-medium text-theme-tertiary">
                                    {format!("#{}", index + 1)}
                                </span>
                                <span class="flex-1 text-theme-primary">{item}</span>
                                <button
                                    type="button"
                                    class="text-theme-tertiary hover:text-theme-primary disabled:opacity-30"
                                    disabled=index == 0
                                    on:click=move |_| on_move.run((index, index.saturating_sub(1)))
                                >
                                    <Icon name=icons::CHEVRON_UP class="w-4 h-4"/>
                                </button>
                                <button
                                    type="button"
                                    class="text-theme-tertiary hover:text-theme-primary disabled:opacity-30"
                                    disabled=index + 1 == len
                                    on:click=move |_| on_move.run((index, index + 1))
                                >
                                    <Icon name=icons::CHEVRON_DOWN class="w-4 h-4"/>
                                </button>
                            </li>
                        }
                    }).collect_view()
                }}
            </ul>
        </div>
    }
}
