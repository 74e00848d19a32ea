//! Onboarding wizard page and step views.

mod page;
mod step_audience;
mod step_brand_voice;
mod step_business;
mod step_goals;

use leptos::prelude::*;

use crate::core::wizard::WizardSession;
use crate::ui::browser_storage::BrowserDraftStore;

pub use page::OnboardingPage;

/// The session type every wizard view works against.
pub type OnboardingSession = WizardSession<BrowserDraftStore>;

/// Owned `(key, label)` pairs for the form components.
fn owned_options(options: &[(&str, &str)]) -> Vec<(String, String)> {
    options
        .iter()
        .map(|(key, label)| (key.to_string(), label.to_string()))
        .collect()
}

/// Owned options with an empty-key placeholder entry in front, for
/// dropdowns.
fn select_options(placeholder: &str, options: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut owned = Vec::with_capacity(options.len() + 1);
    owned.push((String::new(), placeholder.to_string()));
    owned.extend(owned_options(options));
    owned
}

/// Whether `name` is in the current missing-fields list.
fn missing_signal(missing: RwSignal<Vec<&'static str>>, name: &'static str) -> Signal<bool> {
    Signal::derive(move || missing.get().contains(&name))
}
