//! The onboarding page: progress header, step body, navigation, and the
//! single-submission path.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::core::profile::ProfileRecord;
use crate::core::wizard::{onboarding, MissingFields, SessionPhase, SubmitError, WizardSession};
use crate::ui::auth::{use_auth_context, AuthState};
use crate::ui::browser_storage::BrowserDraftStore;
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::{NotificationManager, NotificationsContainer};
use crate::ui::profile_client::upsert_profile;

use super::step_audience::AudienceStep;
use super::step_brand_voice::BrandVoiceStep;
use super::step_business::BusinessStep;
use super::step_goals::GoalsStep;

/// Human-readable list of the missing fields' labels.
fn missing_message(err: &MissingFields) -> String {
    let labels = err
        .missing_fields
        .iter()
        .filter_map(|name| onboarding().field(name).map(|field| field.label))
        .collect::<Vec<_>>();
    format!("Please fill in: {}", labels.join(", "))
}

#[component]
pub fn OnboardingPage() -> impl IntoView {
    let auth = use_auth_context();
    let navigate = use_navigate();
    let notices = NotificationManager::new();
    let session = RwSignal::new(WizardSession::initialize(onboarding(), BrowserDraftStore));
    let missing = RwSignal::new(Vec::<&'static str>::new());

    // The server renders a fresh session; restore any saved draft after
    // hydration (client-side only, Effects never run during SSR).
    Effect::new(move |_| {
        session.set(WizardSession::initialize(onboarding(), BrowserDraftStore));
    });

    let step_count = onboarding().step_count();
    let current_step = Signal::derive(move || session.with(|s| s.current_step()));
    let submitting =
        Signal::derive(move || session.with(|s| s.phase() == SessionPhase::Submitting));

    let on_back = move |_| {
        missing.set(Vec::new());
        session.update(|s| s.retreat());
    };

    let on_continue = move |_| {
        let mut outcome: Result<(), MissingFields> = Ok(());
        session.update(|s| outcome = s.advance());
        match outcome {
            Ok(()) => missing.set(Vec::new()),
            Err(err) => {
                notices.error("Missing information", missing_message(&err));
                missing.set(err.missing_fields);
            }
        }
    };

    let on_submit = {
        let navigate = navigate.clone();
        move |_| {
            let identity = auth.identity();
            let mut begun: Result<ProfileRecord, SubmitError> = Err(SubmitError::NotInFlight);
            session.update(|s| begun = s.begin_submit(identity.as_ref()));
            match begun {
                Ok(record) => {
                    missing.set(Vec::new());
                    let navigate = navigate.clone();
                    spawn_local(async move {
                        let outcome = upsert_profile(&record).await;
                        let mut resolved: Result<(), SubmitError> = Ok(());
                        session.update(|s| resolved = s.resolve_submit(outcome));
                        match resolved {
                            Ok(()) => {
                                notices
                                    .success("Welcome aboard", "Your profile has been created.");
                                navigate("/", Default::default());
                            }
                            Err(err) => {
                                notices.error("Submission failed", err.to_string());
                            }
                        }
                    });
                }
                Err(SubmitError::Incomplete(err)) => {
                    notices.error("Missing information", missing_message(&err));
                    missing.set(err.missing_fields);
                }
                Err(SubmitError::NotAuthenticated) => {
                    notices.error("Not signed in", "Sign in to finish creating your profile.");
                }
                Err(err) => {
                    notices.error("Submission failed", err.to_string());
                }
            }
        }
    };

    view! {
        <div class="min-h-screen bg-theme-primary py-8 px-4">
            <NotificationsContainer manager=notices/>

            <div class="max-w-2xl mx-auto">
                <ProgressHeader current_step=current_step step_count=step_count/>

                {move || {
                    matches!(auth.state.get(), AuthState::Unauthenticated).then(|| view! {
                        <div class="mb-6 p-3 rounded-lg border border-theme bg-theme-secondary">
                            <p class="text-sm text-theme-secondary">
                                "You are browsing as a guest. Sign in before the final step to save your profile."
                            </p>
                        </div>
                    })
                }}

                <div class="bg-theme-secondary/40 border border-theme rounded-2xl shadow-xl p-8">
                    {move || match current_step.get() {
                        0 => view! { <BusinessStep session=session missing=missing/> }.into_any(),
                        1 => view! { <AudienceStep session=session missing=missing/> }.into_any(),
                        2 => view! { <GoalsStep session=session missing=missing/> }.into_any(),
                        _ => view! { <BrandVoiceStep session=session/> }.into_any(),
                    }}

                    {move || {
                        let names = missing.get();
                        (!names.is_empty()).then(|| {
                            let labels = names
                                .iter()
                                .filter_map(|name| onboarding().field(name).map(|field| field.label))
                                .collect::<Vec<_>>()
                                .join(", ");
                            view! {
                                <div class="mt-6 p-3 rounded-lg border border-red-500/30 bg-red-500/10 flex items-center gap-2">
                                    <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
                                    <p class="text-sm text-red-500">{format!("Required: {}", labels)}</p>
                                </div>
                            }
                        })
                    }}

                    // Navigation
                    <div class="flex justify-between items-center mt-8 pt-6 border-t border-theme">
                        <div>
                            {move || (current_step.get() > 0).then(|| view! {
                                <button
                                    type="button"
                                    class="px-4 py-2 border border-theme text-theme-primary hover:bg-theme-secondary font-medium rounded-lg transition-colors flex items-center"
                                    on:click=on_back
                                >
                                    <Icon name=icons::ARROW_LEFT class="w-4 h-4 mr-2"/>
                                    "Back"
                                </button>
                            })}
                        </div>
                        <div>
                            {
                                let on_submit = on_submit.clone();
                                move || {
                                    if current_step.get() + 1 < step_count {
                                        view! {
                                            <button
                                                type="button"
                                                class="px-6 py-2.5 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg transition-colors flex items-center"
                                                on:click=on_continue
                                            >
                                                "Continue"
                                                <Icon name=icons::ARROW_RIGHT class="w-4 h-4 ml-2"/>
                                            </button>
                                        }.into_any()
                                    } else {
                                        let on_submit = on_submit.clone();
                                        view! {
                                            <button
                                                type="button"
                                                class="px-6 py-2.5 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg transition-colors flex items-center disabled:opacity-50 disabled:cursor-not-allowed"
                                                disabled=move || submitting.get()
                                                on:click=on_submit
                                            >
                                                {move || if submitting.get() {
                                                    view! {
                                                        <span class="flex items-center">
                                                            <Icon name=icons::LOADER class="animate-spin mr-2 w-4 h-4"/>
                                                            "Creating your profile..."
                                                        </span>
                                                    }.into_any()
                                                } else {
                                                    view! {
                                                        <span class="flex items-center">
                                                            "Generate My Strategy"
                                                            <Icon name=icons::SPARKLES class="w-4 h-4 ml-2"/>
                                                        </span>
                                                    }.into_any()
                                                }}
                                            </button>
                                        }.into_any()
                                    }
                                }
                            }
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Step markers plus a fill bar, mirroring wizard progress.
#[component]
fn ProgressHeader(current_step: Signal<usize>, step_count: usize) -> impl IntoView {
    view! {
        <div class="w-full max-w-md mx-auto mb-8">
            <div class="flex items-center justify-between mb-2">
                {(0..step_count).map(|step| {
                    let marker_class = move || {
                        if step < current_step.get() {
                            "w-8 h-8 rounded-full flex items-center justify-center text-sm font-medium bg-green-500 text-white"
                        } else if step == current_step.get() {
                            "w-8 h-8 rounded-full flex items-center justify-center text-sm font-medium bg-accent-primary text-white"
                        } else {
                            "w-8 h-8 rounded-full flex items-center justify-center text-sm font-medium bg-theme-secondary text-theme-tertiary"
                        }
                    };
                    view! {
                        <div class=marker_class>
                            {move || if step < current_step.get() {
                                view! { <Icon name=icons::CHECK class="w-4 h-4"/> }.into_any()
                            } else {
                                view! { <span>{(step + 1).to_string()}</span> }.into_any()
                            }}
                        </div>
                    }
                }).collect_view()}
            </div>
            <div class="w-full bg-theme-secondary rounded-full h-2">
                <div
                    class="bg-accent-primary h-2 rounded-full transition-all"
                    style=move || format!("width: {}%", ((current_step.get() + 1) * 100) / step_count)
                ></div>
            </div>
            <p class="text-center text-sm text-theme-tertiary mt-2">
                {move || format!("Step {} of {}", current_step.get() + 1, step_count)}
            </p>
        </div>
    }
}
