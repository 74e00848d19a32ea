//! Landing page with the entry point into onboarding.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_navigate;

use crate::ui::auth::{use_auth_context, AuthState};
use crate::ui::icon::{Icon, icons};

/// Landing page component
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth_context();
    let navigate = use_navigate();

    let on_get_started = move |_| {
        navigate("/onboarding", Default::default());
    };

    view! {
        <Title text="BrandPilot - AI Marketing Agent"/>
        <Meta
            name="description"
            content="BrandPilot builds your marketing strategy from a short onboarding. Answer a few questions about your business and get a plan tailored to your brand voice."
        />

        <div class="min-h-screen bg-theme-primary overflow-x-hidden">
            // Header
            <header class="flex items-center justify-between px-6 py-4 border-b border-theme">
                <div class="flex items-center gap-2">
                    <Icon name=icons::SPARKLES class="w-6 h-6"/>
                    <span class="text-lg font-semibold text-theme-primary">"BrandPilot"</span>
                </div>
                {move || {
                    match auth.state.get() {
                        AuthState::Authenticated(identity) => view! {
                            <span class="text-sm text-theme-secondary">{identity.email}</span>
                        }.into_any(),
                        _ => view! {
                            <span class="text-sm text-theme-tertiary">"Guest"</span>
                        }.into_any(),
                    }
                }}
            </header>

            // Hero
            <section class="min-h-[70vh] flex items-center justify-center relative pt-16">
                <div class="text-center px-4 max-w-3xl mx-auto">
                    <h1 class="text-5xl sm:text-6xl font-bold text-theme-primary mb-6 tracking-tight">
                        "Your AI marketing agent"
                    </h1>
                    <p class="text-xl text-theme-secondary max-w-2xl mx-auto mb-10 leading-relaxed">
                        "Tell BrandPilot about your business once. Get a marketing strategy, content plan, and brand voice that actually sound like you."
                    </p>
                    <button
                        class="px-8 py-3 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg transition-colors"
                        on:click=on_get_started
                    >
                        "Get Started"
                    </button>
                </div>
            </section>

            // Features
            <section class="py-20 px-4 bg-theme-secondary/10">
                <div class="max-w-5xl mx-auto grid md:grid-cols-3 gap-8">
                    <FeatureCard
                        icon=icons::BUILDING
                        title="Built around your business"
                        description="A four-step onboarding captures your industry, audience, goals, and budget. Progress is saved locally, so you can finish any time."
                    />
                    <FeatureCard
                        icon=icons::TARGET
                        title="Audience first"
                        description="Describe who you want to reach and where. The strategy targets the channels your customers already use."
                    />
                    <FeatureCard
                        icon=icons::TRENDING_UP
                        title="A voice that fits"
                        description="Set tone, jargon level, and content priorities once. Everything generated afterwards follows them."
                    />
                </div>
            </section>
        </div>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-theme-primary p-6 rounded-xl border border-theme hover:border-accent-primary/50
                    transition-all duration-300 hover:shadow-lg">
            <div class="w-12 h-12 rounded-lg bg-accent-primary/10 flex items-center justify-center mb-4">
                <Icon name=icon class="w-6 h-6"/>
            </div>
            <h3 class="text-lg font-semibold text-theme-primary mb-2">{title}</h3>
            <p class="text-theme-secondary text-sm leading-relaxed">{description}</p>
        </div>
    }
}
