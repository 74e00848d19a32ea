//! Auth context exposing the current principal from the external identity
//! provider.
//!
//! The onboarding flow only consumes the session: it restores a cached
//! principal from localStorage, verifies it against the provider, and hands
//! the [`Identity`] to the wizard at submission time. Sign-in itself lives
//! with the provider, not here.

use leptos::prelude::*;
#[cfg(not(feature = "ssr"))]
use leptos::task::spawn_local;
#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

use crate::core::profile::Identity;

/// Authentication state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    /// Initial state, checking the cached session.
    #[default]
    Loading,
    /// No current session with the identity provider.
    Unauthenticated,
    /// Verified session for this principal.
    Authenticated(Identity),
}

/// Auth context providing the session state to the component tree.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
}

impl AuthContext {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state.get(), AuthState::Authenticated(_))
    }

    /// Current principal, if any.
    pub fn identity(&self) -> Option<Identity> {
        match self.state.get() {
            AuthState::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }
}

#[allow(dead_code)]
const STORAGE_KEY_SESSION: &str = "brandpilot-session";

/// Provide auth context to the component tree.
pub fn provide_auth_context() -> AuthContext {
    // Start Unauthenticated on both server and client to avoid a hydration
    // mismatch; the real state is resolved after hydration.
    let state = RwSignal::new(AuthState::Unauthenticated);
    let ctx = AuthContext { state };

    // Restore the cached principal and verify it with the provider
    // (client-side only).
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            state.set(AuthState::Loading);

            if let Some(cached) = read_cached_identity() {
                // Optimistic until the provider confirms.
                state.set(AuthState::Authenticated(cached));
            }

            spawn_local(async move {
                match fetch_session().await {
                    Ok(identity) => {
                        write_cached_identity(&identity);
                        state.set(AuthState::Authenticated(identity));
                    }
                    Err(_) => {
                        clear_cached_identity();
                        state.set(AuthState::Unauthenticated);
                    }
                }
            });
        });
    }

    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree.
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Query the identity provider for the current session.
#[cfg(not(feature = "ssr"))]
async fn fetch_session() -> Result<Identity, String> {
    use gloo_net::http::Request;
    use web_sys::RequestCredentials;

    let resp = Request::get("/api/auth/session")
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !resp.ok() {
        return Err(format!("session check failed with status {}", resp.status()));
    }

    resp.json::<Identity>().await.map_err(|e| e.to_string())
}

/// Read the cached principal from localStorage.
#[cfg(not(feature = "ssr"))]
fn read_cached_identity() -> Option<Identity> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let raw = storage.get_item(STORAGE_KEY_SESSION).ok()??;
    serde_json::from_str(&raw).ok()
}

/// Cache the verified principal in localStorage.
#[cfg(not(feature = "ssr"))]
fn write_cached_identity(identity: &Identity) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(
                STORAGE_KEY_SESSION,
                &serde_json::to_string(identity).unwrap_or_default(),
            );
        }
    }
}

/// Drop the cached principal from localStorage.
#[cfg(not(feature = "ssr"))]
fn clear_cached_identity() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(STORAGE_KEY_SESSION);
        }
    }
}
