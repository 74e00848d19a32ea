//! Toast notifications for the onboarding flow.
//!
//! Success toasts dismiss themselves; error toasts stay until the user
//! closes them so a failed submission is never missed.

use leptos::prelude::*;
use std::collections::VecDeque;

use crate::ui::icon::{Icon, icons};

/// Maximum number of notifications to show at once
const MAX_NOTIFICATIONS: usize = 4;

/// How long success and info toasts stay visible
const AUTO_DISMISS_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// A single toast message.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub auto_dismiss_ms: Option<u32>,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(AUTO_DISMISS_MS),
        }
    }

    /// Errors stay until dismissed.
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: None,
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(AUTO_DISMISS_MS),
        }
    }
}

/// Notification with a unique id for dismissal tracking.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationItem {
    pub id: u64,
    pub notification: Notification,
}

/// Handle for pushing notifications from anywhere in the page.
#[derive(Clone, Copy)]
pub struct NotificationManager {
    notifications: RwSignal<VecDeque<NotificationItem>>,
    next_id: RwSignal<u64>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn notifications(&self) -> RwSignal<VecDeque<NotificationItem>> {
        self.notifications
    }

    pub fn notify(&self, notification: Notification) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.notifications.update(|items| {
            items.push_back(NotificationItem { id, notification });
            while items.len() > MAX_NOTIFICATIONS {
                items.pop_front();
            }
        });
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Notification::success(title, message));
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Notification::error(title, message));
    }

    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Notification::info(title, message));
    }

    pub fn clear(&self) {
        self.notifications.set(VecDeque::new());
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-position container rendering the active toasts.
#[component]
pub fn NotificationsContainer(manager: NotificationManager) -> impl IntoView {
    let notifications = manager.notifications();

    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 max-w-sm">
            {move || {
                notifications.get().into_iter().map(|item| {
                    view! {
                        <NotificationToast item=item notifications=notifications />
                    }
                }).collect_view()
            }}
        </div>
    }
}

/// Single toast.
#[component]
fn NotificationToast(
    item: NotificationItem,
    notifications: RwSignal<VecDeque<NotificationItem>>,
) -> impl IntoView {
    let id = item.id;

    if let Some(_ms) = item.notification.auto_dismiss_ms {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(_ms).await;
                notifications.update(|items| {
                    items.retain(|existing| existing.id != id);
                });
            });
        }
    }

    let (border_class, icon_class) = match item.notification.kind {
        NotificationKind::Success => ("border-green-500/30 bg-green-500/10", "text-green-400"),
        NotificationKind::Error => ("border-red-500/30 bg-red-500/10", "text-red-400"),
        NotificationKind::Info => ("border-blue-500/30 bg-blue-500/10", "text-blue-400"),
    };

    let icon_name = match item.notification.kind {
        NotificationKind::Success => icons::CHECK,
        NotificationKind::Error => icons::ALERT_CIRCLE,
        NotificationKind::Info => icons::SPARKLES,
    };

    let container_class = format!(
        "flex items-start gap-3 p-4 rounded-lg border backdrop-blur-sm shadow-lg {}",
        border_class
    );

    view! {
        <div class=container_class>
            <div class=icon_class>
                <Icon name=icon_name class="w-5 h-5"/>
            </div>
            <div class="flex-1 min-w-0">
                <h4 class="text-sm font-medium text-theme-primary">{item.notification.title.clone()}</h4>
                <p class="text-xs text-theme-secondary mt-0.5">{item.notification.message.clone()}</p>
            </div>
            <button
                class="text-theme-tertiary hover:text-theme-primary transition-colors"
                on:click=move |_| {
                    notifications.update(|items| {
                        items.retain(|existing| existing.id != id);
                    });
                }
            >
                <Icon name=icons::X class="w-4 h-4"/>
            </button>
        </div>
    }
}
