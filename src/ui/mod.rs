pub mod auth;
pub mod browser_storage;
pub mod common;
pub mod icon;
pub mod notifications;
pub mod pages;
pub mod profile_client;
pub mod wizard;

pub use browser_storage::BrowserDraftStore;
pub use icon::{icons, Icon};
pub use notifications::{NotificationManager, NotificationsContainer};
