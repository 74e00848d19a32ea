//! Draft store backed by the browser's localStorage.

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

use crate::core::wizard::DraftStore;

/// `window.localStorage` adapter.
///
/// All operations are best effort: private browsing modes and storage
/// quotas lose the draft, never the session. On the server every read is a
/// miss and writes are dropped, so server rendering always sees a fresh
/// session.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDraftStore;

impl DraftStore for BrowserDraftStore {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    if let Ok(value) = storage.get_item(key) {
                        return value;
                    }
                }
            }
            None
        }
        #[cfg(feature = "ssr")]
        {
            let _ = key;
            None
        }
    }

    fn save(&self, key: &str, value: &str) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(key, value);
                }
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (key, value);
        }
    }

    fn clear(&self, key: &str) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(key);
                }
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = key;
        }
    }
}
