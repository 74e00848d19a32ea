//! HTTP client for the external profile store.
//!
//! The store holds one profile row per user. A completed onboarding session
//! is written with a single create-or-replace call; there are no partial
//! field updates.

use crate::core::profile::{ProfileRecord, ProfileStoreError};

/// Write the completed profile with one create-or-replace call.
#[cfg(not(feature = "ssr"))]
pub async fn upsert_profile(record: &ProfileRecord) -> Result<(), ProfileStoreError> {
    use gloo_net::http::Request;
    use web_sys::RequestCredentials;

    let resp = Request::put("/api/profile")
        .credentials(RequestCredentials::Include)
        .json(record)
        .map_err(|e| ProfileStoreError::Unreachable(e.to_string()))?
        .send()
        .await
        .map_err(|e| ProfileStoreError::Unreachable(e.to_string()))?;

    if resp.ok() {
        Ok(())
    } else {
        let message = resp.text().await.unwrap_or_default();
        Err(ProfileStoreError::Rejected {
            status: resp.status(),
            message,
        })
    }
}

#[cfg(feature = "ssr")]
pub async fn upsert_profile(_record: &ProfileRecord) -> Result<(), ProfileStoreError> {
    Err(ProfileStoreError::Unreachable(
        "profile writes are client-side only".to_string(),
    ))
}
