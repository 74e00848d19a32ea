//! Core domain logic for the onboarding flow.

#[cfg(feature = "ssr")]
pub mod config;
pub mod profile;
pub mod wizard;
#[cfg(test)]
mod tests;

pub use profile::{BrandVoice, Identity, ProfileRecord, ProfileStoreError};
pub use wizard::*;
