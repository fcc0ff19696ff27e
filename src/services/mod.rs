//! Subtitle provider integrations.

pub mod json_provider;
pub mod provider;
