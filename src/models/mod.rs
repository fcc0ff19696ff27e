//! Data models.

pub mod config;
pub mod language;
pub mod title;
pub mod version;
