//! SubiT core library
//!
//! Decides whether a subtitle provider's candidate is the requested title and
//! ranks matching candidates against the user's own release.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod services;

pub use crate::core::identifiers::extract_identifiers;
pub use crate::core::ranking::rank_version;
pub use crate::core::selection::build_ranked_groups;
pub use crate::models::title::is_same_title;
pub use error::{Error, Result};
