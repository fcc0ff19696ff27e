//! CLI command implementations.

pub mod extract;
pub mod languages;
pub mod rank;
