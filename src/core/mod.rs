//! Core matching and ranking logic.

pub mod identifiers;
pub mod normalizer;
pub mod ranking;
pub mod search;
pub mod selection;
