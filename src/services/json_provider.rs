//! Local provider backed by a JSON file of candidate records.
//!
//! The file holds an array of [`CandidateRecord`]s, the same shape a network
//! provider produces after scraping.

use crate::models::language::Language;
use crate::models::title::Title;
use crate::models::version::{CandidateRecord, ProviderVersion, Version};
use crate::services::provider::{query_string, Provider};
use crate::{Error, Result};
use futures::future::BoxFuture;
use futures::FutureExt;
use std::path::{Path, PathBuf};

/// Attribute holding inline subtitle text for [`JsonFileProvider`] downloads.
pub const SUBTITLE_ATTRIBUTE: &str = "subtitle";

/// Provider reading candidates from a JSON file.
pub struct JsonFileProvider {
    path: PathBuf,
    languages: Vec<&'static Language>,
}

impl JsonFileProvider {
    /// Create a provider for `path` serving `languages`.
    pub fn new(path: &Path, languages: Vec<&'static Language>) -> Self {
        Self {
            path: path.to_path_buf(),
            languages,
        }
    }

    /// Load all records from the file.
    ///
    /// The file must hold a JSON array. Entries that do not decode as a
    /// record are logged and skipped.
    pub fn load_records(&self) -> Result<Vec<CandidateRecord>> {
        if !self.path.exists() {
            return Err(Error::provider(
                self.name(),
                format!("candidates file not found: {}", self.path.display()),
            ));
        }
        let content = std::fs::read_to_string(&self.path)?;
        let entries: Vec<serde_json::Value> = serde_json::from_str(&content)?;

        let mut records = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<CandidateRecord>(entry) {
                Ok(record) => records.push(record),
                Err(e) => tracing::warn!(
                    "Skipping malformed record #{} in {}: {}",
                    index,
                    self.path.display(),
                    e
                ),
            }
        }
        Ok(records)
    }
}

impl Provider for JsonFileProvider {
    fn name(&self) -> &str {
        "json-file"
    }

    fn languages_in_use(&self) -> &[&'static Language] {
        &self.languages
    }

    fn get_title_versions<'a>(
        &'a self,
        title: &'a Title,
        _version: &'a Version,
    ) -> BoxFuture<'a, Result<Vec<CandidateRecord>>> {
        async move {
            tracing::debug!("Using the query: {}", query_string(title));
            let records = self.load_records()?;
            tracing::debug!(
                "Loaded {} candidates from {}",
                records.len(),
                self.path.display()
            );
            Ok::<_, Error>(records)
        }
        .boxed()
    }

    fn download_subtitle_buffer<'a>(
        &'a self,
        version: &'a ProviderVersion,
    ) -> BoxFuture<'a, Result<Vec<u8>>> {
        async move {
            match version.attributes().get(SUBTITLE_ATTRIBUTE) {
                Some(serde_json::Value::String(text)) => Ok(text.as_bytes().to_vec()),
                _ => Err(Error::provider(
                    self.name(),
                    format!("no subtitle content for '{}'", version.version_string()),
                )),
            }
        }
        .boxed()
    }
}
