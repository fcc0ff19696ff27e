//! Subtitle search orchestration.
//!
//! Queries every provider, keeps the candidates that are the requested
//! title, ranks them against the user's version and groups them for
//! presentation. A failing provider or a malformed candidate is logged and
//! skipped; it never aborts the search.

use crate::core::ranking::rank_version;
use crate::core::selection::{build_ranked_groups, RankedGroups};
use crate::models::config::Config;
use crate::models::language::Language;
use crate::models::title::{is_same_title, Title};
use crate::models::version::{CandidateRecord, ProviderVersion, Version};
use crate::services::provider::Provider;
use crate::{Error, Result};
use futures::stream::{self, StreamExt};
use std::sync::Arc;

/// A provider that failed during a search.
#[derive(Debug)]
pub struct ProviderFailure {
    pub provider: String,
    pub error: Error,
}

/// Result of a search.
#[derive(Debug)]
pub struct SearchOutcome {
    /// The requested title.
    pub title: Title,
    /// Ranked candidates, grouped by language and rank group.
    pub groups: RankedGroups,
    /// Candidates dropped because they are a different title.
    pub rejected: usize,
    /// Candidates dropped because their record failed validation.
    pub invalid: usize,
    /// Providers that could not be queried.
    pub failures: Vec<ProviderFailure>,
}

/// Search engine over a set of providers.
pub struct SearchEngine {
    providers: Vec<Arc<dyn Provider>>,
    config: Config,
    preferred: Vec<&'static Language>,
}

impl SearchEngine {
    /// Create a search engine. The configuration is validated here.
    pub fn new(providers: Vec<Arc<dyn Provider>>, config: Config) -> Result<Self> {
        config.validate()?;
        let preferred = config.preferred_languages()?;
        Ok(Self {
            providers,
            config,
            preferred,
        })
    }

    /// Search all providers for subtitles matching `input`.
    pub async fn search(&self, input: &Version) -> Result<SearchOutcome> {
        let title = input.title();
        tracing::info!(
            "Searching {} providers for {}",
            self.providers.len(),
            title
        );

        let fetched: Vec<(Arc<dyn Provider>, Result<Vec<CandidateRecord>>)> =
            stream::iter(self.providers.iter().cloned())
                .map(|provider| async move {
                    let result = provider.get_title_versions(title, input).await;
                    (provider, result)
                })
                .buffered(self.config.search.max_concurrent_providers)
                .collect()
                .await;

        let mut candidates = Vec::new();
        let mut failures = Vec::new();
        let mut rejected = 0;
        let mut invalid = 0;

        for (provider, result) in fetched {
            let records = match result {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!("Provider {} failed: {}", provider.name(), e);
                    failures.push(ProviderFailure {
                        provider: provider.name().to_string(),
                        error: e,
                    });
                    continue;
                }
            };

            for record in records {
                let version = match record.into_provider_version(provider.clone()) {
                    Ok(version) => version,
                    Err(e) => {
                        tracing::warn!("Skipping candidate from {}: {}", provider.name(), e);
                        invalid += 1;
                        continue;
                    }
                };

                if !is_same_title(title, version.title()) {
                    tracing::debug!(
                        "Rejected {} from {}: not {}",
                        version.title(),
                        provider.name(),
                        title
                    );
                    rejected += 1;
                    continue;
                }

                candidates.push(version);
            }
        }

        let ranked = self.rank_candidates(input, candidates);
        let mut groups = build_ranked_groups(ranked);
        groups.order_by_preference(&self.preferred);

        tracing::info!(
            "Found {} versions in {} languages ({} rejected, {} invalid, {} providers failed)",
            groups.version_count(),
            groups.len(),
            rejected,
            invalid,
            failures.len()
        );

        Ok(SearchOutcome {
            title: title.clone(),
            groups,
            rejected,
            invalid,
            failures,
        })
    }

    /// Rank candidates against the input version.
    ///
    /// Certain matches get the configured certain-match rank instead of a
    /// computed one.
    pub fn rank_candidates(
        &self,
        input: &Version,
        candidates: Vec<ProviderVersion>,
    ) -> Vec<ProviderVersion> {
        let ratio = self.config.ranking.input_ratio;

        candidates
            .into_iter()
            .map(|mut candidate| {
                let rank = if candidate.is_certain_match() {
                    self.config.ranking.certain_match_rank
                } else {
                    rank_version(input, candidate.version(), ratio)
                };
                if let Err(e) = candidate.set_rank(rank) {
                    tracing::warn!("Could not rank {}: {}", candidate.version_string(), e);
                }
                tracing::debug!(
                    "Ranked '{}' at {:.2} (group {})",
                    candidate.version_string(),
                    candidate.rank(),
                    candidate.rank_group()
                );
                candidate
            })
            .collect()
    }

    /// Download the subtitle behind a ranked version from its provider.
    pub async fn download(&self, version: &ProviderVersion) -> Result<Vec<u8>> {
        version.provider().download_subtitle_buffer(version).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::language::{ENGLISH, HEBREW};
    use crate::models::title::TitleFields;
    use crate::services::provider::testing::MockProvider;

    fn matrix_fields() -> TitleFields {
        TitleFields {
            name: "The Matrix".to_string(),
            year: Some(1999),
            ..Default::default()
        }
    }

    fn record(release: &str, language: &str) -> CandidateRecord {
        CandidateRecord {
            title: Some(matrix_fields()),
            version_string: release.to_string(),
            language: language.to_string(),
            ..Default::default()
        }
    }

    fn input() -> Version {
        let title = Title::from_fields(matrix_fields()).unwrap();
        Version::from_release(title, "The.Matrix.1999.720p.BluRay.DTS.x264-ESiR", 0).unwrap()
    }

    #[tokio::test]
    async fn test_search_ranks_and_groups() {
        let provider: Arc<dyn Provider> = Arc::new(
            MockProvider::new("mock", vec![&ENGLISH, &HEBREW]).with_records(vec![
                record("The.Matrix.1999.1080p.WEB-DL", "eng"),
                record("The.Matrix.1999.720p.BluRay.DTS.x264-ESiR", "eng"),
                record("The.Matrix.1999.720p.BluRay.DTS.x264-ESiR", "heb"),
            ]),
        );
        let engine = SearchEngine::new(vec![provider], Config::default()).unwrap();

        let outcome = engine.search(&input()).await.unwrap();
        assert_eq!(outcome.groups.version_count(), 3);
        assert_eq!(outcome.rejected, 0);

        let best = outcome.groups.best(&ENGLISH).unwrap();
        assert_eq!(best.version_string(), "The.Matrix.1999.720p.BluRay.DTS.x264-ESiR");
        assert_eq!(best.rank(), 100.0);
        assert_eq!(best.rank_group(), 10);

        // English is the configured preference.
        assert_eq!(outcome.groups.languages()[0].language, &ENGLISH);
    }

    #[tokio::test]
    async fn test_search_rejects_other_titles_and_bad_records() {
        let other = CandidateRecord {
            title: Some(TitleFields {
                name: "The Matrix Reloaded".to_string(),
                year: Some(2003),
                ..Default::default()
            }),
            version_string: "720p".to_string(),
            language: "eng".to_string(),
            ..Default::default()
        };
        let provider: Arc<dyn Provider> = Arc::new(
            MockProvider::new("mock", vec![&ENGLISH]).with_records(vec![
                other,
                record("The.Matrix.1999.720p", "klingon"),
                record("The.Matrix.1999.720p", "eng"),
            ]),
        );
        let engine = SearchEngine::new(vec![provider], Config::default()).unwrap();

        let outcome = engine.search(&input()).await.unwrap();
        assert_eq!(outcome.rejected, 1);
        assert_eq!(outcome.invalid, 1);
        assert_eq!(outcome.groups.version_count(), 1);
    }

    #[test]
    fn test_certain_match_rank() {
        let provider: Arc<dyn Provider> = Arc::new(MockProvider::new("mock", vec![&ENGLISH]));
        let engine = SearchEngine::new(vec![provider.clone()], Config::default()).unwrap();

        let mut certain = record("nothing.in.common", "eng");
        certain.is_certain_match = true;
        let candidate = certain.into_provider_version(provider).unwrap();

        let ranked = engine.rank_candidates(&input(), vec![candidate]);
        assert_eq!(ranked[0].rank(), 100.0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = Config::default();
        config.search.max_concurrent_providers = 0;
        assert!(SearchEngine::new(Vec::new(), config).is_err());
    }
}
