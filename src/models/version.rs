//! Version models.
//!
//! A [`Version`] is a release fingerprint (identifier tokens plus disc count)
//! of a title: either the user's own file or a provider's offering. A
//! [`ProviderVersion`] adds where the subtitle comes from and how well it
//! ranked against the user's version.

use crate::core::identifiers::extract_identifiers;
use crate::core::normalizer::normalize_name;
use crate::models::language::{locate_language, Language};
use crate::models::title::{Title, TitleFields};
use crate::services::provider::Provider;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Disc count meaning "not specified".
pub const UNKNOWN_NUM_OF_CDS: u32 = 0;

/// Provider-specific metadata attached to a version.
pub type Attributes = HashMap<String, serde_json::Value>;

/// Identifiers, title and disc count of a release.
#[derive(Debug, Clone)]
pub struct Version {
    identifiers: Vec<String>,
    title: Title,
    num_of_cds: u32,
}

impl Version {
    /// Create a version. A negative disc count is rejected; `0` means unknown.
    pub fn new(identifiers: Vec<String>, title: Title, num_of_cds: i32) -> Result<Self> {
        if num_of_cds < 0 {
            return Err(Error::InvalidNumOfCds(num_of_cds));
        }
        Ok(Self {
            identifiers,
            title,
            num_of_cds: num_of_cds as u32,
        })
    }

    /// Create a version from a raw release string of `title`.
    pub fn from_release(title: Title, release: &str, num_of_cds: i32) -> Result<Self> {
        let identifiers = extract_identifiers(&title, release);
        Self::new(identifiers, title, num_of_cds)
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn num_of_cds(&self) -> u32 {
        self.num_of_cds
    }

    /// Whether the disc count was left unspecified.
    pub fn has_unknown_num_of_cds(&self) -> bool {
        self.num_of_cds == UNKNOWN_NUM_OF_CDS
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<Version identifiers=[{}], num_of_cds={}, title={}>",
            self.identifiers.join(", "),
            self.num_of_cds,
            self.title
        )
    }
}

/// A candidate version offered by a subtitle provider.
#[derive(Clone)]
pub struct ProviderVersion {
    version: Version,
    language: &'static Language,
    provider: Arc<dyn Provider>,
    version_string: String,
    attributes: Attributes,
    is_certain_match: bool,
    rank: f64,
    rank_group: u8,
}

impl ProviderVersion {
    /// Create a provider version with rank 0 (rank group 1).
    ///
    /// The provider must report `language` among its languages in use.
    pub fn new(
        version: Version,
        language: &'static Language,
        provider: Arc<dyn Provider>,
        version_string: impl Into<String>,
        attributes: Attributes,
        is_certain_match: bool,
    ) -> Result<Self> {
        if !provider.languages_in_use().contains(&language) {
            return Err(Error::InvalidProviderValue(format!(
                "provider {} does not serve {}",
                provider.name(),
                language
            )));
        }

        Ok(Self {
            version,
            language,
            provider,
            version_string: version_string.into(),
            attributes,
            is_certain_match,
            rank: 0.0,
            rank_group: 1,
        })
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn identifiers(&self) -> &[String] {
        self.version.identifiers()
    }

    pub fn title(&self) -> &Title {
        self.version.title()
    }

    pub fn num_of_cds(&self) -> u32 {
        self.version.num_of_cds()
    }

    pub fn language(&self) -> &'static Language {
        self.language
    }

    pub fn provider(&self) -> &Arc<dyn Provider> {
        &self.provider
    }

    pub fn version_string(&self) -> &str {
        &self.version_string
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn is_certain_match(&self) -> bool {
        self.is_certain_match
    }

    pub fn rank(&self) -> f64 {
        self.rank
    }

    /// Coarse 1-10 bucket derived from the rank.
    pub fn rank_group(&self) -> u8 {
        self.rank_group
    }

    /// Set the rank, recomputing the rank group.
    ///
    /// On error the previous rank and rank group are kept.
    pub fn set_rank(&mut self, rank: f64) -> Result<()> {
        if !(0.0..=100.0).contains(&rank) {
            return Err(Error::InvalidRankValue(rank));
        }
        self.rank = rank;
        self.rank_group = rank_group_for(rank);
        Ok(())
    }

    /// Builder-style variant of [`ProviderVersion::set_rank`].
    pub fn with_rank(mut self, rank: f64) -> Result<Self> {
        self.set_rank(rank)?;
        Ok(self)
    }
}

/// Map a validated rank in `[0, 100]` to its group in `[1, 10]`.
pub fn rank_group_for(rank: f64) -> u8 {
    if rank <= 0.0 {
        return 1;
    }
    // rank / 10 rather than rank / 100 * 10: the latter lands on 7.000000000000001 for 70.
    (rank / 10.0).ceil().clamp(1.0, 10.0) as u8
}

impl std::fmt::Debug for ProviderVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderVersion")
            .field("version", &self.version)
            .field("language", &self.language)
            .field("provider", &self.provider.name())
            .field("version_string", &self.version_string)
            .field("attributes", &self.attributes)
            .field("is_certain_match", &self.is_certain_match)
            .field("rank", &self.rank)
            .field("rank_group", &self.rank_group)
            .finish()
    }
}

impl std::fmt::Display for ProviderVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<ProviderVersion identifiers=[{}], title={}, language={}, provider={}, \
             version_string='{}', attributes={}, num_of_cds={}, rank={}, rank_group={}, \
             is_certain_match={}>",
            self.identifiers().join(", "),
            self.title(),
            self.language,
            self.provider.name(),
            self.version_string,
            serde_json::to_string(&self.attributes).unwrap_or_default(),
            self.num_of_cds(),
            self.rank,
            self.rank_group,
            self.is_certain_match
        )
    }
}

/// One subtitle file as reported by a provider, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateRecord {
    /// The provider's title for this file.
    #[serde(default)]
    pub title: Option<TitleFields>,
    /// Release identifier tokens; extracted from `version_string` when empty.
    /// Compound tags are split like release strings (`WEB-DL` -> `web`, `dl`).
    #[serde(default)]
    pub identifiers: Vec<String>,
    /// Display label, usually the release name or group tag.
    #[serde(default)]
    pub version_string: String,
    /// Language ISO code or full name.
    #[serde(default)]
    pub language: String,
    /// Disc count (0 = unknown).
    #[serde(default)]
    pub num_of_cds: i32,
    /// Provider-specific metadata.
    #[serde(default)]
    pub attributes: Attributes,
    /// Provider asserted this is exactly the requested release.
    #[serde(default)]
    pub is_certain_match: bool,
}

impl CandidateRecord {
    /// Validate the record and turn it into a provider version of `provider`.
    pub fn into_provider_version(self, provider: Arc<dyn Provider>) -> Result<ProviderVersion> {
        let fields = self.title.ok_or_else(|| {
            Error::InvalidTitleValue("Title instance must be provided.".to_string())
        })?;
        let title = Title::from_fields(fields)?;

        let language = locate_language(&self.language)
            .ok_or_else(|| Error::InvalidLanguageValue(self.language.clone()))?;

        let identifiers: Vec<String> = if self.identifiers.is_empty() {
            extract_identifiers(&title, &self.version_string)
        } else {
            self.identifiers
                .iter()
                .flat_map(|token| normalize_name(token))
                .collect()
        };

        let version = Version::new(identifiers, title, self.num_of_cds)?;
        ProviderVersion::new(
            version,
            language,
            provider,
            self.version_string,
            self.attributes,
            self.is_certain_match,
        )
    }
}
