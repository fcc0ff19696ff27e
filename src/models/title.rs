//! Title models and the title identity contract.

use crate::core::normalizer::{normalize_name, token_set};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Title fields as handed over by a provider or typed by the user.
///
/// A record with any episode field set describes a series episode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TitleFields {
    /// Display name of the work.
    pub name: String,
    /// Release year.
    #[serde(default)]
    pub year: Option<u16>,
    /// Work-level IMDB id (e.g. "tt0133093").
    #[serde(default)]
    pub imdb_id: Option<String>,
    /// Season number (series only).
    #[serde(default)]
    pub season: Option<u16>,
    /// Episode number (series only).
    #[serde(default)]
    pub episode: Option<u16>,
    /// Episode name (series only).
    #[serde(default)]
    pub episode_name: Option<String>,
    /// Episode-level IMDB id (series only).
    #[serde(default)]
    pub episode_imdb_id: Option<String>,
}

impl TitleFields {
    fn is_series(&self) -> bool {
        self.season.is_some()
            || self.episode.is_some()
            || self.episode_name.is_some()
            || self.episode_imdb_id.is_some()
    }
}

/// Episode part of a series title.
#[derive(Debug, Clone)]
pub struct Episode {
    season_number: Option<u16>,
    episode_number: Option<u16>,
    episode_name: String,
    episode_imdb_id: Option<String>,
    normalized_names: Vec<String>,
    normalized_name_set: HashSet<String>,
}

impl Episode {
    pub fn season_number(&self) -> Option<u16> {
        self.season_number
    }

    pub fn episode_number(&self) -> Option<u16> {
        self.episode_number
    }

    pub fn episode_name(&self) -> &str {
        &self.episode_name
    }

    pub fn episode_imdb_id(&self) -> Option<&str> {
        self.episode_imdb_id.as_deref()
    }

    pub fn normalized_names(&self) -> &[String] {
        &self.normalized_names
    }

    pub fn normalized_name_set(&self) -> &HashSet<String> {
        &self.normalized_name_set
    }
}

/// Movie or series episode.
#[derive(Debug, Clone)]
pub enum TitleKind {
    Movie,
    Series(Episode),
}

/// A logical work: a movie, or one episode of a series.
///
/// Normalized names are derived once at construction; a title is immutable.
/// Titles deliberately do not implement `PartialEq`/`Hash`: identity is
/// approximate and pairwise only, see [`is_same_title`].
#[derive(Debug, Clone)]
pub struct Title {
    name: String,
    year: Option<u16>,
    imdb_id: Option<String>,
    normalized_names: Vec<String>,
    normalized_name_set: HashSet<String>,
    kind: TitleKind,
}

impl Title {
    /// Create a movie title.
    pub fn movie(name: &str, year: Option<u16>, imdb_id: Option<&str>) -> Result<Self> {
        Self::from_fields(TitleFields {
            name: name.to_string(),
            year,
            imdb_id: imdb_id.map(str::to_string),
            ..Default::default()
        })
    }

    /// Create a series episode title.
    ///
    /// Any part of the episode may be unknown; the title stays a series.
    pub fn series(
        name: &str,
        season: Option<u16>,
        episode: Option<u16>,
        episode_name: Option<&str>,
        year: Option<u16>,
        imdb_id: Option<&str>,
        episode_imdb_id: Option<&str>,
    ) -> Result<Self> {
        let title = Self::from_fields(TitleFields {
            name: name.to_string(),
            year,
            imdb_id: imdb_id.map(str::to_string),
            season,
            episode,
            episode_name: episode_name.map(str::to_string),
            episode_imdb_id: episode_imdb_id.map(str::to_string),
        })?;
        Ok(title.into_series())
    }

    /// Create a title from its raw fields, validating them.
    pub fn from_fields(fields: TitleFields) -> Result<Self> {
        let name = fields.name.trim();
        if name.is_empty() {
            return Err(Error::InvalidTitleName(
                "Title name must not be empty".to_string(),
            ));
        }

        let imdb_id = validate_imdb_id(fields.imdb_id.as_deref())?;
        let normalized_names = normalize_name(name);
        if normalized_names.is_empty() {
            return Err(Error::InvalidTitleName(format!(
                "Title name has no words: {}",
                name
            )));
        }
        let normalized_name_set = token_set(&normalized_names);

        let kind = if fields.is_series() {
            let episode_name = fields.episode_name.clone().unwrap_or_default();
            let episode_normalized = normalize_name(&episode_name);
            TitleKind::Series(Episode {
                season_number: fields.season,
                episode_number: fields.episode,
                episode_imdb_id: validate_imdb_id(fields.episode_imdb_id.as_deref())?,
                normalized_name_set: token_set(&episode_normalized),
                normalized_names: episode_normalized,
                episode_name,
            })
        } else {
            TitleKind::Movie
        };

        Ok(Self {
            name: name.to_string(),
            year: fields.year.filter(|&y| y != 0),
            imdb_id,
            normalized_names,
            normalized_name_set,
            kind,
        })
    }

    fn into_series(mut self) -> Self {
        if let TitleKind::Movie = self.kind {
            self.kind = TitleKind::Series(Episode {
                season_number: None,
                episode_number: None,
                episode_name: String::new(),
                episode_imdb_id: None,
                normalized_names: Vec::new(),
                normalized_name_set: HashSet::new(),
            });
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn year(&self) -> Option<u16> {
        self.year
    }

    pub fn imdb_id(&self) -> Option<&str> {
        self.imdb_id.as_deref()
    }

    pub fn normalized_names(&self) -> &[String] {
        &self.normalized_names
    }

    pub fn normalized_name_set(&self) -> &HashSet<String> {
        &self.normalized_name_set
    }

    pub fn kind(&self) -> &TitleKind {
        &self.kind
    }

    /// Episode details, for series titles.
    pub fn episode(&self) -> Option<&Episode> {
        match &self.kind {
            TitleKind::Series(episode) => Some(episode),
            TitleKind::Movie => None,
        }
    }

    pub fn is_series(&self) -> bool {
        matches!(self.kind, TitleKind::Series(_))
    }

    /// Approximate identity check, see [`is_same_title`].
    pub fn matches(&self, other: &Title) -> bool {
        is_same_title(self, other)
    }

    /// Convert back into raw fields (for serialization).
    pub fn to_fields(&self) -> TitleFields {
        let mut fields = TitleFields {
            name: self.name.clone(),
            year: self.year,
            imdb_id: self.imdb_id.clone(),
            ..Default::default()
        };
        if let Some(episode) = self.episode() {
            fields.season = episode.season_number;
            fields.episode = episode.episode_number;
            if !episode.episode_name.is_empty() {
                fields.episode_name = Some(episode.episode_name.clone());
            }
            fields.episode_imdb_id = episode.episode_imdb_id.clone();
        }
        fields
    }
}

impl TryFrom<TitleFields> for Title {
    type Error = Error;

    fn try_from(fields: TitleFields) -> Result<Self> {
        Title::from_fields(fields)
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(year) = self.year {
            write!(f, " ({})", year)?;
        }
        if let Some(episode) = self.episode() {
            if let (Some(season), Some(number)) = (episode.season_number, episode.episode_number) {
                write!(f, " S{:02}E{:02}", season, number)?;
            }
            if !episode.episode_name.is_empty() {
                write!(f, " - {}", episode.episode_name)?;
            }
        }
        Ok(())
    }
}

/// Decide whether two titles describe the same work.
///
/// Equal known IMDB ids win outright. Otherwise the years must be equal (both
/// unknown counts as equal) and the normalized name sets must intersect.
/// Reflexive and symmetric but not transitive; never use it for hashing or
/// clustering.
pub fn is_same_title(a: &Title, b: &Title) -> bool {
    if let (Some(a_id), Some(b_id)) = (a.imdb_id(), b.imdb_id()) {
        if a_id == b_id {
            return true;
        }
    }

    a.year == b.year
        && !a
            .normalized_name_set
            .is_disjoint(&b.normalized_name_set)
}

/// Validate an optional IMDB id; empty strings mean unknown.
fn validate_imdb_id(imdb_id: Option<&str>) -> Result<Option<String>> {
    let id = match imdb_id.map(str::trim) {
        Some(id) if !id.is_empty() => id,
        _ => return Ok(None),
    };

    let valid = regex::Regex::new(r"^tt\d{7,8}$")
        .map(|re| re.is_match(id))
        .unwrap_or(false);
    if !valid {
        return Err(Error::InvalidImdbId(id.to_string()));
    }

    Ok(Some(id.to_string()))
}
