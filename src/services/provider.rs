//! Subtitle provider interface.
//!
//! Providers do the network and scraping work; the core only sees the
//! candidate records they hand back.

use crate::models::language::Language;
use crate::models::title::Title;
use crate::models::version::{CandidateRecord, ProviderVersion, Version};
use crate::Result;
use futures::future::BoxFuture;

/// Capability set every subtitle provider implements.
pub trait Provider: Send + Sync {
    /// Short provider name, used in logs and output.
    fn name(&self) -> &str;

    /// Languages this provider instance searches in.
    fn languages_in_use(&self) -> &[&'static Language];

    /// Fetch candidate subtitle records for `title`.
    ///
    /// `version` is the user's own version; providers may use it to narrow
    /// the search but must not rank.
    fn get_title_versions<'a>(
        &'a self,
        title: &'a Title,
        version: &'a Version,
    ) -> BoxFuture<'a, Result<Vec<CandidateRecord>>>;

    /// Download the subtitle file behind a provider version.
    fn download_subtitle_buffer<'a>(
        &'a self,
        version: &'a ProviderVersion,
    ) -> BoxFuture<'a, Result<Vec<u8>>>;
}

/// Build the free-text search query for a title.
///
/// Movies search by name. Series search by `name SxE` numbering when it is
/// known, otherwise by name and episode name.
pub fn query_string(title: &Title) -> String {
    let mut query = title.name().to_string();
    if let Some(episode) = title.episode() {
        query.push(' ');
        match (episode.season_number(), episode.episode_number()) {
            (Some(season), Some(number)) => query.push_str(&format!("{}x{}", season, number)),
            _ => query.push_str(episode.episode_name()),
        }
    }
    query.trim_end().to_string()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::title::TitleFields;

    #[test]
    fn test_query_string_movie() {
        let title = Title::movie("The Matrix", Some(1999), None).unwrap();
        assert_eq!(query_string(&title), "The Matrix");
    }

    #[test]
    fn test_query_string_series_numbering() {
        let title = Title::from_fields(TitleFields {
            name: "The Big Bang Theory".to_string(),
            season: Some(7),
            episode: Some(12),
            episode_name: Some("The Hesitation Ramification".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(query_string(&title), "The Big Bang Theory 7x12");
    }

    #[test]
    fn test_query_string_series_episode_name() {
        let title = Title::from_fields(TitleFields {
            name: "The Big Bang Theory".to_string(),
            episode_name: Some("The Hesitation Ramification".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            query_string(&title),
            "The Big Bang Theory The Hesitation Ramification"
        );
    }
}
