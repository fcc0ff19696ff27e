//! Release identifier extraction.
//!
//! Strips everything that names the title (name, year, episode name and
//! numbering) out of a release string. What is left are the tokens that tell
//! competing releases of the same title apart: resolution, source, codecs and
//! the release group.

use crate::core::normalizer::normalize_name;
use crate::models::title::Title;

/// Extract the release identifiers of `query` relative to `title`.
///
/// Order is preserved and duplicates are kept.
pub fn extract_identifiers(title: &Title, query: &str) -> Vec<String> {
    let year = title.year().map(|y| y.to_string());
    let episode = title.episode();

    normalize_name(query)
        .into_iter()
        .filter(|token| {
            if title.normalized_name_set().contains(token) {
                return false;
            }
            if year.as_deref() == Some(token.as_str()) {
                return false;
            }
            if let Some(episode) = episode {
                if episode.normalized_name_set().contains(token) {
                    return false;
                }
                if is_episode_marker(
                    token,
                    episode.season_number(),
                    episode.episode_number(),
                ) {
                    return false;
                }
            }
            true
        })
        .collect()
}

/// Check whether `token` is a numbering marker of the given episode.
///
/// Recognizes `s05e13`, `5x13`, and the split forms `s05` / `e13`.
fn is_episode_marker(token: &str, season: Option<u16>, episode: Option<u16>) -> bool {
    let patterns = [
        r"^s(\d{1,2})e(\d{1,3})$",
        r"^(\d{1,2})x(\d{1,3})$",
    ];

    for pattern in patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(token) {
                let s = caps.get(1).and_then(|m| m.as_str().parse::<u16>().ok());
                let e = caps.get(2).and_then(|m| m.as_str().parse::<u16>().ok());
                return season.is_some() && s == season && episode.is_some() && e == episode;
            }
        }
    }

    if let Ok(re) = regex::Regex::new(r"^([se])(\d{1,3})$") {
        if let Some(caps) = re.captures(token) {
            let number = caps.get(2).and_then(|m| m.as_str().parse::<u16>().ok());
            let expected = match caps.get(1).map(|m| m.as_str()) {
                Some("s") => season,
                _ => episode,
            };
            return expected.is_some() && number == expected;
        }
    }

    false
}
