//! Grouping of ranked provider versions for presentation.

use crate::models::language::Language;
use crate::models::version::ProviderVersion;

/// Provider versions sharing a rank group, in provider-return order.
#[derive(Debug, Clone)]
pub struct RankGroup {
    pub rank_group: u8,
    pub versions: Vec<ProviderVersion>,
}

/// All rank groups of one language, best group first.
#[derive(Debug, Clone)]
pub struct LanguageGroup {
    pub language: &'static Language,
    pub groups: Vec<RankGroup>,
}

impl LanguageGroup {
    /// First version of the best rank group.
    pub fn best(&self) -> Option<&ProviderVersion> {
        self.groups.first().and_then(|g| g.versions.first())
    }

    /// Versions of a given rank group.
    pub fn group(&self, rank_group: u8) -> Option<&[ProviderVersion]> {
        self.groups
            .iter()
            .find(|g| g.rank_group == rank_group)
            .map(|g| g.versions.as_slice())
    }

    /// All versions, best group first.
    pub fn versions(&self) -> impl Iterator<Item = &ProviderVersion> {
        self.groups.iter().flat_map(|g| g.versions.iter())
    }
}

/// Ranked provider versions grouped by language, then rank group.
///
/// Languages appear in first-seen order unless reordered with
/// [`RankedGroups::order_by_preference`].
#[derive(Debug, Clone, Default)]
pub struct RankedGroups {
    languages: Vec<LanguageGroup>,
}

impl RankedGroups {
    pub fn languages(&self) -> &[LanguageGroup] {
        &self.languages
    }

    pub fn get(&self, language: &Language) -> Option<&LanguageGroup> {
        self.languages.iter().find(|g| g.language == language)
    }

    /// Best version for a language.
    pub fn best(&self, language: &Language) -> Option<&ProviderVersion> {
        self.get(language).and_then(LanguageGroup::best)
    }

    /// Number of language groups.
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Total number of versions across all groups.
    pub fn version_count(&self) -> usize {
        self.languages
            .iter()
            .flat_map(|l| l.groups.iter())
            .map(|g| g.versions.len())
            .sum()
    }

    /// Move preferred languages to the front, in preference order.
    ///
    /// Languages not listed keep their relative order after the preferred ones.
    pub fn order_by_preference(&mut self, preferred: &[&Language]) {
        self.languages.sort_by_key(|group| {
            preferred
                .iter()
                .position(|lang| *lang == group.language)
                .unwrap_or(preferred.len())
        });
    }
}

/// Group ranked versions by language, then by rank group descending.
///
/// Within a rank group the input order is kept.
pub fn build_ranked_groups<I>(candidates: I) -> RankedGroups
where
    I: IntoIterator<Item = ProviderVersion>,
{
    let mut languages: Vec<LanguageGroup> = Vec::new();

    for version in candidates {
        let language = version.language();
        let index = match languages.iter().position(|g| g.language == language) {
            Some(index) => index,
            None => {
                languages.push(LanguageGroup {
                    language,
                    groups: Vec::new(),
                });
                languages.len() - 1
            }
        };

        let groups = &mut languages[index].groups;
        match groups.iter_mut().find(|g| g.rank_group == version.rank_group()) {
            Some(group) => group.versions.push(version),
            None => groups.push(RankGroup {
                rank_group: version.rank_group(),
                versions: vec![version],
            }),
        }
    }

    for language in &mut languages {
        language
            .groups
            .sort_by(|a, b| b.rank_group.cmp(&a.rank_group));
    }

    RankedGroups { languages }
}
