//! Rank command implementation.
//!
//! Ranks the candidates of a JSON candidates file against the user's release.

use crate::cli::args::OutputFormat;
use crate::core::search::{SearchEngine, SearchOutcome};
use crate::models::config::Config;
use crate::models::language::all_languages;
use crate::models::title::{Title, TitleFields};
use crate::models::version::Version;
use crate::services::json_provider::JsonFileProvider;
use crate::services::provider::Provider;
use crate::Result;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Options of the rank command.
#[derive(Debug, Clone)]
pub struct RankOptions {
    /// The user's release name.
    pub release: String,
    /// Candidates file.
    pub candidates: PathBuf,
    /// Input ratio override.
    pub ratio: Option<u8>,
    /// Disc count of the user's release.
    pub cds: i32,
    /// Output format.
    pub format: OutputFormat,
}

/// Rank candidates and print them.
pub async fn rank(fields: TitleFields, options: RankOptions, mut config: Config) -> Result<()> {
    if let Some(ratio) = options.ratio {
        config.ranking.input_ratio = ratio;
    }

    let title = Title::from_fields(fields)?;
    let input = Version::from_release(title, &options.release, options.cds)?;
    tracing::debug!("Input version: {}", input);

    let provider: Arc<dyn Provider> = Arc::new(JsonFileProvider::new(
        &options.candidates,
        all_languages().collect(),
    ));
    let engine = SearchEngine::new(vec![provider], config)?;
    let mut outcome = engine.search(&input).await?;

    // Only one provider: its failure is the command's failure.
    if !outcome.failures.is_empty() {
        let failure = outcome.failures.remove(0);
        return Err(failure.error);
    }

    match options.format {
        OutputFormat::Json => print_json(&outcome)?,
        OutputFormat::Table => print_table(&outcome, &input),
    }

    Ok(())
}

/// Print ranked groups as a table.
fn print_table(outcome: &SearchOutcome, input: &Version) {
    println!("{} {}", "Title:".bold(), outcome.title);
    println!(
        "{} {}",
        "Identifiers:".bold(),
        input.identifiers().join(" ").cyan()
    );
    println!();

    if outcome.groups.is_empty() {
        println!("No matching subtitles found.");
    }

    for language in outcome.groups.languages() {
        println!("{}", language.language.to_string().bold().green());
        for group in &language.groups {
            for version in &group.versions {
                let marker = if version.is_certain_match() { "*" } else { " " };
                println!(
                    "  {}[{:>2}] {:>6.2}  {}",
                    marker,
                    group.rank_group,
                    version.rank(),
                    version.version_string()
                );
            }
        }
        println!();
    }

    if outcome.rejected > 0 || outcome.invalid > 0 {
        println!(
            "{}",
            format!(
                "Skipped {} other titles and {} invalid candidates",
                outcome.rejected, outcome.invalid
            )
            .dimmed()
        );
    }
}

/// Print ranked groups as JSON.
fn print_json(outcome: &SearchOutcome) -> Result<()> {
    #[derive(Serialize)]
    struct JsonOutput {
        title: TitleFields,
        languages: Vec<LanguageJson>,
        rejected: usize,
        invalid: usize,
    }

    #[derive(Serialize)]
    struct LanguageJson {
        language: &'static str,
        groups: Vec<GroupJson>,
    }

    #[derive(Serialize)]
    struct GroupJson {
        rank_group: u8,
        versions: Vec<VersionJson>,
    }

    #[derive(Serialize)]
    struct VersionJson {
        version_string: String,
        identifiers: Vec<String>,
        rank: f64,
        provider: String,
        is_certain_match: bool,
    }

    let output = JsonOutput {
        title: outcome.title.to_fields(),
        languages: outcome
            .groups
            .languages()
            .iter()
            .map(|l| LanguageJson {
                language: l.language.iso_name,
                groups: l
                    .groups
                    .iter()
                    .map(|g| GroupJson {
                        rank_group: g.rank_group,
                        versions: g
                            .versions
                            .iter()
                            .map(|v| VersionJson {
                                version_string: v.version_string().to_string(),
                                identifiers: v.identifiers().to_vec(),
                                rank: v.rank(),
                                provider: v.provider().name().to_string(),
                                is_certain_match: v.is_certain_match(),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect(),
        rejected: outcome.rejected,
        invalid: outcome.invalid,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
