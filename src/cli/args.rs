//! Command line argument definitions.

use crate::models::title::TitleFields;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// SubiT - Find the subtitle that fits your release
#[derive(Parser, Debug)]
#[command(name = "subit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, global = true, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract release identifiers from a release name
    Extract {
        #[command(flatten)]
        title: TitleArgs,

        /// Release name (e.g. The.Matrix.1999.720p.BluRay.x264-CHD)
        #[arg(value_name = "RELEASE")]
        release: String,
    },

    /// Rank candidate subtitles against your release
    Rank {
        #[command(flatten)]
        title: TitleArgs,

        /// Your release name
        #[arg(value_name = "RELEASE")]
        release: String,

        /// JSON file with candidate records
        #[arg(short, long, value_name = "FILE")]
        candidates: PathBuf,

        /// Weight (0-100) of your identifiers missing from a candidate
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
        ratio: Option<u8>,

        /// Number of discs of your release (0 = unknown)
        #[arg(long, default_value_t = 0)]
        cds: i32,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List supported languages
    Languages,
}

/// Output format of the rank command.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored table
    Table,
    /// JSON document
    Json,
}

/// Title of the media item.
#[derive(Args, Debug, Clone)]
pub struct TitleArgs {
    /// Title name
    #[arg(short = 't', long)]
    pub title: String,

    /// Release year
    #[arg(short = 'y', long)]
    pub year: Option<u16>,

    /// IMDB id (e.g. tt0133093)
    #[arg(long)]
    pub imdb_id: Option<String>,

    /// Season number (series)
    #[arg(short = 's', long)]
    pub season: Option<u16>,

    /// Episode number (series)
    #[arg(short = 'e', long)]
    pub episode: Option<u16>,

    /// Episode name (series)
    #[arg(long)]
    pub episode_name: Option<String>,
}

impl TitleArgs {
    /// Convert into title fields.
    pub fn to_fields(&self) -> TitleFields {
        TitleFields {
            name: self.title.clone(),
            year: self.year,
            imdb_id: self.imdb_id.clone(),
            season: self.season,
            episode: self.episode,
            episode_name: self.episode_name.clone(),
            episode_imdb_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rank_command() {
        let cli = Cli::try_parse_from([
            "subit",
            "rank",
            "--title",
            "The Matrix",
            "--year",
            "1999",
            "The.Matrix.1999.720p",
            "--candidates",
            "candidates.json",
            "--ratio",
            "60",
        ])
        .unwrap();

        match cli.command {
            Commands::Rank {
                title,
                release,
                ratio,
                cds,
                format,
                ..
            } => {
                assert_eq!(title.title, "The Matrix");
                assert_eq!(title.year, Some(1999));
                assert_eq!(release, "The.Matrix.1999.720p");
                assert_eq!(ratio, Some(60));
                assert_eq!(cds, 0);
                assert_eq!(format, OutputFormat::Table);
            }
            _ => panic!("Expected Rank command"),
        }
    }

    #[test]
    fn test_ratio_out_of_range() {
        let result = Cli::try_parse_from([
            "subit",
            "rank",
            "-t",
            "The Matrix",
            "release",
            "-c",
            "candidates.json",
            "-r",
            "150",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_values() {
        let cli = Cli::try_parse_from([
            "subit", "rank", "-t", "Lost", "release", "-c", "c.json", "--format", "json",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Rank {
                format: OutputFormat::Json,
                ..
            }
        ));

        let result = Cli::try_parse_from([
            "subit", "rank", "-t", "Lost", "release", "-c", "c.json", "--format", "xml",
        ]);
        assert!(result.is_err());
    }
}
