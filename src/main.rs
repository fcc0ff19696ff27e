//! SubiT CLI
//!
//! A command-line tool for matching subtitle candidates to a release.

use clap::Parser;
use subit::cli::{
    args::{Cli, Commands},
    commands::{extract, languages, rank},
};
use subit::models::config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config(),
    };

    // Run the appropriate command
    match cli.command {
        Commands::Extract { title, release } => {
            extract::extract(title.to_fields(), &release)?;
        }

        Commands::Rank {
            title,
            release,
            candidates,
            ratio,
            cds,
            format,
        } => {
            let options = rank::RankOptions {
                release,
                candidates,
                ratio,
                cds,
                format,
            };
            rank::rank(title.to_fields(), options, config).await?;
        }

        Commands::Languages => {
            languages::list_languages();
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("subit=debug")
    } else {
        EnvFilter::new("subit=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
