//! Error types for the subtitle matching core.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for subit.
#[derive(Error, Debug)]
pub enum Error {
    // Title errors
    #[error("Invalid title name: {0}")]
    InvalidTitleName(String),

    #[error("{0}")]
    InvalidTitleValue(String),

    #[error("Invalid IMDB id format: {0}")]
    InvalidImdbId(String),

    // Version errors
    #[error("num_of_cds cannot be lower than 0 (got {0})")]
    InvalidNumOfCds(i32),

    #[error("rank value must be between 0 to 100 (got {0})")]
    InvalidRankValue(f64),

    #[error("language instance must be supplied: {0}")]
    InvalidLanguageValue(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    // Provider errors
    #[error("Invalid provider: {0}")]
    InvalidProviderValue(String),

    #[error("Provider {provider} failed: {message}")]
    Provider { provider: String, message: String },

    // Config errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // TOML errors
    #[error("TOML error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

impl Error {
    /// Create a provider failure error.
    pub fn provider<P: Into<String>, M: Into<String>>(provider: P, message: M) -> Self {
        Error::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }
}
