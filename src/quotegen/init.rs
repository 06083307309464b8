use crate::api::QuoteApi;
use crate::config::QuoteConfig;
use crate::error::{QuoteError, Result};
use crate::store::bundled::BundledSource;
use crate::store::fs::FileSource;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Overrides the configuration directory when set.
pub const HOME_ENV: &str = "QUOTEGEN_HOME";

pub fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "quotegen", "quotegen")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| QuoteError::Config("Could not determine config dir".to_string()))
}

/// Builds the API, picking the corpus from (in order) the explicit
/// `corpus_override`, the configured `corpus_path`, or the bundled quotes.
pub fn initialize(corpus_override: Option<&Path>) -> Result<QuoteApi> {
    let config_dir = config_dir()?;
    let config = QuoteConfig::load(&config_dir)?;

    let corpus_path = corpus_override
        .map(Path::to_path_buf)
        .or_else(|| config.corpus_path.clone());

    match corpus_path {
        Some(path) => QuoteApi::load(&FileSource::new(path), config),
        None => QuoteApi::load(&BundledSource, config),
    }
}
