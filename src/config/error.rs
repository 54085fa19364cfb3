//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between `plume.toml` on disk and a
/// validated [`SiteConfig`](super::SiteConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse config file")]
    Toml(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Validation(String),
}
