//! Site configuration management.
//!
//! Handles loading, parsing, and validating the `plume.toml` configuration
//! file.

mod error;

pub use error::ConfigError;

use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

/// Default values for serde deserialization
mod defaults {
    pub fn r#true() -> bool {
        true
    }

    pub mod base {
        pub fn language() -> String {
            "en-US".into()
        }
    }

    pub mod build {
        use std::path::PathBuf;

        pub fn content() -> PathBuf {
            "content".into()
        }
        pub fn output() -> PathBuf {
            "public".into()
        }

        pub mod feed {
            use std::path::PathBuf;

            pub fn path() -> PathBuf {
                "feed.xml".into()
            }
        }
    }
}

/// Root configuration, parsed from `plume.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    #[serde(default)]
    pub base: BaseConfig,

    #[serde(default)]
    pub build: BuildConfig,
}

/// `[base]` section - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "My Blog"
/// description = "A personal blog about Rust"
/// url = "https://myblog.com"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title, used as the feed channel title.
    #[serde(default)]
    pub title: String,

    /// Site description, used as the feed channel description.
    #[serde(default)]
    pub description: String,

    /// Base URL for absolute links in the feed.
    /// Required when `[build.feed].enable = true`.
    #[serde(default)]
    pub url: Option<String>,

    /// BCP 47 language code (e.g., "en-US", "id-ID").
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,
}

/// `[build]` section - content layout and generated outputs.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Directory holding the content collections.
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Directory generated files are written to.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    #[serde(default)]
    pub feed: FeedConfig,
}

/// `[build.feed]` section - rss feed generation.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct FeedConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Feed file path, relative to the output directory.
    #[serde(default = "defaults::build::feed::path")]
    #[educe(Default = defaults::build::feed::path())]
    pub path: PathBuf,
}

impl SiteConfig {
    /// Load and parse configuration from a file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.build.feed.enable && self.base.url.is_none() {
            return Err(ConfigError::Validation(
                "`base.url` is required when `[build.feed].enable = true`".into(),
            ));
        }
        Ok(())
    }
}
