//! # Site Configuration
//!
//! Loads `docs.yaml`, which tells the loader where the content collection
//! lives and how ungrouped entries are placed in navigation. Every key is
//! optional; unknown keys are rejected so typos surface at build time.
//!
//! ```yaml
//! collection: docs
//! content_dir: src/content/docs
//! extensions: [md, mdx]
//! ungrouped: last
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default configuration file name, looked up in the site root.
pub const DEFAULT_CONFIG_FILE: &str = "docs.yaml";

/// Error loading the site configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read config '{path}': {source}")]
    Read {
        /// Path that was read.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for [`SiteConfig`].
    #[error("invalid config '{path}': {reason}")]
    Parse {
        /// Path that was parsed.
        path: String,
        /// Parser message.
        reason: String,
    },

    /// A field holds a value the loader cannot use.
    #[error("invalid config value for '{field}': {reason}")]
    Invalid {
        /// Offending key.
        field: &'static str,
        /// Why the value is unusable.
        reason: String,
    },
}

/// Where the ungrouped section goes relative to the named groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UngroupedPlacement {
    /// Before `Overview`.
    First,
    /// After `Case`.
    #[default]
    Last,
}

/// Settings for one content collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Collection name exposed to templates.
    pub collection: String,
    /// Directory holding the content files. Relative paths are resolved
    /// against the directory of the config file.
    pub content_dir: PathBuf,
    /// File extensions treated as content, without the leading dot.
    pub extensions: Vec<String>,
    /// Placement of the ungrouped navigation section.
    pub ungrouped: UngroupedPlacement,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            collection: "docs".to_string(),
            content_dir: PathBuf::from("src/content/docs"),
            extensions: vec!["md".to_string(), "mdx".to_string()],
            ungrouped: UngroupedPlacement::Last,
        }
    }
}

impl SiteConfig {
    /// Parse a configuration from YAML text. An empty document yields the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed YAML or unknown keys, and
    /// [`ConfigError::Invalid`] for unusable values.
    pub fn from_yaml_str(source: &str, origin: &str) -> Result<Self, ConfigError> {
        let mut config: SiteConfig = if source.trim().is_empty() {
            SiteConfig::default()
        } else {
            serde_yaml::from_str(source).map_err(|e| ConfigError::Parse {
                path: origin.to_string(),
                reason: e.to_string(),
            })?
        };

        config.extensions = config
            .extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
            .collect();
        config.check()?;
        Ok(config)
    }

    /// Load an explicitly named configuration file.
    ///
    /// `content_dir` is resolved against the file's parent directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file is missing or unreadable.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        let mut config = Self::from_yaml_str(&source, &path.display().to_string())?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.content_dir = base.join(&config.content_dir);
        tracing::debug!(path = %path.display(), "loaded site config");
        Ok(config)
    }

    /// Load `docs.yaml` from `root` if it exists, otherwise use defaults
    /// resolved against `root`.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`SiteConfig::load`] when the file exists.
    pub fn discover(root: &Path) -> Result<Self, ConfigError> {
        let candidate = root.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            return Self::load(&candidate);
        }
        tracing::debug!(root = %root.display(), "no config file found; using defaults");
        let mut config = Self::default();
        config.content_dir = root.join(&config.content_dir);
        Ok(config)
    }

    /// Returns true if `path` has one of the configured content extensions.
    pub fn is_content_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .is_some_and(|e| self.extensions.iter().any(|x| *x == e))
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.collection.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "collection",
                reason: "must not be empty".to_string(),
            });
        }
        if self.extensions.is_empty() || self.extensions.iter().any(|e| e.is_empty()) {
            return Err(ConfigError::Invalid {
                field: "extensions",
                reason: "must list at least one non-empty extension".to_string(),
            });
        }
        Ok(())
    }
}
