//! Locale configuration (`lingua.toml`)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::collate::CollationStrength;
use crate::format::FormatPolicy;
use crate::LocaleError;

/// Top-level configuration.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct LocaleConfig {
    /// Language code seeding the default locale. Empty means the
    /// process-wide locale detected from the environment.
    #[serde(default)]
    pub default_locale: String,
    /// Display language used when a catalog lacks a name
    #[serde(default = "default_fallback_display")]
    pub fallback_display: String,
    #[serde(default)]
    pub format_policy: FormatPolicy,
    /// Extra YAML name catalogs, `<display-language>.yaml`
    #[serde(default)]
    pub catalogs: Vec<PathBuf>,
    #[serde(default)]
    pub collation: CollationConfig,
}

fn default_fallback_display() -> String {
    "en".to_string()
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default_locale: String::new(),
            fallback_display: default_fallback_display(),
            format_policy: FormatPolicy::default(),
            catalogs: Vec::new(),
            collation: CollationConfig::default(),
        }
    }
}

/// Collation settings
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CollationConfig {
    #[serde(default)]
    pub strength: CollationStrength,
}

impl LocaleConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, LocaleError> {
        Ok(toml::from_str(src)?)
    }

    /// Load a config file. Relative catalog paths are resolved against the
    /// file's directory.
    pub fn load(path: &Path) -> Result<Self, LocaleError> {
        let content = std::fs::read_to_string(path).map_err(|source| LocaleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&content)?;

        if let Some(dir) = path.parent() {
            for catalog in &mut config.catalogs {
                if catalog.is_relative() {
                    *catalog = dir.join(&*catalog);
                }
            }
        }
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String, LocaleError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
