//! Configuration for ingestion.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Default brand token masked out of scraped cells.
pub const DEFAULT_BRAND_TOKEN: &str = "yellowpages";

/// Neutral URL substituted for branded links.
pub const DEFAULT_PLACEHOLDER_URL: &str = "https://www.example.com";

/// Rules applied by the value scrubber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrubRules {
    /// Case-insensitive brand token to redact. Empty disables redaction.
    pub brand_token: String,
    /// Replacement for link-like values that mention the brand.
    pub placeholder_url: String,
}

impl Default for ScrubRules {
    fn default() -> Self {
        Self {
            brand_token: DEFAULT_BRAND_TOKEN.to_string(),
            placeholder_url: DEFAULT_PLACEHOLDER_URL.to_string(),
        }
    }
}

impl ScrubRules {
    #[must_use]
    pub fn with_brand_token(mut self, token: impl Into<String>) -> Self {
        self.brand_token = token.into();
        self
    }

    #[must_use]
    pub fn with_placeholder_url(mut self, url: impl Into<String>) -> Self {
        self.placeholder_url = url.into();
        self
    }
}

/// Top-level ingestion options, loaded from a JSON config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestOptions {
    pub scrub: ScrubRules,
}

impl IngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_scrub_rules(mut self, rules: ScrubRules) -> Self {
        self.scrub = rules;
        self
    }

    /// Loads options from a JSON file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ModelError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_object_yields_defaults() {
        let options: IngestOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, IngestOptions::default());
        assert_eq!(options.scrub.brand_token, DEFAULT_BRAND_TOKEN);
    }

    #[test]
    fn test_load_partial_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"scrub":{{"brand_token":"acmeleads"}}}}"#).unwrap();
        let options = IngestOptions::load(file.path()).unwrap();
        assert_eq!(options.scrub.brand_token, "acmeleads");
        assert_eq!(options.scrub.placeholder_url, DEFAULT_PLACEHOLDER_URL);
    }

    #[test]
    fn test_load_reports_bad_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = IngestOptions::load(file.path()).unwrap_err();
        assert!(matches!(err, ModelError::Json { .. }));
    }
}
