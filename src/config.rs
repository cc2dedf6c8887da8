//! Configuration for the cortical client.

use crate::error::{CorticalError, Result};
use crate::fingerprint::FillMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable consulted when no API key is configured.
pub const API_KEY_ENV: &str = "REST_API_KEY";

/// Default REST endpoint.
pub const DEFAULT_BASE_URL: &str = "http://api.cortical.io/rest";

/// Default retina name.
pub const DEFAULT_RETINA: &str = "en_synonymous";

/// Default cache directory.
pub const DEFAULT_CACHE_DIR: &str = "/tmp/cortical";

/// Client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API key sent in the `api-key` header.
    /// Default: None (read from `REST_API_KEY`).
    pub api_key: Option<String>,

    /// Base URL of the REST service.
    /// Default: "http://api.cortical.io/rest".
    pub base_url: String,

    /// Active retina name.
    /// Default: "en_synonymous".
    pub retina: String,

    /// Cache directory; entries live under `<cache_dir>/<retina>`.
    /// Default: "/tmp/cortical".
    pub cache_dir: PathBuf,

    /// How to fill fingerprints for terms the service cannot resolve.
    /// Default: Random.
    pub fill_mode: FillMode,

    /// Part-of-speech filter for similar-terms queries.
    /// Default: None (disabled).
    pub pos_type: Option<String>,

    /// Context id for similar-terms queries.
    /// Default: None (disabled).
    pub context_id: Option<u32>,

    /// POS tags forwarded to the tokenizer endpoint.
    /// Default: None.
    pub tokenize_pos_tags: Option<String>,

    /// Transport timeout in seconds.
    /// Default: 30.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            retina: DEFAULT_RETINA.to_string(),
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            fill_mode: FillMode::Random,
            pos_type: None,
            context_id: None,
            tokenize_pos_tags: None,
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Returns the per-retina cache root.
    pub fn cache_root(&self) -> PathBuf {
        self.cache_dir.join(&self.retina)
    }

    /// Returns the configured API key, falling back to `REST_API_KEY`.
    pub fn resolve_api_key(&self) -> Result<String> {
        if let Some(key) = self.api_key.as_ref().filter(|k| !k.is_empty()) {
            return Ok(key.clone());
        }
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                CorticalError::Configuration(format!(
                    "no API key supplied and {} is not set",
                    API_KEY_ENV
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.retina, "en_synonymous");
        assert_eq!(config.fill_mode, FillMode::Random);
        assert!(config.pos_type.is_none());
        assert!(config.context_id.is_none());
        assert_eq!(config.cache_root(), PathBuf::from("/tmp/cortical/en_synonymous"));
    }

    #[test]
    fn test_explicit_api_key_wins() {
        let config = ClientConfig {
            api_key: Some("secret".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key().unwrap(), "secret");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"retina": "en_associative", "fill_mode": "empty"}"#).unwrap();
        assert_eq!(config.retina, "en_associative");
        assert_eq!(config.fill_mode, FillMode::Empty);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
