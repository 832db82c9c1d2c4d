//! Configuration management

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

use crate::core::entries::DEFAULT_MAX_ENTRIES_BYTES;
use crate::core::errors::{DeeplError, Result};

/// Base URL of the free-tier API
pub const DEFAULT_BASE_URL: &str = "https://api-free.deepl.com/v2";

/// Configuration for the DeepL client
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API root without a trailing slash
    pub base_url: String,
    /// Key sent as `DeepL-Auth-Key`
    pub api_key: String,
    /// Whole-request timeout; transport default when unset
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    /// Upper bound on glossary entry input
    #[serde(default = "default_max_entries_bytes")]
    pub max_entries_bytes: u64,
}

fn default_max_entries_bytes() -> u64 {
    DEFAULT_MAX_ENTRIES_BYTES
}

// Keep the key out of logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout_ms", &self.timeout_ms)
            .field("max_entries_bytes", &self.max_entries_bytes)
            .finish()
    }
}

impl ClientConfig {
    /// Create a configuration with default options
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_ms: None,
            max_entries_bytes: DEFAULT_MAX_ENTRIES_BYTES,
        }
    }

    /// Set the request timeout
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Set the glossary entries size limit
    pub fn with_max_entries_bytes(mut self, max_entries_bytes: u64) -> Self {
        self.max_entries_bytes = max_entries_bytes;
        self
    }

    /// Load configuration from environment variables
    ///
    /// `DEEPL_API_KEY` is required. `DEEPL_BASE_URL`, `DEEPL_TIMEOUT_MS`
    /// and `DEEPL_MAX_ENTRIES_BYTES` are optional.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("DEEPL_API_KEY")
            .map_err(|_| DeeplError::config("DEEPL_API_KEY environment variable is required"))?;

        Self::from_env_with_api_key(api_key)
    }

    /// Load the optional `DEEPL_*` settings around an explicitly supplied key
    pub fn from_env_with_api_key(api_key: impl Into<String>) -> Result<Self> {
        let base_url =
            std::env::var("DEEPL_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let mut config = Self::new(base_url, api_key);

        if let Some(timeout_ms) = parse_env::<u64>("DEEPL_TIMEOUT_MS")? {
            config.timeout_ms = Some(timeout_ms);
        }

        if let Some(limit) = parse_env::<u64>("DEEPL_MAX_ENTRIES_BYTES")? {
            config.max_entries_bytes = limit;
        }

        info!("Loaded client configuration for {}", config.base_url);
        Ok(config)
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            DeeplError::config(format!("Invalid config file {}: {}", path.display(), e))
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(DeeplError::config("base URL is required"));
        }

        if self.base_url.ends_with('/') {
            return Err(DeeplError::config("base URL must not end with a slash"));
        }

        if self.max_entries_bytes == 0 {
            return Err(DeeplError::config(
                "max_entries_bytes must be greater than 0",
            ));
        }

        Ok(())
    }
}

/// Read an optional env var, failing on values that do not parse
fn parse_env<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| DeeplError::config(format!("{} is invalid: {}", name, e))),
        Err(_) => Ok(None),
    }
}
