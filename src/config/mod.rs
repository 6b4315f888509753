//! Configuration: the API key and endpoint, loaded once per process.

use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{Result, SonarError};

/// Environment variable holding the bearer credential.
pub const API_KEY_ENV: &str = "PERPLEXITY_API_KEY";
/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "PERPLEXITY_BASE_URL";
/// Extra dotenv-format file read next to `.env`.
pub const ENV_FILE: &str = "env_file";

/// Global default config (lazy-initialized from env).
static DEFAULT_CONFIG: OnceLock<SonarConfig> = OnceLock::new();

/// Credential and endpoint settings.
///
/// Resolution order in [`SonarConfig::from_env`]:
/// 1. process environment
/// 2. `.env` in the working directory
/// 3. `env_file` in the working directory
#[derive(Clone, Default)]
pub struct SonarConfig {
    api_key: Option<String>,
    base_url: Option<String>,
}

impl fmt::Debug for SonarConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SonarConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| ".."))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl SonarConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from environment variables, after merging any dotenv files.
    pub fn from_env() -> Self {
        // dotenvy never overrides variables that are already set, so the
        // process environment wins, then `.env`, then `env_file`.
        let _ = dotenvy::dotenv();
        let _ = dotenvy::from_filename(ENV_FILE);

        Self {
            api_key: std::env::var(API_KEY_ENV).ok(),
            base_url: std::env::var(BASE_URL_ENV).ok(),
        }
    }

    /// Load from a dotenv-format file without touching the process environment.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let entries = dotenvy::from_path_iter(path).map_err(|e| {
            SonarError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;

        let mut config = Self::new();
        for entry in entries {
            let (key, value) = entry.map_err(|e| {
                SonarError::Configuration(format!("cannot parse {}: {e}", path.display()))
            })?;
            match key.as_str() {
                API_KEY_ENV => config.api_key = Some(value),
                BASE_URL_ENV => config.base_url = Some(value),
                _ => {}
            }
        }
        Ok(config)
    }

    /// Get (or create) the global default config.
    pub fn global() -> &'static SonarConfig {
        DEFAULT_CONFIG.get_or_init(Self::from_env)
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// The API key, or a configuration error when it is missing or blank.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                SonarError::Configuration(format!("{API_KEY_ENV} not found in environment variables"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn from_file_reads_known_keys() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# credentials").unwrap();
        writeln!(file, "PERPLEXITY_API_KEY=pplx-test").unwrap();
        writeln!(file, "PERPLEXITY_BASE_URL=http://localhost:9999").unwrap();
        writeln!(file, "UNRELATED=1").unwrap();

        let config = SonarConfig::from_file(file.path()).unwrap();
        assert_eq!(config.api_key(), Some("pplx-test"));
        assert_eq!(config.base_url(), Some("http://localhost:9999"));
    }

    #[test]
    fn from_file_missing_is_configuration_error() {
        let err = SonarConfig::from_file("/definitely/not/here/env_file").unwrap_err();
        assert!(matches!(err, SonarError::Configuration(_)));
    }

    #[test]
    fn require_api_key_rejects_missing_and_blank() {
        assert!(SonarConfig::new().require_api_key().is_err());
        assert!(SonarConfig::new().with_api_key("  ").require_api_key().is_err());
        assert_eq!(
            SonarConfig::new().with_api_key("k").require_api_key().unwrap(),
            "k"
        );
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = SonarConfig::new().with_api_key("secret-key");
        let printed = format!("{config:?}");
        assert!(!printed.contains("secret-key"));
    }
}
