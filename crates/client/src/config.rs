//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CRAFTICA_API_BASE_URL` - Backend base URL (default: production backend)
//! - `CRAFTICA_HTTP_TIMEOUT_SECS` - Request timeout in seconds (default: 30)
//! - `CRAFTICA_SESSION_FILE` - Path of the durable session snapshot
//!   (default: `craftica_session.json` in the working directory)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default backend base URL (the deployed Craftica backend).
const DEFAULT_BASE_URL: &str =
    "http://craftica-backend.hvf6fqedd3e3ezee.canadacentral.azurecontainer.io:3000";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default session snapshot file name.
const DEFAULT_SESSION_FILE: &str = "craftica_session.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Craftica client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash.
    pub base_url: String,
    /// Timeout applied to every request.
    pub timeout: Duration,
    /// Path of the durable session snapshot file.
    pub session_file: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = get_env_or_default("CRAFTICA_API_BASE_URL", DEFAULT_BASE_URL);
        let base_url = validate_base_url("CRAFTICA_API_BASE_URL", &base_url)?;

        let timeout_secs = get_env_or_default(
            "CRAFTICA_HTTP_TIMEOUT_SECS",
            &DEFAULT_TIMEOUT_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("CRAFTICA_HTTP_TIMEOUT_SECS".to_string(), e.to_string())
        })?;

        let session_file =
            PathBuf::from(get_env_or_default("CRAFTICA_SESSION_FILE", DEFAULT_SESSION_FILE));

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            session_file,
        })
    }

    /// Build a configuration for a specific base URL, keeping defaults for
    /// the rest. Used by tests against a local mock server.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the URL does not parse.
    pub fn for_base_url(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: validate_base_url("base_url", base_url)?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
        })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse and normalize a base URL, stripping any trailing slash.
fn validate_base_url(name: &str, value: &str) -> Result<String, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(name.to_string(), e.to_string()))?;
    if !url.has_host() {
        return Err(ConfigError::InvalidEnvVar(
            name.to_string(),
            "base URL must have a host".to_string(),
        ));
    }
    Ok(value.trim_end_matches('/').to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_base_url_strips_trailing_slash() {
        let url = validate_base_url("TEST", "http://localhost:3000/").unwrap();
        assert_eq!(url, "http://localhost:3000");
    }

    #[test]
    fn test_validate_base_url_rejects_garbage() {
        assert!(validate_base_url("TEST", "not a url").is_err());
    }

    #[test]
    fn test_for_base_url() {
        let config = ClientConfig::for_base_url("http://127.0.0.1:9000").unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
