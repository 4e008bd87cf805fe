//! Application configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ENCONTRO_API_URL` - Backend base URL (default: `http://localhost:3333`)
//! - `ENCONTRO_UPDATE_MANIFEST_URL` - Update manifest URL; update checks are
//!   skipped when unset (the usual case for dev builds)
//! - `ENCONTRO_SESSION_PATH` - Path of the persisted session file
//!   (default: `encontro-session.json`)
//! - `ENCONTRO_APP_VERSION` - Override of the running version, normally taken
//!   from build metadata

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Default backend base URL, matching the local dev server.
const DEFAULT_API_URL: &str = "http://localhost:3333";

/// Default path for the persisted session file.
const DEFAULT_SESSION_PATH: &str = "encontro-session.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend base URL for auth, events, and accounts.
    pub api_url: Url,
    /// Update manifest URL; `None` disables update checks.
    pub update_manifest_url: Option<Url>,
    /// Path of the persisted session file.
    pub session_path: PathBuf,
    /// Version of the running build.
    pub app_version: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a URL variable is present but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = parse_url_env("ENCONTRO_API_URL", DEFAULT_API_URL)?;
        let update_manifest_url = match std::env::var("ENCONTRO_UPDATE_MANIFEST_URL") {
            Ok(raw) => Some(parse_url("ENCONTRO_UPDATE_MANIFEST_URL", &raw)?),
            Err(_) => None,
        };
        let session_path = get_env_or_default("ENCONTRO_SESSION_PATH", DEFAULT_SESSION_PATH).into();
        let app_version =
            get_env_or_default("ENCONTRO_APP_VERSION", env!("CARGO_PKG_VERSION"));

        Ok(Self {
            api_url,
            update_manifest_url,
            session_path,
            app_version,
        })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a URL environment variable, falling back to a default when unset.
fn parse_url_env(key: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = get_env_or_default(key, default);
    parse_url(key, &raw)
}

fn parse_url(key: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_url_parses() {
        let url = parse_url("ENCONTRO_API_URL", DEFAULT_API_URL).expect("default must parse");
        assert_eq!(url.as_str(), "http://localhost:3333/");
    }

    #[test]
    fn test_invalid_url_is_reported_with_key() {
        let err = parse_url("ENCONTRO_API_URL", "not a url").expect_err("must fail");
        assert!(err.to_string().contains("ENCONTRO_API_URL"));
    }
}
