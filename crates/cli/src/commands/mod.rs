//! CLI command implementations.

pub mod auth;
pub mod bootstrap;
pub mod events;

use std::time::Duration;

use thiserror::Error;

use encontro_client::api::ApiError;
use encontro_client::auth::AuthError;
use encontro_client::config::ConfigError;
use encontro_client::AppConfig;

/// HTTP client timeout for all backend calls.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(reqwest::Error),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The startup checks refused to let the app proceed.
    #[error("startup blocked: {0}")]
    Blocked(String),
}

/// Shared command context: configuration plus one HTTP client.
pub struct Context {
    pub config: AppConfig,
    pub http: reqwest::Client,
}

impl Context {
    /// Build the context from the environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Config` when configuration is invalid and
    /// `CliError::HttpClient` when the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, CliError> {
        let config = AppConfig::from_env()?;
        let http = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(CliError::HttpClient)?;

        Ok(Self { config, http })
    }
}
