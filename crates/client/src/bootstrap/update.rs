//! Over-the-air update checking.
//!
//! The checker asks a remote manifest whether a newer bundle exists and, if
//! so, stages it for the next launch. Every network or manifest fault maps
//! to [`UpdateError`] - the app must stay usable without updates.

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use super::version::is_supported;

/// Errors that can occur while checking for or applying an update.
#[derive(Debug, Error)]
pub enum UpdateError {
    /// Manifest or bundle request failed.
    #[error("update request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Manifest body was not valid JSON of the expected shape.
    #[error("malformed update manifest: {0}")]
    Manifest(String),

    /// Staging the downloaded bundle failed.
    #[error("failed to stage update bundle: {0}")]
    Stage(#[from] std::io::Error),
}

/// Result of a completed update check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Whether a newer bundle was downloaded and staged. When true the
    /// caller restarts the process to pick it up.
    pub applied: bool,
}

/// Update service consumed by the bootstrap sequencer.
pub trait UpdateChecker: Send + Sync {
    /// Check for a newer bundle and stage it when one exists.
    fn check_and_apply(&self)
    -> impl Future<Output = Result<UpdateOutcome, UpdateError>> + Send;
}

/// Remote update manifest shape.
#[derive(Debug, Deserialize)]
struct UpdateManifest {
    /// Version of the latest published bundle.
    version: String,
    /// Where to download that bundle.
    bundle_url: String,
}

/// Update checker backed by an HTTP manifest.
pub struct HttpUpdateChecker {
    client: reqwest::Client,
    manifest_url: url::Url,
    current_version: String,
    staging_path: PathBuf,
}

impl HttpUpdateChecker {
    /// Create a checker for `manifest_url`, staging downloaded bundles at
    /// `staging_path`.
    #[must_use]
    pub fn new(
        client: reqwest::Client,
        manifest_url: url::Url,
        current_version: impl Into<String>,
        staging_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            client,
            manifest_url,
            current_version: current_version.into(),
            staging_path: staging_path.into(),
        }
    }

    async fn fetch_manifest(&self) -> Result<UpdateManifest, UpdateError> {
        let response = self
            .client
            .get(self.manifest_url.clone())
            .send()
            .await?
            .error_for_status()?;

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| UpdateError::Manifest(e.to_string()))
    }

    async fn stage_bundle(&self, bundle_url: &str) -> Result<(), UpdateError> {
        let bundle = self
            .client
            .get(bundle_url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        if let Some(parent) = self.staging_path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.staging_path, &bundle).await?;
        Ok(())
    }
}

impl UpdateChecker for HttpUpdateChecker {
    #[instrument(skip(self), fields(current = %self.current_version))]
    async fn check_and_apply(&self) -> Result<UpdateOutcome, UpdateError> {
        let manifest = self.fetch_manifest().await?;

        // No update when we are already at or past the published version.
        if is_supported(&self.current_version, &manifest.version) {
            debug!(published = %manifest.version, "no update available");
            return Ok(UpdateOutcome { applied: false });
        }

        debug!(published = %manifest.version, "staging update bundle");
        self.stage_bundle(&manifest.bundle_url).await?;

        Ok(UpdateOutcome { applied: true })
    }
}

/// Update checker that always reports "no update".
///
/// Used when no manifest URL is configured, the equivalent of running a dev
/// build with updates disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopUpdateChecker;

impl UpdateChecker for NoopUpdateChecker {
    async fn check_and_apply(&self) -> Result<UpdateOutcome, UpdateError> {
        Ok(UpdateOutcome { applied: false })
    }
}
