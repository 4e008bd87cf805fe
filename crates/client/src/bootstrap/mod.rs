//! Startup checks: version gate, then update check.
//!
//! The sequencer runs exactly once per process lifetime and always settles
//! into a terminal verdict - nothing here escapes as an unhandled fault.
//! No internal timeout is imposed on the update call; the readiness gate
//! treats update failures as non-blocking anyway.

pub mod update;
pub mod version;

pub use update::{HttpUpdateChecker, NoopUpdateChecker, UpdateChecker, UpdateError, UpdateOutcome};
pub use version::{MIN_SUPPORTED_VERSION, is_supported};

use tracing::{info, instrument, warn};

/// Terminal outcome of the startup checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapVerdict {
    /// Version confirmed and update check completed (or applied).
    Ready,
    /// Running build is older than the minimum supported version. The
    /// update check never ran.
    Outdated {
        /// Version of the running build.
        current: String,
        /// Oldest version the backend still accepts.
        minimum: String,
    },
    /// Version confirmed valid, but the update check failed.
    UpdateError,
}

/// Runs the startup checks in order: version gate first, update check only
/// when the version is confirmed.
pub struct BootstrapSequencer<U> {
    current_version: String,
    minimum_version: String,
    update_checker: U,
}

impl<U: UpdateChecker> BootstrapSequencer<U> {
    /// Create a sequencer for the given build version against
    /// [`MIN_SUPPORTED_VERSION`].
    #[must_use]
    pub fn new(current_version: impl Into<String>, update_checker: U) -> Self {
        Self::with_minimum(current_version, MIN_SUPPORTED_VERSION, update_checker)
    }

    /// Create a sequencer with an explicit minimum version.
    #[must_use]
    pub fn with_minimum(
        current_version: impl Into<String>,
        minimum_version: impl Into<String>,
        update_checker: U,
    ) -> Self {
        Self {
            current_version: current_version.into(),
            minimum_version: minimum_version.into(),
            update_checker,
        }
    }

    /// Run the checks and settle into a verdict.
    ///
    /// Consumes the sequencer: a verdict is produced once per process, and a
    /// fresh launch re-runs the checks from scratch.
    #[instrument(skip(self), fields(current = %self.current_version, minimum = %self.minimum_version))]
    pub async fn run(self) -> BootstrapVerdict {
        if !is_supported(&self.current_version, &self.minimum_version) {
            warn!("running build is below the minimum supported version");
            return BootstrapVerdict::Outdated {
                current: self.current_version,
                minimum: self.minimum_version,
            };
        }

        match self.update_checker.check_and_apply().await {
            Ok(UpdateOutcome { applied }) => {
                info!(applied, "update check complete");
                BootstrapVerdict::Ready
            }
            Err(e) => {
                // Version was already confirmed valid; the verdict only
                // reports the failed update check.
                warn!(error = %e, "update check failed");
                BootstrapVerdict::UpdateError
            }
        }
    }
}
