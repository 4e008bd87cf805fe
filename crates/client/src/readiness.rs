//! One-shot app-readiness gate.
//!
//! Presentation-level consumer of the bootstrap verdict: the front end
//! renders one of the [`GateState`] variants and only mounts the
//! authenticated app tree once the gate settles on [`GateState::Ready`].
//! There is no retry action; only a fresh process launch re-enters
//! `Checking`.

use std::time::Duration;

use tracing::{error, instrument, warn};

use crate::bootstrap::{BootstrapSequencer, BootstrapVerdict, UpdateChecker};

/// Delay before the checks start, leaving the splash view time to mount.
const STARTUP_DELAY: Duration = Duration::from_secs(1);

/// Renderable readiness state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateState {
    /// Checks have not settled yet; the splash view stays up.
    Checking,
    /// Terminal: the build is too old to use. Blocks the app.
    Outdated {
        /// Version of the running build.
        current: String,
        /// Oldest version the backend still accepts.
        minimum: String,
    },
    /// Terminal: something in the sequence itself failed unexpectedly.
    /// Blocks the app, distinct from `Outdated`.
    Error,
    /// Terminal: the app tree may mount.
    Ready,
}

/// One-shot readiness gate over a bootstrap sequencer.
pub struct AppReadinessGate<U> {
    sequencer: BootstrapSequencer<U>,
    delay: Duration,
}

impl<U> AppReadinessGate<U>
where
    U: UpdateChecker + Send + 'static,
{
    /// Create a gate with the standard startup delay.
    #[must_use]
    pub const fn new(sequencer: BootstrapSequencer<U>) -> Self {
        Self::with_delay(sequencer, STARTUP_DELAY)
    }

    /// Create a gate with an explicit startup delay.
    #[must_use]
    pub const fn with_delay(sequencer: BootstrapSequencer<U>, delay: Duration) -> Self {
        Self { sequencer, delay }
    }

    /// Run the checks and settle into a terminal state.
    ///
    /// Consumes the gate. A failed update check is deliberately non-fatal
    /// and maps to [`GateState::Ready`]: update checks routinely fail on
    /// unsigned dev builds and the app must not block on them. A panic
    /// anywhere in the sequence maps to [`GateState::Error`].
    #[instrument(skip(self))]
    pub async fn resolve(self) -> GateState {
        tokio::time::sleep(self.delay).await;

        let sequencer = self.sequencer;
        let verdict = match tokio::spawn(sequencer.run()).await {
            Ok(verdict) => verdict,
            Err(e) => {
                error!(error = %e, "bootstrap sequence failed unexpectedly");
                return GateState::Error;
            }
        };

        match verdict {
            BootstrapVerdict::Ready => GateState::Ready,
            BootstrapVerdict::Outdated { current, minimum } => {
                GateState::Outdated { current, minimum }
            }
            BootstrapVerdict::UpdateError => {
                warn!("update check failed, proceeding without update");
                GateState::Ready
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::{NoopUpdateChecker, UpdateError, UpdateOutcome};

    /// Checker with a canned behavior, owned so the gate can spawn it.
    struct CannedChecker(CannedBehavior);

    enum CannedBehavior {
        Fail,
        Panic,
    }

    impl UpdateChecker for CannedChecker {
        async fn check_and_apply(&self) -> Result<UpdateOutcome, UpdateError> {
            match self.0 {
                CannedBehavior::Fail => Err(UpdateError::Manifest("canned".to_string())),
                CannedBehavior::Panic => panic!("canned panic"),
            }
        }
    }

    fn gate<U: UpdateChecker + Send + 'static>(
        current: &str,
        minimum: &str,
        checker: U,
    ) -> AppReadinessGate<U> {
        AppReadinessGate::with_delay(
            BootstrapSequencer::with_minimum(current, minimum, checker),
            Duration::ZERO,
        )
    }

    #[tokio::test]
    async fn test_ready_when_version_ok_and_no_update() {
        let state = gate("1.0.0", "1.0.0", NoopUpdateChecker).resolve().await;
        assert_eq!(state, GateState::Ready);
    }

    #[tokio::test]
    async fn test_outdated_blocks_with_versions() {
        let state = gate("0.9.9", "1.0.0", NoopUpdateChecker).resolve().await;
        assert_eq!(
            state,
            GateState::Outdated {
                current: "0.9.9".to_string(),
                minimum: "1.0.0".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_update_failure_is_non_blocking() {
        let state = gate("1.0.0", "1.0.0", CannedChecker(CannedBehavior::Fail))
            .resolve()
            .await;
        assert_eq!(state, GateState::Ready);
    }

    #[tokio::test]
    async fn test_panic_in_sequence_maps_to_error() {
        let state = gate("1.0.0", "1.0.0", CannedChecker(CannedBehavior::Panic))
            .resolve()
            .await;
        assert_eq!(state, GateState::Error);
    }
}
