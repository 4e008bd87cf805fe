//! `bootstrap` command: run the startup checks and report readiness.

use encontro_client::bootstrap::{
    HttpUpdateChecker, NoopUpdateChecker, UpdateChecker, UpdateError, UpdateOutcome,
};
use encontro_client::{AppReadinessGate, BootstrapSequencer, GateState};

use super::{CliError, Context};

/// File name of the staged update bundle, placed beside the session file.
const UPDATE_BUNDLE_FILE: &str = "encontro-update.bundle";

/// Update checker wired from configuration: HTTP when a manifest URL is
/// configured, otherwise a no-op (the dev-build case).
enum ConfiguredChecker {
    Http(HttpUpdateChecker),
    Noop(NoopUpdateChecker),
}

impl UpdateChecker for ConfiguredChecker {
    async fn check_and_apply(&self) -> Result<UpdateOutcome, UpdateError> {
        match self {
            Self::Http(checker) => checker.check_and_apply().await,
            Self::Noop(checker) => checker.check_and_apply().await,
        }
    }
}

/// Run the readiness gate and print the terminal state.
///
/// # Errors
///
/// Returns `CliError::Blocked` when the gate settles on a blocking state.
pub async fn check(ctx: &Context) -> Result<(), CliError> {
    let checker = match &ctx.config.update_manifest_url {
        Some(manifest_url) => ConfiguredChecker::Http(HttpUpdateChecker::new(
            ctx.http.clone(),
            manifest_url.clone(),
            ctx.config.app_version.clone(),
            ctx.config.session_path.with_file_name(UPDATE_BUNDLE_FILE),
        )),
        None => ConfiguredChecker::Noop(NoopUpdateChecker),
    };

    let sequencer = BootstrapSequencer::new(ctx.config.app_version.clone(), checker);
    let gate = AppReadinessGate::new(sequencer);

    println!("Validating app version...");
    match gate.resolve().await {
        GateState::Ready => {
            println!("Ready: version {} is supported.", ctx.config.app_version);
            Ok(())
        }
        GateState::Outdated { current, minimum } => Err(CliError::Blocked(format!(
            "installed version {current} is below the minimum supported version {minimum}"
        ))),
        GateState::Error => Err(CliError::Blocked(
            "an error occurred while validating the version or checking for updates".to_string(),
        )),
        GateState::Checking => unreachable!("resolve() only returns terminal states"),
    }
}
