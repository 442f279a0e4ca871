//! Bootstrap sequencer — drives an appliance through its first-boot
//! state machine.
//!
//! The sequence is strictly ordered: no step issues its network call until
//! the previous step's result is known, because each step's correctness
//! depends on the server-side effect of the prior one (token validity,
//! password validity, boot state). All I/O goes through the port traits.

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::application::ports::{ControllerApi, EndpointProbe, ProgressReporter, Sleeper};
use crate::application::services::readiness::wait_ready;
use crate::domain::action::AdminAction;
use crate::domain::config::BootstrapConfig;
use crate::domain::endpoint::ApplianceEndpoint;
use crate::domain::error::{ApiError, ConfigError};
use crate::domain::phase::BootstrapPhase;
use crate::domain::readiness::{Gate, WaitPlan};
use crate::domain::session::{ADMIN_USERNAME, Session};

/// Run the bootstrap sequence against one appliance and return the terminal
/// phase reached.
///
/// In first-boot mode the appliance is walked through email registration,
/// password rotation, the software upgrade, and license registration, with
/// readiness gates before the first login and after the upgrade. Outside
/// first-boot mode only license registration runs, against the supplied
/// credential.
///
/// Every remote failure is fatal. The one tolerance is the endpoint
/// dropping off the network while the upgrade restarts it, which is
/// absorbed by re-polling rather than by re-sending the upgrade action.
///
/// # Errors
///
/// Returns the underlying [`ApiError`], [`ReadinessError`], or
/// [`ConfigError`] wrapped with step context.
///
/// [`ReadinessError`]: crate::domain::error::ReadinessError
pub async fn bootstrap_appliance(
    api: &impl ControllerApi,
    probe: &impl EndpointProbe,
    sleeper: &impl Sleeper,
    reporter: &impl ProgressReporter,
    endpoint: &ApplianceEndpoint,
    config: &BootstrapConfig,
) -> Result<BootstrapPhase> {
    if config.first_boot {
        first_boot_sequence(api, probe, sleeper, reporter, endpoint, config).await
    } else {
        register_license_only(api, probe, sleeper, reporter, endpoint, config).await
    }
}

/// The full first-boot chain, `NotStarted` through `LicenseRegistered`.
async fn first_boot_sequence(
    api: &impl ControllerApi,
    probe: &impl EndpointProbe,
    sleeper: &impl Sleeper,
    reporter: &impl ProgressReporter,
    endpoint: &ApplianceEndpoint,
    config: &BootstrapConfig,
) -> Result<BootstrapPhase> {
    let host = endpoint.public_addr.as_str();
    wait_ready(probe, sleeper, reporter, host, Gate::Connected, WaitPlan::CONNECT).await?;
    wait_ready(probe, sleeper, reporter, host, Gate::HttpOk, WaitPlan::READY).await?;

    // First boot leaves the appliance with exactly one valid credential:
    // its own private address.
    reporter.step("logging in with the first-boot credential...");
    let mut session = api
        .login(&endpoint.api_url(), ADMIN_USERNAME, &endpoint.private_addr)
        .await
        .context("first-boot login")?;

    let mut phase = BootstrapPhase::NotStarted;
    while let Some(next) = phase.next() {
        reporter.step(&format!("{}...", next.description()));
        session = enter_phase(api, probe, sleeper, reporter, endpoint, config, session, next).await?;
        phase = next;
        info!(?phase, "bootstrap phase reached");
    }

    reporter.success("appliance bootstrap complete");
    Ok(phase)
}

/// Execute the transition into `target`, returning the session that is
/// valid after it.
#[allow(clippy::too_many_arguments)] // same port set as the public entry point
async fn enter_phase(
    api: &impl ControllerApi,
    probe: &impl EndpointProbe,
    sleeper: &impl Sleeper,
    reporter: &impl ProgressReporter,
    endpoint: &ApplianceEndpoint,
    config: &BootstrapConfig,
    session: Session,
    target: BootstrapPhase,
) -> Result<Session> {
    match target {
        // next() never yields NotStarted.
        BootstrapPhase::NotStarted => Ok(session),

        BootstrapPhase::EmailSet => {
            api.send(&session, &AdminAction::add_admin_email(&config.admin_email))
                .await
                .context("registering admin email")?;
            Ok(session)
        }

        BootstrapPhase::PasswordChanged => {
            api.send(
                &session,
                &AdminAction::change_admin_password(&session.password, &config.new_password),
            )
            .await
            .context("changing the admin password")?;
            // The old token died with the old password. Prove the new
            // credential immediately: if this login fails the change is
            // unverified, and re-sending it would fail against the
            // now-current password anyway.
            api.login(&endpoint.api_url(), ADMIN_USERNAME, &config.new_password)
                .await
                .context("re-login with the new password")
        }

        // The upgrade restarts the web stack mid-request, so getting no
        // answer proves nothing either way. A definite rejection does.
        BootstrapPhase::UpgradeRequested => {
            let action = AdminAction::run_initial_setup(config.target_version.as_deref());
            match api.send(&session, &action).await {
                Ok(_) => {}
                Err(ApiError::Transport { message }) => {
                    warn!(%message, "no response to the upgrade request; the appliance is likely restarting");
                    reporter.warn("appliance went quiet during the upgrade; waiting for it to return");
                }
                Err(rejected) => {
                    return Err(anyhow::Error::new(rejected).context("requesting the software upgrade"));
                }
            }
            Ok(session)
        }

        BootstrapPhase::UpgradeComplete => {
            wait_ready(
                probe,
                sleeper,
                reporter,
                &endpoint.public_addr,
                Gate::HttpOk,
                WaitPlan::POST_UPGRADE,
            )
            .await?;
            // The restart invalidated the token.
            api.login(&endpoint.api_url(), ADMIN_USERNAME, &config.new_password)
                .await
                .context("login after the upgrade")
        }

        BootstrapPhase::LicenseRegistered => {
            api.send(&session, &AdminAction::register_license(&config.license_id))
                .await
                .context("registering the license")?;
            Ok(session)
        }
    }
}

/// License registration alone, for an appliance already past first boot.
async fn register_license_only(
    api: &impl ControllerApi,
    probe: &impl EndpointProbe,
    sleeper: &impl Sleeper,
    reporter: &impl ProgressReporter,
    endpoint: &ApplianceEndpoint,
    config: &BootstrapConfig,
) -> Result<BootstrapPhase> {
    let Some(password) = config.password.as_deref() else {
        return Err(ConfigError::MissingPassword.into());
    };

    wait_ready(
        probe,
        sleeper,
        reporter,
        &endpoint.public_addr,
        Gate::HttpOk,
        WaitPlan::READY,
    )
    .await?;

    reporter.step("logging in...");
    let session = api
        .login(&endpoint.api_url(), ADMIN_USERNAME, password)
        .await
        .context("login")?;

    reporter.step(&format!("{}...", BootstrapPhase::LicenseRegistered.description()));
    api.send(&session, &AdminAction::register_license(&config.license_id))
        .await
        .context("registering the license")?;

    reporter.success("license registered");
    Ok(BootstrapPhase::LicenseRegistered)
}
