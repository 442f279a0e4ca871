//! The shared pipeline behind `deploy` and `bootstrap`: resolve the
//! appliance endpoint, run the bootstrap sequence, hand off to
//! provisioning. This is the only place the pipeline order lives.

use anyhow::{Context, Result};
use tracing::info;

use crate::application::ports::StackDeployer;
use crate::application::services::bootstrap::bootstrap_appliance;
use crate::application::services::handoff::run_handoff;
use crate::domain::config::{BootstrapConfig, DeploymentSource, HandoffConfig};
use crate::domain::endpoint::ApplianceEndpoint;
use crate::domain::error::ConfigError;
use crate::infra::api::HttpControllerApi;
use crate::infra::clock::TokioSleeper;
use crate::infra::git::GitCli;
use crate::infra::probe::HttpsProbe;
use crate::infra::stack::AwsCli;
use crate::infra::terraform::TerraformCli;
use crate::output::reporter::TerminalReporter;
use crate::output::{OutputContext, progress};

/// One run of the pipeline, assembled by the calling command.
pub struct UpPlan {
    /// How the appliance addresses are obtained.
    pub source: DeploymentSource,
    /// Bootstrap sequence parameters.
    pub bootstrap: BootstrapConfig,
    /// Provisioning handoff parameters; `None` when disabled.
    pub handoff: Option<HandoffConfig>,
}

impl UpPlan {
    /// Check the assembled plan before any prompt or network call.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bootstrap.validate()?;
        if self.handoff.is_some() && !self.source.provides_account_id() {
            return Err(ConfigError::MissingAccountId);
        }
        Ok(())
    }
}

/// Execute the pipeline: endpoint, then bootstrap, then handoff.
///
/// The plan is validated up front so a run that cannot finish fails before
/// any network call or billable resource.
///
/// # Errors
///
/// Returns the first fatal error; no step runs after a failure.
pub async fn run(ctx: &OutputContext, plan: UpPlan) -> Result<()> {
    plan.validate()?;

    let reporter = TerminalReporter::new(ctx);
    let (endpoint, account_id) = resolve_endpoint(ctx, plan.source).await?;

    let api = HttpControllerApi::new()?;
    let probe = HttpsProbe::new()?;
    let phase = bootstrap_appliance(&api, &probe, &TokioSleeper, &reporter, &endpoint, &plan.bootstrap).await?;
    info!(?phase, host = %endpoint.public_addr, "bootstrap finished");

    match plan.handoff {
        Some(handoff) => {
            let account_id = account_id.ok_or(ConfigError::MissingAccountId)?;
            let workdir = tempfile::tempdir().context("creating the checkout directory")?;
            run_handoff(
                &GitCli,
                &TerraformCli,
                &reporter,
                &handoff,
                workdir.path(),
                &endpoint.public_addr,
                &account_id,
            )
            .await?;
        }
        None => ctx.info("provisioning handoff disabled; stopping after bootstrap"),
    }

    ctx.success(&format!("{} is ready", endpoint.public_addr));
    Ok(())
}

/// Turn the deployment source into a concrete endpoint and, when known,
/// the account id.
async fn resolve_endpoint(
    ctx: &OutputContext,
    source: DeploymentSource,
) -> Result<(ApplianceEndpoint, Option<String>)> {
    match source {
        DeploymentSource::Direct {
            public_addr,
            private_addr,
            account_id,
        } => Ok((ApplianceEndpoint::new(public_addr, private_addr), account_id)),

        DeploymentSource::Stack(spec) => {
            let pb = ctx.show_progress().then(|| {
                progress::spinner(&format!(
                    "creating stack '{}' (takes several minutes)...",
                    spec.stack_name
                ))
            });
            let outputs = AwsCli.deploy(&spec).await;
            if let Some(pb) = &pb {
                match &outputs {
                    Ok(_) => progress::finish_ok(pb, &format!("stack '{}' created", spec.stack_name)),
                    Err(_) => pb.finish_and_clear(),
                }
            }
            let outputs = outputs?;

            ctx.header("Stack outputs");
            ctx.kv("appliance", &outputs.appliance_eip);
            ctx.kv("private ip", &outputs.appliance_private_ip);
            ctx.kv("account", &outputs.account_id);
            ctx.kv("app role", &outputs.role_app_arn);
            ctx.kv("ec2 role", &outputs.role_ec2_arn);

            let endpoint = ApplianceEndpoint::new(outputs.appliance_eip, outputs.appliance_private_ip);
            Ok((endpoint, Some(outputs.account_id)))
        }
    }
}
