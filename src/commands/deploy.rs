//! `stratus deploy` — create the controller stack, then run the shared
//! pipeline against its outputs.

use anyhow::{Context, Result};
use clap::Args;

use crate::commands::{BootstrapOpts, HandoffOpts, up};
use crate::domain::config::DeploymentSource;
use crate::domain::stack::StackSpec;
use crate::output::OutputContext;

/// Arguments for the deploy command.
#[derive(Args)]
pub struct DeployArgs {
    /// Name of the controller stack
    #[arg(long, env = "STRATUS_STACK_NAME", default_value = "stratus-controller")]
    pub stack_name: String,

    /// Template URL for the controller stack
    #[arg(long, env = "STRATUS_TEMPLATE_URL")]
    pub template_url: String,

    /// VPC to deploy into
    #[arg(long, env = "STRATUS_VPC_ID")]
    pub vpc_id: String,

    /// Subnet for the appliance interface
    #[arg(long, env = "STRATUS_SUBNET_ID")]
    pub subnet_id: String,

    /// EC2 key pair installed on the appliance
    #[arg(long, env = "STRATUS_KEY_PAIR")]
    pub key_pair: String,

    /// Region to deploy into
    #[arg(long, env = "AWS_REGION")]
    pub region: String,

    /// Credential profile to deploy with
    #[arg(long, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    #[command(flatten)]
    pub bootstrap: BootstrapOpts,

    #[command(flatten)]
    pub handoff: HandoffOpts,
}

/// Run `stratus deploy`.
///
/// # Errors
///
/// Returns an error if confirmation, stack deployment, the bootstrap
/// sequence, or the handoff fails.
pub async fn run(ctx: &OutputContext, non_interactive: bool, args: DeployArgs) -> Result<()> {
    let spec = StackSpec {
        stack_name: args.stack_name,
        template_url: args.template_url,
        vpc_id: args.vpc_id,
        subnet_id: args.subnet_id,
        key_pair: args.key_pair,
        region: args.region,
        profile: args.profile,
    };

    let prompt = format!(
        "Create stack '{}' in {}? This creates billable cloud resources",
        spec.stack_name, spec.region
    );
    let plan = up::UpPlan {
        source: DeploymentSource::Stack(spec),
        bootstrap: args.bootstrap.into_config(),
        handoff: args.handoff.into_config()?,
    };
    // Validate before prompting: nobody should confirm a run that cannot
    // finish.
    plan.validate()?;

    if !confirm(non_interactive, &prompt)? {
        ctx.info("deployment cancelled");
        return Ok(());
    }

    up::run(ctx, plan).await
}

/// Ask before creating billable resources.
///
/// When `non_interactive` is `true` (CI, `--yes` flag, or `STRATUS_YES`
/// env), proceeds without prompting.
fn confirm(non_interactive: bool, prompt: &str) -> Result<bool> {
    if non_interactive {
        return Ok(true);
    }
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(true)
        .interact()
        .context("deployment confirmation")
}
