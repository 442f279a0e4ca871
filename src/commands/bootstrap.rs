//! `stratus bootstrap` — run the pipeline against an already-deployed
//! appliance.

use anyhow::Result;
use clap::Args;

use crate::commands::{BootstrapOpts, HandoffOpts, up};
use crate::domain::config::DeploymentSource;
use crate::output::OutputContext;

/// Arguments for the bootstrap command.
#[derive(Args)]
pub struct BootstrapArgs {
    /// Appliance public address (bare host or IP, no scheme)
    #[arg(long, env = "STRATUS_PUBLIC_IP")]
    pub public_ip: String,

    /// Appliance private address; doubles as the first-boot credential
    #[arg(long, env = "STRATUS_PRIVATE_IP")]
    pub private_ip: String,

    /// Cloud account id handed to provisioning
    #[arg(long, env = "STRATUS_ACCOUNT_ID")]
    pub account_id: Option<String>,

    #[command(flatten)]
    pub bootstrap: BootstrapOpts,

    #[command(flatten)]
    pub handoff: HandoffOpts,
}

/// Run `stratus bootstrap`.
///
/// # Errors
///
/// Returns an error if validation, the bootstrap sequence, or the handoff
/// fails.
pub async fn run(ctx: &OutputContext, args: BootstrapArgs) -> Result<()> {
    let plan = up::UpPlan {
        source: DeploymentSource::Direct {
            public_addr: args.public_ip,
            private_addr: args.private_ip,
            account_id: args.account_id,
        },
        bootstrap: args.bootstrap.into_config(),
        handoff: args.handoff.into_config()?,
    };
    up::run(ctx, plan).await
}
