//! Argument surface and dispatch for the stratus binary.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use crate::output::OutputContext;

/// Deploy and bootstrap network controller appliances
#[derive(Parser)]
#[command(
    name = "stratus",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Print errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Never emit ANSI color codes
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Skip interactive prompts (also set by CI / STRATUS_YES env vars)
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create the controller stack, bootstrap it, and provision
    Deploy(commands::deploy::DeployArgs),

    /// Bootstrap an already-deployed appliance
    Bootstrap(commands::bootstrap::BootstrapArgs),

    /// Print a sample environment configuration
    SampleEnv,
}

impl Cli {
    /// Dispatch the parsed command.
    ///
    /// # Errors
    ///
    /// Propagates whatever the selected command fails with.
    pub async fn run(self) -> Result<()> {
        let Cli { quiet, no_color, yes, command } = self;
        let non_interactive =
            yes || std::env::var("CI").is_ok() || std::env::var("STRATUS_YES").is_ok();
        match command {
            Command::Deploy(args) => {
                let ctx = OutputContext::new(no_color, quiet);
                commands::deploy::run(&ctx, non_interactive, args).await
            }
            Command::Bootstrap(args) => {
                let ctx = OutputContext::new(no_color, quiet);
                commands::bootstrap::run(&ctx, args).await
            }
            Command::SampleEnv => {
                commands::sample_env::run();
                Ok(())
            }
        }
    }
}
