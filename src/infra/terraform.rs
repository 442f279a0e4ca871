//! Declarative provisioning through the `terraform` CLI.

use std::path::Path;
use std::process::{ExitStatus, Stdio};

use tracing::debug;

use crate::application::ports::Provisioner;
use crate::domain::error::HandoffError;

/// Production [`Provisioner`] — shells out to the `terraform` binary with
/// stdio inherited, so its own plan and progress output streams straight
/// to the operator.
pub struct TerraformCli;

impl TerraformCli {
    async fn exec_status(&self, dir: &Path, args: &[String]) -> Result<ExitStatus, HandoffError> {
        debug!(?dir, ?args, "running terraform");
        tokio::process::Command::new("terraform")
            .arg(format!("-chdir={}", dir.display()))
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| HandoffError::Provision(format!("failed to run terraform: {e}")))
    }
}

impl Provisioner for TerraformCli {
    async fn init(&self, dir: &Path) -> Result<(), HandoffError> {
        let args: Vec<String> = ["init", "-input=false", "-upgrade"].map(str::to_owned).into();
        let status = self.exec_status(dir, &args).await?;
        if !status.success() {
            return Err(HandoffError::Provision(format!("terraform init exited with {status}")));
        }
        Ok(())
    }

    async fn apply(
        &self,
        dir: &Path,
        vars: &[(String, String)],
        var_file: Option<&str>,
    ) -> Result<(), HandoffError> {
        let mut args: Vec<String> =
            ["apply", "-input=false", "-auto-approve"].map(str::to_owned).into();
        if let Some(file) = var_file {
            args.push(format!("-var-file={file}"));
        }
        for (key, value) in vars {
            args.push("-var".to_owned());
            args.push(format!("{key}={value}"));
        }
        let status = self.exec_status(dir, &args).await?;
        if !status.success() {
            return Err(HandoffError::Provision(format!("terraform apply exited with {status}")));
        }
        Ok(())
    }
}
