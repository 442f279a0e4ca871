//! Stack deployment through the `aws` CLI.

use std::process::Output;

use tracing::debug;

use crate::application::ports::StackDeployer;
use crate::domain::error::HandoffError;
use crate::domain::stack::{StackOutputs, StackSpec, outputs_from_json, stack_parameters};

/// Production [`StackDeployer`] — shells out to the `aws` binary, which
/// carries the credential handling and signing this tool should not.
pub struct AwsCli;

impl AwsCli {
    /// Run one `aws cloudformation` subcommand with the [`StackSpec`]'s
    /// region and optional profile appended.
    async fn exec(&self, spec: &StackSpec, args: &[&str]) -> Result<Output, HandoffError> {
        debug!(subcommand = args.first(), "running aws cloudformation");
        let mut cmd = tokio::process::Command::new("aws");
        cmd.arg("cloudformation")
            .args(args)
            .args(["--region", &spec.region]);
        if let Some(profile) = &spec.profile {
            cmd.args(["--profile", profile]);
        }
        let output = cmd
            .output()
            .await
            .map_err(|e| HandoffError::Deploy(format!("failed to run aws: {e}")))?;
        if !output.status.success() {
            return Err(HandoffError::Deploy(
                String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            ));
        }
        Ok(output)
    }
}

impl StackDeployer for AwsCli {
    async fn deploy(&self, spec: &StackSpec) -> Result<StackOutputs, HandoffError> {
        let parameters = stack_parameters(spec);
        let mut create: Vec<&str> = vec![
            "create-stack",
            "--stack-name",
            &spec.stack_name,
            "--template-url",
            &spec.template_url,
            "--capabilities",
            "CAPABILITY_NAMED_IAM",
            "--parameters",
        ];
        create.extend(parameters.iter().map(String::as_str));
        self.exec(spec, &create).await?;

        // Blocks until the stack reports CREATE_COMPLETE, or fails when it
        // rolls back.
        self.exec(
            spec,
            &["wait", "stack-create-complete", "--stack-name", &spec.stack_name],
        )
        .await?;

        let describe = self
            .exec(
                spec,
                &["describe-stacks", "--stack-name", &spec.stack_name, "--output", "json"],
            )
            .await?;
        let doc: serde_json::Value = serde_json::from_slice(&describe.stdout)
            .map_err(|e| HandoffError::Deploy(format!("unparseable describe-stacks output: {e}")))?;
        outputs_from_json(&doc)
    }
}
