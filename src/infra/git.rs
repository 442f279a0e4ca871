//! Source checkout through the `git` CLI.

use std::path::Path;

use tracing::debug;

use crate::application::ports::SourceFetcher;
use crate::domain::error::HandoffError;

/// Production [`SourceFetcher`] — shells out to the `git` binary. A shallow
/// single-branch clone is all the handoff needs.
pub struct GitCli;

impl SourceFetcher for GitCli {
    async fn fetch(
        &self,
        url: &str,
        branch: Option<&str>,
        dest: &Path,
    ) -> Result<(), HandoffError> {
        debug!(url, ?branch, "cloning source tree");
        let target = dest.to_string_lossy();
        let mut args: Vec<&str> = vec!["clone", "--depth", "1"];
        if let Some(branch) = branch {
            args.extend(["--branch", branch, "--single-branch"]);
        }
        args.extend([url, target.as_ref()]);

        let output = tokio::process::Command::new("git")
            .args(&args)
            .output()
            .await
            .map_err(|e| HandoffError::Fetch(format!("failed to run git: {e}")))?;
        if !output.status.success() {
            return Err(HandoffError::Fetch(
                String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            ));
        }
        Ok(())
    }
}
