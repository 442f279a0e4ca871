//! Provisioning handoff — source checkout followed by a declarative apply.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::{ProgressReporter, Provisioner, SourceFetcher};
use crate::domain::config::HandoffConfig;

/// Variable names the provisioning source expects.
const VAR_CONTROLLER_IP: &str = "controller_ip";
const VAR_ACCOUNT_ID: &str = "account_id";

/// Check out the infrastructure source and apply it against the
/// bootstrapped appliance. `workdir` is a caller-owned scratch directory;
/// the checkout lands in its `clone` subdirectory.
///
/// # Errors
///
/// Returns a [`HandoffError`](crate::domain::error::HandoffError) when the
/// checkout, initialisation, or apply fails. Any failure is fatal — there
/// is no partial-success resumption.
pub async fn run_handoff(
    fetcher: &impl SourceFetcher,
    provisioner: &impl Provisioner,
    reporter: &impl ProgressReporter,
    config: &HandoffConfig,
    workdir: &Path,
    controller_ip: &str,
    account_id: &str,
) -> Result<()> {
    let checkout = workdir.join("clone");

    reporter.step(&format!("checking out {}...", config.source_url));
    fetcher
        .fetch(&config.source_url, config.source_branch.as_deref(), &checkout)
        .await?;

    reporter.step("initialising the provisioning working directory...");
    provisioner.init(&checkout).await?;

    reporter.step("applying the infrastructure definition...");
    let vars = [
        (VAR_CONTROLLER_IP.to_owned(), controller_ip.to_owned()),
        (VAR_ACCOUNT_ID.to_owned(), account_id.to_owned()),
    ];
    provisioner
        .apply(&checkout, &vars, config.var_file.as_deref())
        .await?;

    reporter.success("dependent infrastructure provisioned");
    Ok(())
}
