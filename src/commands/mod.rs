//! Subcommand implementations and the flag groups they share.

pub mod bootstrap;
pub mod deploy;
pub mod sample_env;
pub mod up;

use clap::Args;

use crate::domain::config::{BootstrapConfig, HandoffConfig};
use crate::domain::error::ConfigError;

/// Bootstrap flags shared by `deploy` and `bootstrap`.
#[derive(Args)]
pub struct BootstrapOpts {
    /// Recovery email registered on the admin account during first boot
    #[arg(long, env = "STRATUS_ADMIN_EMAIL")]
    pub admin_email: Option<String>,

    /// Password that replaces the first-boot default
    #[arg(long, env = "STRATUS_NEW_PASSWORD")]
    pub new_password: Option<String>,

    /// License id registered on the appliance
    #[arg(long, env = "STRATUS_LICENSE")]
    pub license: Option<String>,

    /// Target software version for the first-boot upgrade (latest when unset)
    #[arg(long, env = "STRATUS_TARGET_VERSION")]
    pub target_version: Option<String>,

    /// Appliance is already past first boot; only register the license
    #[arg(long)]
    pub skip_first_boot: bool,

    /// Current admin password (required with --skip-first-boot)
    #[arg(long, env = "STRATUS_PASSWORD")]
    pub password: Option<String>,
}

impl BootstrapOpts {
    /// Convert into the domain configuration. Field presence is checked by
    /// [`BootstrapConfig::validate`], not here.
    #[must_use]
    pub fn into_config(self) -> BootstrapConfig {
        BootstrapConfig {
            admin_email: self.admin_email.unwrap_or_default(),
            new_password: self.new_password.unwrap_or_default(),
            password: self.password,
            license_id: self.license.unwrap_or_default(),
            target_version: self.target_version,
            first_boot: !self.skip_first_boot,
        }
    }
}

/// Provisioning-handoff flags shared by `deploy` and `bootstrap`.
#[derive(Args)]
pub struct HandoffOpts {
    /// Git URL of the provisioning source tree
    #[arg(long, env = "STRATUS_SOURCE_URL")]
    pub source_url: Option<String>,

    /// Branch of the source tree to check out
    #[arg(long, env = "STRATUS_SOURCE_BRANCH")]
    pub source_branch: Option<String>,

    /// Variable file forwarded to the provisioning tool
    #[arg(long, env = "STRATUS_VAR_FILE")]
    pub var_file: Option<String>,

    /// Skip the provisioning handoff after bootstrap
    #[arg(long)]
    pub skip_provision: bool,
}

impl HandoffOpts {
    /// Convert into the domain configuration; `None` when the handoff is
    /// disabled.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSourceUrl`] when the handoff is enabled
    /// without a source tree to apply.
    pub fn into_config(self) -> Result<Option<HandoffConfig>, ConfigError> {
        if self.skip_provision {
            return Ok(None);
        }
        let Some(source_url) = self.source_url else {
            return Err(ConfigError::MissingSourceUrl);
        };
        Ok(Some(HandoffConfig {
            source_url,
            source_branch: self.source_branch,
            var_file: self.var_file,
        }))
    }
}
