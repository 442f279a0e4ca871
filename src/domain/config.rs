//! Run configuration threaded through the bootstrap pipeline.

use crate::domain::error::ConfigError;
use crate::domain::stack::StackSpec;

/// Where the appliance addresses come from. Chosen once at startup, by the
/// subcommand.
#[derive(Debug, Clone)]
pub enum DeploymentSource {
    /// Create the controller stack first and read the addresses from its
    /// outputs.
    Stack(StackSpec),
    /// The appliance already exists; addresses are supplied directly.
    Direct {
        public_addr: String,
        private_addr: String,
        account_id: Option<String>,
    },
}

impl DeploymentSource {
    /// Whether this source can produce the account id the provisioning
    /// handoff needs.
    #[must_use]
    pub fn provides_account_id(&self) -> bool {
        match self {
            Self::Stack(_) => true,
            Self::Direct { account_id, .. } => account_id.is_some(),
        }
    }
}

/// Parameters for the bootstrap sequence against one appliance.
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// Recovery email registered on the admin account during first boot.
    pub admin_email: String,
    /// Password that replaces the first-boot default.
    pub new_password: String,
    /// Current admin password, for appliances already past first boot.
    pub password: Option<String>,
    /// License id registered as the final step.
    pub license_id: String,
    /// Target software version for the first-boot upgrade; latest release
    /// when unset.
    pub target_version: Option<String>,
    /// Whether the appliance is in first-boot state. When false the email,
    /// password, and upgrade steps are skipped entirely.
    pub first_boot: bool,
}

impl BootstrapConfig {
    /// Check the configuration before any network call is made.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.license_id.is_empty() {
            return Err(ConfigError::MissingLicense);
        }
        if self.first_boot {
            if self.admin_email.is_empty() {
                return Err(ConfigError::MissingEmail);
            }
            if !self.admin_email.contains('@') {
                return Err(ConfigError::InvalidEmail(self.admin_email.clone()));
            }
            if self.new_password.is_empty() {
                return Err(ConfigError::MissingNewPassword);
            }
        } else if self.password.as_deref().is_none_or(str::is_empty) {
            return Err(ConfigError::MissingPassword);
        }
        Ok(())
    }
}

/// Parameters for the provisioning handoff.
#[derive(Debug, Clone)]
pub struct HandoffConfig {
    /// Git URL of the infrastructure source tree.
    pub source_url: String,
    /// Branch to check out; the repository default when unset.
    pub source_branch: Option<String>,
    /// Variable file forwarded to the provisioning tool.
    pub var_file: Option<String>,
}
