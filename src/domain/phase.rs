//! First-boot progress phases.

/// Progress marker for the bootstrap sequence.
///
/// Transitions are strictly forward through [`BootstrapPhase::next`]; a run
/// never moves back. The phase lives for one process and is discarded at
/// exit — a re-run starts from `NotStarted` and relies on the appliance
/// handling repeated actions idempotently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BootstrapPhase {
    NotStarted,
    EmailSet,
    PasswordChanged,
    UpgradeRequested,
    UpgradeComplete,
    LicenseRegistered,
}

impl BootstrapPhase {
    /// The phase that follows this one, or `None` once the sequence is done.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::NotStarted => Some(Self::EmailSet),
            Self::EmailSet => Some(Self::PasswordChanged),
            Self::PasswordChanged => Some(Self::UpgradeRequested),
            Self::UpgradeRequested => Some(Self::UpgradeComplete),
            Self::UpgradeComplete => Some(Self::LicenseRegistered),
            Self::LicenseRegistered => None,
        }
    }

    /// Progress label for the work that reaches this phase.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::NotStarted => "not started",
            Self::EmailSet => "registering admin email",
            Self::PasswordChanged => "rotating admin password",
            Self::UpgradeRequested => "requesting software upgrade",
            Self::UpgradeComplete => "waiting out the software upgrade",
            Self::LicenseRegistered => "registering license",
        }
    }
}
