//! Readiness gates and probe budgets.

use std::time::Duration;

/// What one unauthenticated probe saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The endpoint answered with this HTTP status.
    Responded(u16),
    /// No response: connection refused, reset, timed out, or TLS failure.
    Unreachable(String),
}

/// Pass criterion for a readiness gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Any HTTP response passes, whatever the status. The appliance's web
    /// stack answers 50x while services are still starting, and an answer
    /// is all this gate asks for.
    Connected,
    /// Only a 200 passes. Used where the next step needs a working API.
    HttpOk,
}

impl Gate {
    /// Whether `outcome` satisfies this gate.
    #[must_use]
    pub fn passes(self, outcome: &ProbeOutcome) -> bool {
        match (self, outcome) {
            (Self::Connected, ProbeOutcome::Responded(_)) => true,
            (Self::HttpOk, ProbeOutcome::Responded(status)) => *status == 200,
            (_, ProbeOutcome::Unreachable(_)) => false,
        }
    }

    /// Short label for progress output, phrased as "waiting until host ...".
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::Connected => "accepts connections",
            Self::HttpOk => "answers with HTTP 200",
        }
    }
}

/// Attempt budget for one readiness gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPlan {
    /// Probes made before giving up. At least 1.
    pub max_attempts: u32,
    /// Slept once before the first probe.
    pub initial_delay: Duration,
    /// Slept between consecutive probes.
    pub poll_interval: Duration,
}

impl WaitPlan {
    /// Freshly launched appliance: the instance takes on the order of a
    /// minute to accept connections at all.
    pub const CONNECT: Self = Self {
        max_attempts: 4,
        initial_delay: Duration::from_secs(80),
        poll_interval: Duration::from_secs(30),
    };

    /// Web stack warm-up, probed immediately: the endpoint already accepts
    /// connections, so no initial delay.
    pub const READY: Self = Self {
        max_attempts: 6,
        initial_delay: Duration::ZERO,
        poll_interval: Duration::from_secs(30),
    };

    /// After the first-boot upgrade: the web stack restarts and the upgrade
    /// itself can take several minutes, so the budget is the widest.
    pub const POST_UPGRADE: Self = Self {
        max_attempts: 10,
        initial_delay: Duration::from_secs(60),
        poll_interval: Duration::from_secs(30),
    };
}
