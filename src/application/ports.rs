//! Port trait definitions for the application layer.
//!
//! Ports are the contracts infrastructure must fulfill. This file depends
//! on `crate::domain` and nothing else; the adapters in `crate::infra`
//! implement these traits without being named here.

use std::path::Path;
use std::time::Duration;

use crate::domain::action::{AdminAction, ApiResponse};
use crate::domain::error::{ApiError, HandoffError};
use crate::domain::readiness::ProbeOutcome;
use crate::domain::session::Session;
use crate::domain::stack::{StackOutputs, StackSpec};

// ── Control API port ─────────────────────────────────────────────────────

/// Authenticated access to the appliance control API.
#[allow(async_fn_in_trait)]
pub trait ControllerApi {
    /// Exchange credentials for a session holding a fresh token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Auth`] when the appliance rejects the
    /// credentials and [`ApiError::Transport`] when no usable response
    /// arrived.
    async fn login(
        &self,
        base_url: &str,
        username: &str,
        password: &str,
    ) -> Result<Session, ApiError>;

    /// Send one admin action with the session's token attached.
    ///
    /// Never retried at this layer. Retry policy belongs to the caller,
    /// which knows whether re-sending a given action is safe.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Remote`] when the appliance refused the action
    /// and [`ApiError::Transport`] when no usable response arrived.
    async fn send(&self, session: &Session, action: &AdminAction) -> Result<ApiResponse, ApiError>;
}

// ── Readiness ports ──────────────────────────────────────────────────────

/// One unauthenticated HTTPS probe against a bare host.
#[allow(async_fn_in_trait)]
pub trait EndpointProbe {
    /// Probe the endpoint once. Failure to connect is an outcome, not an
    /// error — the retry loop decides what to make of it.
    async fn probe(&self, host: &str) -> ProbeOutcome;
}

/// Injected sleep, so readiness tests never wait wall-clock time.
#[allow(async_fn_in_trait)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

// ── Collaborator ports ───────────────────────────────────────────────────

/// Stack deployment: named parameters in, named outputs out.
#[allow(async_fn_in_trait)]
pub trait StackDeployer {
    /// Create the stack, wait until it stabilises, and return its outputs.
    ///
    /// # Errors
    ///
    /// Returns [`HandoffError::Deploy`] when creation or stabilisation
    /// fails and [`HandoffError::MissingOutput`] when an expected output
    /// is absent from the result.
    async fn deploy(&self, spec: &StackSpec) -> Result<StackOutputs, HandoffError>;
}

/// Source checkout for the provisioning handoff.
#[allow(async_fn_in_trait)]
pub trait SourceFetcher {
    /// Check out `url` (at `branch`, when given) into `dest`.
    ///
    /// # Errors
    ///
    /// Returns [`HandoffError::Fetch`] when the checkout fails.
    async fn fetch(&self, url: &str, branch: Option<&str>, dest: &Path)
    -> Result<(), HandoffError>;
}

/// Declarative provisioning over a checked-out working directory.
#[allow(async_fn_in_trait)]
pub trait Provisioner {
    /// Initialise the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`HandoffError::Provision`] when initialisation fails.
    async fn init(&self, dir: &Path) -> Result<(), HandoffError>;

    /// Apply the configuration with the given variables.
    ///
    /// # Errors
    ///
    /// Returns [`HandoffError::Provision`] when the apply fails.
    async fn apply(
        &self,
        dir: &Path,
        vars: &[(String, String)],
        var_file: Option<&str>,
    ) -> Result<(), HandoffError>;
}

// ── Progress reporting port ──────────────────────────────────────────────

/// Abstracts progress reporting so services can narrate without depending
/// on the presentation layer.
pub trait ProgressReporter {
    /// A step has started.
    fn step(&self, message: &str);
    /// A step finished cleanly.
    fn success(&self, message: &str);
    /// Something tolerable went wrong.
    fn warn(&self, message: &str);
}
