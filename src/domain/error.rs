//! Typed error enums for the domain layer.
//!
//! Every variant implements `thiserror::Error`; callers outside the domain
//! lift them into `anyhow::Error` with `?`. Like the rest of the layer,
//! this file sees no other layer and no I/O.

use thiserror::Error;

// ── Readiness errors ─────────────────────────────────────────────────────

/// A readiness gate exhausted its attempt budget.
#[derive(Debug, Error)]
pub enum ReadinessError {
    #[error("{host} did not become ready after {attempts} probes")]
    Timeout { host: String, attempts: u32 },
}

// ── Control API errors ───────────────────────────────────────────────────

/// Failures talking to the appliance control API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Login rejected; the caller holds no session and must not proceed.
    #[error("login rejected for '{username}': {reason}")]
    Auth { username: String, reason: String },

    /// The appliance answered and refused the action.
    #[error("appliance rejected '{action}': {reason}")]
    Remote { action: String, reason: String },

    /// No usable response: connection failure, timeout, or an unparseable
    /// body. Says nothing about whether the appliance acted.
    #[error("request failed: {message}")]
    Transport { message: String },
}

// ── Collaborator errors ──────────────────────────────────────────────────

/// Failures in the deployment and provisioning collaborators.
#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("stack deployment failed: {0}")]
    Deploy(String),

    #[error("stack output '{key}' missing from deployment result")]
    MissingOutput { key: String },

    #[error("source checkout failed: {0}")]
    Fetch(String),

    #[error("provisioning failed: {0}")]
    Provision(String),
}

// ── Configuration errors ─────────────────────────────────────────────────

/// Invalid run configuration, caught before any network call.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("admin email required for first boot (set --admin-email or STRATUS_ADMIN_EMAIL)")]
    MissingEmail,

    #[error("admin email '{0}' is not a valid address")]
    InvalidEmail(String),

    #[error("new password required for first boot (set --new-password or STRATUS_NEW_PASSWORD)")]
    MissingNewPassword,

    #[error("current password required when first boot is skipped (set --password or STRATUS_PASSWORD)")]
    MissingPassword,

    #[error("license id required (set --license or STRATUS_LICENSE)")]
    MissingLicense,

    #[error("account id required for provisioning (deploy through a stack or set --account-id)")]
    MissingAccountId,

    #[error("source url required for provisioning (set --source-url or pass --skip-provision)")]
    MissingSourceUrl,
}
