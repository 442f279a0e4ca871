//! Authenticated control-API sessions.

/// Username of the appliance's built-in administrator account. The control
/// API recognises no other account during bootstrap.
pub const ADMIN_USERNAME: &str = "admin";

/// An authenticated session against one appliance.
///
/// Sessions are immutable: the appliance invalidates the token server-side
/// on a password change or a restart, so callers obtain a replacement
/// through a fresh login rather than mutating the token in place. Held in
/// memory only, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Control API base URL this session was opened against.
    pub base_url: String,
    /// Account the session is authenticated as.
    pub username: String,
    /// Credential that produced the token.
    pub password: String,
    /// Opaque session token, attached to every privileged call.
    pub cid: String,
}
