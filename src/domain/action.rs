//! Admin actions and the control API response shape.

use serde::Deserialize;

use crate::domain::session::ADMIN_USERNAME;

/// A named remote operation against the appliance control API.
///
/// Actions are built fresh for every call. The session token is attached at
/// send time through [`AdminAction::form_pairs`] because the valid token may
/// rotate between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminAction {
    action: String,
    subaction: Option<String>,
    params: Vec<(String, String)>,
}

impl AdminAction {
    #[must_use]
    pub fn new(action: &str) -> Self {
        Self {
            action: action.to_owned(),
            subaction: None,
            params: Vec::new(),
        }
    }

    #[must_use]
    pub fn subaction(mut self, subaction: &str) -> Self {
        self.subaction = Some(subaction.to_owned());
        self
    }

    #[must_use]
    pub fn param(mut self, key: &str, value: &str) -> Self {
        self.params.push((key.to_owned(), value.to_owned()));
        self
    }

    /// Wire name of the action, as reported in errors.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.action
    }

    /// Complete form body for one send, token included.
    #[must_use]
    pub fn form_pairs(&self, cid: &str) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("action".to_owned(), self.action.clone()),
            ("CID".to_owned(), cid.to_owned()),
        ];
        if let Some(subaction) = &self.subaction {
            pairs.push(("subaction".to_owned(), subaction.clone()));
        }
        pairs.extend(self.params.iter().cloned());
        pairs
    }

    // ── The wire actions the bootstrap sequence sends ────────────────────

    /// Register the admin account's recovery email.
    #[must_use]
    pub fn add_admin_email(email: &str) -> Self {
        Self::new("add_admin_email_addr").param("admin_email", email)
    }

    /// Replace the admin password. The appliance wants the current password
    /// under two parameter names.
    #[must_use]
    pub fn change_admin_password(current: &str, new: &str) -> Self {
        Self::new("edit_account_user")
            .param("account_name", ADMIN_USERNAME)
            .param("username", ADMIN_USERNAME)
            .param("password", current)
            .param("what", "password")
            .param("old_password", current)
            .param("new_password", new)
    }

    /// Run first-boot setup, upgrading to `version` when given and to the
    /// latest release otherwise. Restarts the appliance's web stack.
    #[must_use]
    pub fn run_initial_setup(version: Option<&str>) -> Self {
        let action = Self::new("initial_setup").subaction("run");
        match version {
            Some(version) => action.param("version", version),
            None => action,
        }
    }

    /// Register the customer license id.
    #[must_use]
    pub fn register_license(customer_id: &str) -> Self {
        Self::new("setup_customer_id").param("customer_id", customer_id)
    }
}

/// Minimal parse of the control API's JSON reply.
///
/// The appliance reports success through `return`; the rest of the body is
/// opaque to this tool and carried through untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    /// Whether the appliance accepted the call.
    #[serde(rename = "return")]
    pub success: bool,
    /// Human-readable rejection reason, when given.
    #[serde(default)]
    pub reason: Option<String>,
    /// Session token, present on login replies.
    #[serde(rename = "CID", default)]
    pub cid: Option<String>,
    /// Action-specific payload.
    #[serde(default)]
    pub results: Option<serde_json::Value>,
}

impl ApiResponse {
    /// Rejection reason, or a placeholder when the appliance gave none.
    #[must_use]
    pub fn failure_reason(&self) -> String {
        self.reason
            .clone()
            .unwrap_or_else(|| "no reason given".to_owned())
    }
}
