//! HTTP adapter for the appliance control API.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::application::ports::ControllerApi;
use crate::domain::action::{AdminAction, ApiResponse};
use crate::domain::error::ApiError;
use crate::domain::session::Session;

/// Per-request budget for admin actions. Generous, because some actions
/// (setup, license registration) do real work before answering.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// [`ControllerApi`] over HTTPS with certificate validation disabled.
///
/// The appliance serves a self-signed certificate until it is configured
/// otherwise, so this client cannot validate the chain. It is scoped to
/// appliance traffic and must never be reused for other endpoints.
pub struct HttpControllerApi {
    client: Client,
}

impl HttpControllerApi {
    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error when the TLS backend fails to initialise.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("building the control API client")?;
        Ok(Self { client })
    }

    /// POST one form body and parse the standard reply envelope.
    async fn post_form<T: Serialize + ?Sized>(
        &self,
        url: &str,
        form: &T,
    ) -> Result<ApiResponse, ApiError> {
        let response = self
            .client
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(|e| ApiError::Transport { message: e.to_string() })?;
        response
            .json::<ApiResponse>()
            .await
            .map_err(|e| ApiError::Transport { message: e.to_string() })
    }
}

impl ControllerApi for HttpControllerApi {
    async fn login(
        &self,
        base_url: &str,
        username: &str,
        password: &str,
    ) -> Result<Session, ApiError> {
        debug!(base_url, username, "logging in");
        let form = [
            ("action", "login"),
            ("username", username),
            ("password", password),
        ];
        let body = self.post_form(base_url, &form).await?;
        if !body.success {
            return Err(ApiError::Auth {
                username: username.to_owned(),
                reason: body.failure_reason(),
            });
        }
        let Some(cid) = body.cid else {
            return Err(ApiError::Auth {
                username: username.to_owned(),
                reason: "login reply carried no token".to_owned(),
            });
        };
        Ok(Session {
            base_url: base_url.to_owned(),
            username: username.to_owned(),
            password: password.to_owned(),
            cid,
        })
    }

    async fn send(&self, session: &Session, action: &AdminAction) -> Result<ApiResponse, ApiError> {
        debug!(action = action.name(), "sending admin action");
        let body = self
            .post_form(&session.base_url, &action.form_pairs(&session.cid))
            .await?;
        if !body.success {
            return Err(ApiError::Remote {
                action: action.name().to_owned(),
                reason: body.failure_reason(),
            });
        }
        Ok(body)
    }
}
