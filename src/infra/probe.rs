//! Unauthenticated HTTPS probe behind the readiness gates.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;

use crate::application::ports::EndpointProbe;
use crate::domain::readiness::ProbeOutcome;

/// Per-probe budget. Short: the retry loop, not the request, owns the wait.
const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Probes `https://{host}` with certificate validation disabled. The body
/// is discarded; only reachability and status matter.
pub struct HttpsProbe {
    client: Client,
}

impl HttpsProbe {
    /// Build the probe client.
    ///
    /// # Errors
    ///
    /// Returns an error when the TLS backend fails to initialise.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .timeout(PROBE_TIMEOUT)
            .build()
            .context("building the probe client")?;
        Ok(Self { client })
    }
}

impl EndpointProbe for HttpsProbe {
    async fn probe(&self, host: &str) -> ProbeOutcome {
        match self.client.get(format!("https://{host}")).send().await {
            Ok(response) => ProbeOutcome::Responded(response.status().as_u16()),
            Err(e) => ProbeOutcome::Unreachable(e.to_string()),
        }
    }
}
