//! Appliance endpoint addresses.

/// Network addresses of a deployed controller appliance.
///
/// Both fields are bare hosts or IPs with no scheme; URL derivation happens
/// here and nowhere else. Immutable once resolved from the deployment output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplianceEndpoint {
    /// Publicly reachable address, target of every probe and API call.
    pub public_addr: String,
    /// In-VPC address. Doubles as the appliance's only valid credential
    /// until first boot completes.
    pub private_addr: String,
}

impl ApplianceEndpoint {
    #[must_use]
    pub fn new(public_addr: impl Into<String>, private_addr: impl Into<String>) -> Self {
        Self {
            public_addr: public_addr.into(),
            private_addr: private_addr.into(),
        }
    }

    /// Base URL of the control API.
    #[must_use]
    pub fn api_url(&self) -> String {
        format!("https://{}/v1/api", self.public_addr)
    }
}
