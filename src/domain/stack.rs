//! Controller stack parameters and outputs.

use crate::domain::error::HandoffError;

/// Output keys the controller template publishes.
const OUT_EIP: &str = "ApplianceEIP";
const OUT_ACCOUNT_ID: &str = "AccountId";
const OUT_PRIVATE_IP: &str = "AppliancePrivateIP";
const OUT_ROLE_APP: &str = "ApplianceRoleAppARN";
const OUT_ROLE_EC2: &str = "ApplianceRoleEC2ARN";

/// Everything the deployment needs to create the controller stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackSpec {
    pub stack_name: String,
    pub template_url: String,
    pub vpc_id: String,
    pub subnet_id: String,
    pub key_pair: String,
    pub region: String,
    pub profile: Option<String>,
}

/// Named outputs of a completed controller stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackOutputs {
    /// Public address of the appliance.
    pub appliance_eip: String,
    /// Cloud account the stack was created in.
    pub account_id: String,
    /// Private address; the appliance's first-boot credential.
    pub appliance_private_ip: String,
    /// ARN of the application role attached to the appliance.
    pub role_app_arn: String,
    /// ARN of the instance role attached to the appliance.
    pub role_ec2_arn: String,
}

/// Parameter bindings for the controller template, in the CLI's
/// `ParameterKey=...,ParameterValue=...` shape.
#[must_use]
pub fn stack_parameters(spec: &StackSpec) -> [String; 3] {
    [
        format!("ParameterKey=VPCParam,ParameterValue={}", spec.vpc_id),
        format!("ParameterKey=SubnetParam,ParameterValue={}", spec.subnet_id),
        format!("ParameterKey=KeyNameParam,ParameterValue={}", spec.key_pair),
    ]
}

/// Extract the controller outputs from a `describe-stacks` document.
///
/// The document shape is `{"Stacks": [{"Outputs": [{"OutputKey", "OutputValue"}]}]}`;
/// only the first stack is read.
///
/// # Errors
///
/// Returns [`HandoffError::MissingOutput`] naming the first absent key.
pub fn outputs_from_json(doc: &serde_json::Value) -> Result<StackOutputs, HandoffError> {
    let outputs = doc
        .pointer("/Stacks/0/Outputs")
        .and_then(serde_json::Value::as_array);

    let find = |key: &str| -> Result<String, HandoffError> {
        outputs
            .into_iter()
            .flatten()
            .find(|entry| entry.get("OutputKey").and_then(serde_json::Value::as_str) == Some(key))
            .and_then(|entry| entry.get("OutputValue").and_then(serde_json::Value::as_str))
            .map(str::to_owned)
            .ok_or_else(|| HandoffError::MissingOutput { key: key.to_owned() })
    };

    Ok(StackOutputs {
        appliance_eip: find(OUT_EIP)?,
        account_id: find(OUT_ACCOUNT_ID)?,
        appliance_private_ip: find(OUT_PRIVATE_IP)?,
        role_app_arn: find(OUT_ROLE_APP)?,
        role_ec2_arn: find(OUT_ROLE_EC2)?,
    })
}
