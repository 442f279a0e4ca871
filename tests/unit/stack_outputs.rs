//! Unit tests for stack parameter binding and output parsing.

#![allow(clippy::expect_used)]

use serde_json::json;
use stratus_cli::domain::error::HandoffError;
use stratus_cli::domain::stack::{StackSpec, outputs_from_json, stack_parameters};

fn describe_doc() -> serde_json::Value {
    json!({
        "Stacks": [{
            "StackName": "stratus-controller",
            "StackStatus": "CREATE_COMPLETE",
            "Outputs": [
                { "OutputKey": "ApplianceEIP", "OutputValue": "203.0.113.9" },
                { "OutputKey": "AccountId", "OutputValue": "123456789012" },
                { "OutputKey": "AppliancePrivateIP", "OutputValue": "10.0.0.5" },
                { "OutputKey": "ApplianceRoleAppARN", "OutputValue": "arn:aws:iam::123456789012:role/app" },
                { "OutputKey": "ApplianceRoleEC2ARN", "OutputValue": "arn:aws:iam::123456789012:role/ec2" }
            ]
        }]
    })
}

fn spec() -> StackSpec {
    StackSpec {
        stack_name: "stratus-controller".to_owned(),
        template_url: "https://s3.amazonaws.com/example/controller-cft.json".to_owned(),
        vpc_id: "vpc-0921eb763899faddc".to_owned(),
        subnet_id: "subnet-0291c878d736c57fb".to_owned(),
        key_pair: "controller-admin".to_owned(),
        region: "us-west-1".to_owned(),
        profile: None,
    }
}

#[test]
fn extracts_all_five_outputs() {
    let outputs = outputs_from_json(&describe_doc()).expect("complete document should parse");
    assert_eq!(outputs.appliance_eip, "203.0.113.9");
    assert_eq!(outputs.account_id, "123456789012");
    assert_eq!(outputs.appliance_private_ip, "10.0.0.5");
    assert_eq!(outputs.role_app_arn, "arn:aws:iam::123456789012:role/app");
    assert_eq!(outputs.role_ec2_arn, "arn:aws:iam::123456789012:role/ec2");
}

#[test]
fn output_order_does_not_matter() {
    let mut doc = describe_doc();
    let outputs = doc
        .pointer_mut("/Stacks/0/Outputs")
        .and_then(serde_json::Value::as_array_mut)
        .expect("outputs array");
    outputs.reverse();
    assert!(outputs_from_json(&doc).is_ok());
}

#[test]
fn missing_output_error_names_the_key() {
    let mut doc = describe_doc();
    let outputs = doc
        .pointer_mut("/Stacks/0/Outputs")
        .and_then(serde_json::Value::as_array_mut)
        .expect("outputs array");
    outputs.retain(|entry| entry["OutputKey"] != "AccountId");

    let err = outputs_from_json(&doc).expect_err("missing key must fail");
    assert!(matches!(err, HandoffError::MissingOutput { key } if key == "AccountId"));
}

#[test]
fn empty_stack_list_is_an_error() {
    let err = outputs_from_json(&json!({ "Stacks": [] })).expect_err("no stacks must fail");
    assert!(matches!(err, HandoffError::MissingOutput { .. }));
}

#[test]
fn parameters_bind_the_template_keys() {
    let params = stack_parameters(&spec());
    assert_eq!(params[0], "ParameterKey=VPCParam,ParameterValue=vpc-0921eb763899faddc");
    assert_eq!(params[1], "ParameterKey=SubnetParam,ParameterValue=subnet-0291c878d736c57fb");
    assert_eq!(params[2], "ParameterKey=KeyNameParam,ParameterValue=controller-admin");
}
