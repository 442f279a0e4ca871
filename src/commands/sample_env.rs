//! `stratus sample-env` — print a copy-paste environment configuration.

/// Print an export block covering every `STRATUS_*` variable the other
/// commands read, with placeholder values.
pub fn run() {
    println!(
        r#"# Replace the values below with your own before running stratus.
export STRATUS_PUBLIC_IP=203.0.113.9
export STRATUS_PRIVATE_IP=10.0.0.5
export STRATUS_ADMIN_EMAIL="ops@example.com"
export STRATUS_NEW_PASSWORD="ChangeMe123!"
export STRATUS_LICENSE="123421234123412378"
export STRATUS_SOURCE_URL="https://github.com/example/controller-infra"
export STRATUS_SOURCE_BRANCH=main
export STRATUS_TEMPLATE_URL="https://s3.amazonaws.com/example/controller-cft.json"
export STRATUS_VPC_ID=vpc-0921eb763899faddc
export STRATUS_SUBNET_ID=subnet-0291c878d736c57fb
export STRATUS_KEY_PAIR=controller-admin
export AWS_REGION=us-west-1"#
    );
}
