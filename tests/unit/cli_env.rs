//! Unit tests for the environment-variable configuration surface.
//!
//! Env mutation is process-global, so every test here is `#[serial]`.

#![allow(clippy::expect_used, unsafe_code)]

use clap::Parser;
use serial_test::serial;
use stratus_cli::cli::{Cli, Command};

fn clear_stratus_env() {
    for key in [
        "STRATUS_PUBLIC_IP",
        "STRATUS_PRIVATE_IP",
        "STRATUS_ACCOUNT_ID",
        "STRATUS_ADMIN_EMAIL",
        "STRATUS_NEW_PASSWORD",
        "STRATUS_PASSWORD",
        "STRATUS_LICENSE",
        "STRATUS_TARGET_VERSION",
        "STRATUS_SOURCE_URL",
        "STRATUS_SOURCE_BRANCH",
        "STRATUS_VAR_FILE",
        "STRATUS_STACK_NAME",
        "STRATUS_TEMPLATE_URL",
        "STRATUS_VPC_ID",
        "STRATUS_SUBNET_ID",
        "STRATUS_KEY_PAIR",
        "AWS_REGION",
        "AWS_PROFILE",
    ] {
        // SAFETY: #[serial] prevents concurrent env access within this
        // test binary.
        unsafe { std::env::remove_var(key) };
    }
}

#[test]
#[serial]
fn bootstrap_reads_addresses_from_the_environment() {
    clear_stratus_env();
    // SAFETY: #[serial] prevents concurrent env access.
    unsafe {
        std::env::set_var("STRATUS_PUBLIC_IP", "203.0.113.9");
        std::env::set_var("STRATUS_PRIVATE_IP", "10.0.0.5");
        std::env::set_var("STRATUS_LICENSE", "LIC123");
    }

    let cli = Cli::try_parse_from(["stratus", "bootstrap", "--skip-provision"])
        .expect("env-supplied addresses should parse");
    clear_stratus_env();

    let Command::Bootstrap(args) = cli.command else {
        panic!("expected the bootstrap subcommand");
    };
    assert_eq!(args.public_ip, "203.0.113.9");
    assert_eq!(args.private_ip, "10.0.0.5");
    assert_eq!(args.bootstrap.license.as_deref(), Some("LIC123"));
}

#[test]
#[serial]
fn flag_overrides_the_environment() {
    clear_stratus_env();
    // SAFETY: #[serial] prevents concurrent env access.
    unsafe {
        std::env::set_var("STRATUS_LICENSE", "env-license");
    }

    let cli = Cli::try_parse_from([
        "stratus",
        "bootstrap",
        "--public-ip",
        "203.0.113.9",
        "--private-ip",
        "10.0.0.5",
        "--license",
        "flag-license",
        "--skip-provision",
    ])
    .expect("flags should parse");
    clear_stratus_env();

    let Command::Bootstrap(args) = cli.command else {
        panic!("expected the bootstrap subcommand");
    };
    assert_eq!(args.bootstrap.license.as_deref(), Some("flag-license"));
}

#[test]
#[serial]
fn missing_addresses_fail_the_parse() {
    clear_stratus_env();

    let parsed = Cli::try_parse_from(["stratus", "bootstrap", "--license", "LIC123"]);
    assert!(parsed.is_err(), "bootstrap without addresses must not parse");
}

#[test]
#[serial]
fn deploy_reads_the_stack_surface_from_the_environment() {
    clear_stratus_env();
    // SAFETY: #[serial] prevents concurrent env access.
    unsafe {
        std::env::set_var("STRATUS_TEMPLATE_URL", "https://s3.amazonaws.com/example/cft.json");
        std::env::set_var("STRATUS_VPC_ID", "vpc-0921eb763899faddc");
        std::env::set_var("STRATUS_SUBNET_ID", "subnet-0291c878d736c57fb");
        std::env::set_var("STRATUS_KEY_PAIR", "controller-admin");
        std::env::set_var("AWS_REGION", "us-west-1");
    }

    let cli = Cli::try_parse_from(["stratus", "deploy", "--skip-provision"])
        .expect("env-supplied stack surface should parse");
    clear_stratus_env();

    let Command::Deploy(args) = cli.command else {
        panic!("expected the deploy subcommand");
    };
    assert_eq!(args.vpc_id, "vpc-0921eb763899faddc");
    assert_eq!(args.region, "us-west-1");
    // Default applies when neither flag nor env supplies a name.
    assert_eq!(args.stack_name, "stratus-controller");
}
