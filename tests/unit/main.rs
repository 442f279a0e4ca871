//! Unit tests for the stratus CLI
//!
//! These tests use mocked ports and run fast without external I/O.

mod architecture;
mod cli_env;
mod readiness;
mod stack_outputs;
