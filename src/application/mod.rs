//! Application layer — port definitions and use-case orchestration.
//!
//! Imports only from `crate::domain`. Concrete I/O lives in `crate::infra`
//! and is injected through the traits in [`ports`].

pub mod ports;
pub mod services;
