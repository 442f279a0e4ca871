//! Domain layer — pure types and rules for appliance bootstrap.
//!
//! Nothing in here performs I/O or imports another layer: no `tokio`,
//! no `std::fs`/`std::process`/`std::net`, no `crate::application`,
//! `crate::infra`, or `crate::commands`. Everything is a synchronous
//! function over plain data.

pub mod action;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod phase;
pub mod readiness;
pub mod session;
pub mod stack;

#[allow(unused_imports)]
pub use action::{AdminAction, ApiResponse};
#[allow(unused_imports)]
pub use config::{BootstrapConfig, DeploymentSource, HandoffConfig};
#[allow(unused_imports)]
pub use endpoint::ApplianceEndpoint;
#[allow(unused_imports)]
pub use error::{ApiError, ConfigError, HandoffError, ReadinessError};
#[allow(unused_imports)]
pub use phase::BootstrapPhase;
#[allow(unused_imports)]
pub use readiness::{Gate, ProbeOutcome, WaitPlan};
#[allow(unused_imports)]
pub use session::{ADMIN_USERNAME, Session};
#[allow(unused_imports)]
pub use stack::{StackOutputs, StackSpec, outputs_from_json, stack_parameters};
