//! Use-case services, generic over the ports they drive.

pub mod bootstrap;
pub mod handoff;
pub mod readiness;
