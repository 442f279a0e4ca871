//! Infrastructure layer — concrete implementations of the application
//! ports.
//!
//! All I/O-performing code lives here: HTTP clients, process execution,
//! and the tokio timer. Imports from `crate::domain` and
//! `crate::application::ports` are allowed; `crate::commands` and
//! `crate::output` are not.

pub mod api;
pub mod clock;
pub mod git;
pub mod probe;
pub mod stack;
pub mod terraform;
