//! # Carebook Common
//!
//! Shared vocabulary of the workspace: the record types, the error taxonomy,
//! runtime configuration and the traits (ports) that the core implements.

pub mod clock;
pub mod config;
pub mod error;
pub mod macros;
pub mod records;
pub mod session;
pub mod store;

#[doc(hidden)]
pub use tracing;
