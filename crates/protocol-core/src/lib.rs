//! ProtoCol Core
//!
//! Shared plumbing for the ProtoCol crates: hash collection aliases,
//! logging setup and configuration.

pub mod alloc;
pub mod config;
pub mod logging;

pub use config::{Config, LogConfig};
