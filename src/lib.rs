//! Shared library for the student portal
//! Contains the record store, teaching module, persistence, and configuration
//! used by the `studentportal` CLI.

pub mod core;
pub mod logger;

pub use crate::core::{config, get_version};
