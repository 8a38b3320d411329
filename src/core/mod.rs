//! Core module for the student portal

pub mod config;
pub mod error;
pub mod models;
pub mod persistence;
pub mod store;
pub mod teaching;

pub use error::{PortalError, Result};

/// Returns the current version of the student portal crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
