//! # givebox_core
//!
//! Core domain logic for Givebox.

pub mod donations;
pub mod migrate;
pub mod models;
pub mod session;
pub mod uuid;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
