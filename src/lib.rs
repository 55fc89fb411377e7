//! opsecret - 1Password to Kubernetes Secret exporter
//!
//! Retrieves a single item through the 1Password CLI and renders its
//! concealed fields as a Kubernetes `Secret` manifest.

pub mod cli;
pub mod config;
pub mod error;
pub mod item;
pub mod secret;
pub mod utils;

// Re-export commonly used types
pub use error::{OpSecretError, Result};
