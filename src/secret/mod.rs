//! Kubernetes Secret export module
//!
//! This module turns a 1Password item into a `v1/Secret` manifest,
//! including field filtering and the export workflow itself.

pub mod exporter;
pub mod manifest;

pub use exporter::*;
pub use manifest::*;
