//! 1Password item module
//!
//! This module covers fetching a single item through the `op` CLI and
//! decoding its JSON representation.

pub mod fetcher;
pub mod models;

pub use fetcher::*;
pub use models::*;
