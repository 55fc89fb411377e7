//! Utility functions module

pub mod helpers;

pub use helpers::*;
