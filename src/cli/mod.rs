//! CLI module for opsecret
//!
//! This module contains the command-line interface definition and the
//! glue between parsed arguments, configuration and the exporter.

pub mod commands;

pub use commands::*;
