//! CLI arguments and command execution
//!
//! This module defines the command-line interface using clap and runs
//! the export against the configured `op` binary.

use clap::Parser;
use std::io::Write;

use crate::config::Config;
use crate::error::{OpSecretError, Result};
use crate::item::OpCli;
use crate::secret::{ExportRequest, SecretExporter};

#[derive(Debug, Parser)]
#[command(name = "opsecret")]
#[command(about = "Print a 1Password item as a Kubernetes Secret manifest")]
#[command(version, author)]
pub struct Cli {
    /// Vault to read the item from
    pub vault_id: String,

    /// Name of the item to export
    pub item_name: String,

    /// Name of the generated Secret (defaults to the item name)
    pub secret_name: Option<String>,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,

    /// Path to the 1Password CLI binary
    #[arg(long, value_name = "PATH")]
    pub op_path: Option<String>,
}

impl Cli {
    /// Parse `args`, mapping clap failures to [`OpSecretError::Usage`].
    ///
    /// `--help` and `--version` are returned as `Ok(None)` after printing.
    pub fn try_parse_args<I, T>(args: I) -> Result<Option<Self>>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => Ok(Some(cli)),
            Err(e) if !e.use_stderr() => {
                e.print()?;
                Ok(None)
            }
            Err(e) => Err(OpSecretError::usage(e.render().to_string().trim_end())),
        }
    }

    /// Layer command-line flags over the loaded configuration
    pub fn apply_to(&self, config: &mut Config) {
        if self.debug {
            config.debug = true;
        }

        if let Some(op_path) = &self.op_path {
            config.op_path = op_path.clone();
        }
    }

    pub fn request(&self) -> ExportRequest {
        ExportRequest::new(
            self.vault_id.clone(),
            self.item_name.clone(),
            self.secret_name.clone(),
        )
    }

    pub fn execute<W: Write>(&self, config: &Config, out: &mut W) -> Result<()> {
        config.validate()?;

        SecretExporter::new(OpCli::new(config.op_path.as_str()))
            .with_concealed_type(config.concealed_type.as_str())
            .export(&self.request(), out)
    }
}
