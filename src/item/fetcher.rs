//! Item retrieval through the 1Password CLI
//!
//! The exporter only depends on the [`ItemFetcher`] trait so the `op`
//! subprocess can be swapped for a fake in tests.

use std::fmt;
use std::process::{Command, Output, Stdio};
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use crate::error::{OpSecretError, Result};
use crate::utils::helpers::display_command;

/// Default name of the 1Password CLI binary
pub const DEFAULT_OP_PROGRAM: &str = "op";

/// Fully buffered result of one `op item get` invocation
#[derive(Clone)]
pub struct RawResponse {
    /// Exit code, `None` when the process was killed by a signal
    pub status: Option<i32>,
    pub stdout: Zeroizing<String>,
    pub stderr: String,
}

impl fmt::Debug for RawResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawResponse")
            .field("status", &self.status)
            .field("stdout", &format_args!("<{} bytes>", self.stdout.len()))
            .field("stderr", &self.stderr)
            .finish()
    }
}

impl RawResponse {
    pub fn new<S: Into<String>>(status: Option<i32>, stdout: S, stderr: S) -> Self {
        Self {
            status,
            stdout: Zeroizing::new(stdout.into()),
            stderr: stderr.into(),
        }
    }

    fn from_output(mut output: Output) -> Self {
        let stdout = Zeroizing::new(String::from_utf8_lossy(&output.stdout).into_owned());
        output.stdout.zeroize();

        Self {
            status: output.status.code(),
            stdout,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Source of raw item data
#[cfg_attr(test, mockall::automock)]
pub trait ItemFetcher {
    /// Fetch one item by name from one vault, with concealed values revealed
    fn fetch_item(&self, vault: &str, item: &str) -> Result<RawResponse>;
}

/// [`ItemFetcher`] backed by the `op` command-line tool
#[derive(Debug, Clone)]
pub struct OpCli {
    program: String,
}

impl OpCli {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments for `op item get` in JSON format with secrets revealed
    pub fn item_get_args<'a>(vault: &'a str, item: &'a str) -> [&'a str; 8] {
        [
            "item", "get", item, "--reveal", "--vault", vault, "--format", "json",
        ]
    }
}

impl ItemFetcher for OpCli {
    fn fetch_item(&self, vault: &str, item: &str) -> Result<RawResponse> {
        let args = Self::item_get_args(vault, item);
        debug!("Running: {}", display_command(&self.program, &args));

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                debug!("Failed to execute {}: {}", self.program, e);
                OpSecretError::retrieval(
                    vault,
                    item,
                    format!("Failed to execute '{}': {e}", self.program),
                )
            })?;

        let response = RawResponse::from_output(output);
        debug!(
            "{} exited with {:?} ({} bytes on stdout, {} bytes on stderr)",
            self.program,
            response.status,
            response.stdout.len(),
            response.stderr.len()
        );

        Ok(response)
    }
}
