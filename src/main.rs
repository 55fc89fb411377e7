//! opsecret - 1Password to Kubernetes Secret exporter
//!
//! Fetches one item with the `op` CLI and prints it as a `v1/Secret`
//! manifest on stdout.

use std::io;
use tracing::{debug, warn};
use tracing_subscriber::{
    layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

use opsecret::cli::Cli;
use opsecret::config::{load_config, Config};
use opsecret::error::Result;

fn main() {
    if let Err(e) = run() {
        debug!("Exiting after error: {:?}", e);
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let cli = match Cli::try_parse_args(std::env::args_os())? {
        Some(cli) => cli,
        None => return Ok(()),
    };

    let log_filter = init_logging(cli.debug);

    // Config file and environment, then command-line flags
    let mut config: Config = load_config()?;
    cli.apply_to(&mut config);

    if config.debug && !cli.debug {
        if let Err(e) = log_filter.reload(log_filter_for(true)) {
            warn!("Failed to enable debug logging: {}", e);
        }
    }
    debug!("Using configuration: {:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli.execute(&config, &mut out)
}

fn log_filter_for(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::new("opsecret=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "opsecret=warn".into())
    }
}

/// Log to stderr so stdout carries only the manifest.
///
/// The returned handle swaps the filter once the config file has been read.
fn init_logging(debug: bool) -> reload::Handle<EnvFilter, Registry> {
    let (filter, handle) = reload::Layer::new(log_filter_for(debug));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    handle
}
