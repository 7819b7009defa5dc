/*!
 * Courier CLI - interactive two-call remote-procedure client
 */

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use courier::config::CourierConfig;
use courier::error::{Result, EXIT_SUCCESS};
use courier::{input, logging, netaddr, orchestrator};
use tracing::error;

/// Sends an array to a remote sorting service and a message to a remote
/// delivery service over one shared channel.
#[derive(Parser, Debug)]
#[command(name = "courier", version, about, long_about = None)]
struct Cli {
    /// Remote endpoint both services are reached on
    #[arg(short, long, env = "COURIER_ENDPOINT")]
    endpoint: Option<String>,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Origin address to report instead of resolving the local interface
    #[arg(short, long)]
    origin: Option<String>,

    /// Log file path (default: stderr)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Resolve the effective configuration: CLI flags override file values,
    /// file values override defaults.
    fn into_config(self) -> Result<CourierConfig> {
        let mut config = match &self.config {
            Some(path) => CourierConfig::from_file(path)?,
            None => CourierConfig::default(),
        };

        if let Some(endpoint) = self.endpoint {
            config.endpoint = endpoint;
        }
        if let Some(origin) = self.origin {
            config.origin_address = Some(origin);
        }
        if let Some(log_file) = self.log_file {
            config.log_file = Some(log_file);
        }
        if self.verbose {
            config.verbose = true;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() {
    let code = match run(Cli::parse()).await {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("Error: {err}");
            err.exit_code()
        }
    };

    process::exit(code);
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.into_config()?;

    logging::init_logging(&config)?;

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let input = input::collect(&mut reader, &mut out)?;

    // Resolved once, before either call is issued
    let origin_address = match &config.origin_address {
        Some(address) => address.clone(),
        None => netaddr::resolve_origin_address()?,
    };

    orchestrator::execute(&config, input, &origin_address, &mut out).await
}
