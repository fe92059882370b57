//! # `cicdez`
//!
//! Loads a compose file, validates its CI/CD extension fields
//! (`local_configs`, `prebuild`, `sensitive`) and prints the canonical model.
//!
//! ## Usage
//!
//! ```sh
//! cicdez --file compose.yaml --format json
//! ```
//!
//! Every invalid field is reported with its path, e.g.
//! `services.web.local_configs[1].target: missing required field`.

use anyhow::Result;
use cicdez::cli::Args;
use cicdez::error::ComposeError;
use cicdez::system::RealSystem;
use clap::Parser as _;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    // Model goes to stdout, so keep logging quiet unless asked for
    let log_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let system = RealSystem::new();
    match cicdez::run(&args, &system) {
        Ok(()) => Ok(()),
        Err(err) => {
            error!("{}", err);
            std::process::exit(
                err.downcast_ref::<ComposeError>()
                    .map_or(1, ComposeError::exit_code),
            );
        }
    }
}
