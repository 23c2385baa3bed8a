//! artipub CLI binary.
//!
//! Entry point for the `artipub` plugin. It parses arguments and `PLUGIN_*`
//! environment variables with `clap`, initializes logging via `tracing`,
//! and dispatches to the command handler. Running without a subcommand
//! publishes, which is how CI hosts invoke the plugin image.

mod cli;
mod commands;

use miette::Result;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_LEVEL: &str = "info";

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::parse();
    let raw = args.settings.to_raw_config()?;

    let level = if args.verbose {
        "debug"
    } else {
        raw.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(level))
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
        )
        .init();

    commands::dispatch(args, raw).await
}
