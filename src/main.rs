use clap::Parser;

use qrforge::cli::{self, Cli};
use qrforge::interactive;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Set log level based on flags
    let log_level = if args.debug {
        tracing::Level::DEBUG
    } else if args.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    // Initialize logger with proper stderr output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::debug!("qrforge {} starting", env!("CARGO_PKG_VERSION"));

    let result = if args.interactive {
        interactive::run()
    } else {
        cli::run(args)
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("run failed: {e}");
            Err(e.into())
        }
    }
}
