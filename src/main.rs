//! ticc13x0 CLI
//!
//! Entry point for the ticc13x0 command-line application.

use anyhow::Result;
use clap::Parser;

use ticc13x0::cli::output::display_error;
use ticc13x0::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(cli.log_level().into()),
        )
        .init();

    match cli.run() {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
