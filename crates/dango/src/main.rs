//! dango command-line entry point.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, handle_sanitize_command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the transformed text
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "Parsed arguments");

    let output = handle_sanitize_command(cli.config, cli.command)?;
    println!("{output}");
    Ok(())
}
