#![allow(clippy::print_stdout)]

use anyhow::Context;
use clap::Parser;
use cnn::domain::settings::AppSettings;
use cnn::kernel::config::load_config;
use cnn::logger::ConsoleStream;
use cnn::logging::build_logger;
use cnn_cli::{Cli, execute};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings: AppSettings =
        load_config(cli.settings.as_deref()).context("Critical: Settings are malformed")?;

    // stdout carries command output, so console logging goes to stderr.
    let log = build_logger(&settings.logging, ConsoleStream::Stderr)
        .context("Failed to set up logging")?;
    log.install()?;

    if let Some(output) = execute(&cli.command, &settings.artifacts)? {
        println!("{output}");
    }

    Ok(())
}
