#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;

use crate::handlers::init;
use crate::models::args::{AppCommands, Cli};

use anyhow::Result;
use clap::Parser;
use cnn_logger::Logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log = Logger::builder().init()?;

    match cli.command {
        AppCommands::Init(args) => init::init_project(&args)?,
    }

    Ok(())
}
