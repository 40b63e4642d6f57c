use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "cnn")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "File utilities for the CNN image classification project")]
pub struct Cli {
    /// Settings file (TOML, YAML or JSON); `CNN__*` variables override it
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a YAML configuration file as pretty JSON
    Config {
        /// Path to the YAML file; defaults to the configured `artifacts.config_file`
        path: Option<PathBuf>,
        /// Read the configured `artifacts.params_file` instead of the config file
        #[arg(long, conflicts_with = "path")]
        params: bool,
    },
    /// Create the artifacts root directory from the settings
    Prepare {},
    /// Print the approximate size of a file in KB
    Size { path: PathBuf },
    /// Encode a file as base64 text
    EncodeImage {
        path: PathBuf,
        /// Write the text to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Decode a base64 text file back into an image
    DecodeImage {
        /// File holding the base64 text
        input: PathBuf,
        /// Where the decoded bytes are written
        output: PathBuf,
    },
    /// Show package metadata
    About {},
}
